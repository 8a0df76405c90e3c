//! Geometry helpers shared by primitives and operations.
//!
//! This module provides:
//! - [`Point`], the canvas-local coordinate pair used everywhere
//! - Corner normalization for drag-defined boxes
//! - Manhattan distance for freehand decimation

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A 2D point in canvas-local or device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Componentwise minimum of two points.
    pub fn min(self, other: Point) -> Point {
        Point::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Componentwise maximum of two points.
    pub fn max(self, other: Point) -> Point {
        Point::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Returns this point shifted by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Normalizes two drag corners into `(min, max)`.
///
/// The user may drag in any direction; the result always satisfies
/// `min.x <= max.x` and `min.y <= max.y`.
pub fn normalize_corners(origin: Point, current: Point) -> (Point, Point) {
    (origin.min(current), origin.max(current))
}

/// Manhattan distance `|dx| + |dy|` between two points.
pub fn manhattan_distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
