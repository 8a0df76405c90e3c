//! Axis-aligned bounding boxes for drawing primitives.

use crate::util::Point;
use serde::{Deserialize, Serialize};

/// Minimal axis-aligned rectangle enclosing a primitive's control points.
///
/// Derived data: it is computed from a primitive and never edited on its own.
/// `x`/`y` are the minimum corner, `right`/`top` the maximum corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub right: f64,
    pub top: f64,
}

impl BoundingBox {
    /// A degenerate box covering a single point.
    pub fn at(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
            right: point.x,
            top: point.y,
        }
    }

    /// Box spanning two already-normalized corners.
    pub fn from_corners(min: Point, max: Point) -> Self {
        Self {
            x: min.x,
            y: min.y,
            right: max.x,
            top: max.y,
        }
    }

    /// Box enclosing every point, or `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::at(*first);
        for point in rest {
            bounds.include(*point);
        }
        Some(bounds)
    }

    /// Grows the box to cover `point`.
    pub fn include(&mut self, point: Point) {
        self.x = self.x.min(point.x);
        self.y = self.y.min(point.y);
        self.right = self.right.max(point.x);
        self.top = self.top.max(point.y);
    }

    pub fn width(&self) -> f64 {
        self.right - self.x
    }

    pub fn height(&self) -> f64 {
        self.top - self.y
    }

    /// True when the box spans a nonzero distance on at least one axis.
    pub fn has_extent(&self) -> bool {
        self.width() > 0.0 || self.height() > 0.0
    }
}
