//! Pointer event types delivered by the host UI layer.

use crate::util::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Right mouse button (finishes a polyline)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// One raw pointer event.
///
/// `position` is in device space unless `target_relative` is set, in which
/// case the host already mapped it into canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
    pub button: MouseButton,
    pub target_relative: bool,
}

impl PointerEvent {
    pub fn down(button: MouseButton, x: f64, y: f64) -> Self {
        Self::device(PointerKind::Down, button, x, y)
    }

    /// Pointer motion. The button is irrelevant for motion and reported as left.
    pub fn motion(x: f64, y: f64) -> Self {
        Self::device(PointerKind::Move, MouseButton::Left, x, y)
    }

    pub fn up(button: MouseButton, x: f64, y: f64) -> Self {
        Self::device(PointerKind::Up, button, x, y)
    }

    /// Marks the position as already canvas-local.
    pub fn relative(mut self) -> Self {
        self.target_relative = true;
        self
    }

    fn device(kind: PointerKind, button: MouseButton, x: f64, y: f64) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
            button,
            target_relative: false,
        }
    }
}
