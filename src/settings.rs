//! Drawing settings shared by every operation of a session.

use crate::draw::Color;

/// How each new gesture picks its paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorPolicy {
    /// Independent random RGB per gesture with fixed alphas
    Random { line_alpha: f64, fill_alpha: f64 },
    /// The same colors for every gesture
    Fixed { line: Color, fill: Color },
}

impl Default for ColorPolicy {
    fn default() -> Self {
        ColorPolicy::Random {
            line_alpha: 0.8,
            fill_alpha: 0.5,
        }
    }
}

/// Settings snapshot handed to an operation when it starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingSettings {
    /// Stroke width for outlines, freehand and polylines
    pub stroke_width: f64,
    /// Manhattan distance the pointer must exceed before freehand records a point
    pub freehand_threshold: f64,
    pub color_policy: ColorPolicy,
    /// Restart a polyline operation as soon as one finishes
    pub polyline_repeat: bool,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            freehand_threshold: 20.0,
            color_policy: ColorPolicy::default(),
            polyline_repeat: false,
        }
    }
}

impl DrawingSettings {
    /// Stroke color for the next gesture.
    pub fn line_color(&self) -> Color {
        match self.color_policy {
            ColorPolicy::Random { line_alpha, .. } => {
                Color::random(&mut rand::thread_rng(), line_alpha)
            }
            ColorPolicy::Fixed { line, .. } => line,
        }
    }

    /// Fill color for the next gesture.
    pub fn fill_color(&self) -> Color {
        match self.color_policy {
            ColorPolicy::Random { fill_alpha, .. } => {
                Color::random(&mut rand::thread_rng(), fill_alpha)
            }
            ColorPolicy::Fixed { fill, .. } => fill,
        }
    }
}
