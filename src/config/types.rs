//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the stroke and paint every new gesture starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Stroke width in pixels for outlines, freehand and polylines (valid range: 1.0 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Manhattan distance in pixels the pointer must exceed before freehand
    /// records another point (valid range: 0.0 - 200.0)
    #[serde(default = "default_freehand_threshold")]
    pub freehand_threshold: f64,

    /// `"random"` for a fresh color per gesture, a named color, or an RGB array
    #[serde(default = "default_color")]
    pub color: ColorSpec,

    /// Opacity of outlines, freehand strokes and polylines (valid range: 0.0 - 1.0)
    #[serde(default = "default_line_alpha")]
    pub line_alpha: f64,

    /// Opacity of filled boxes and ellipses (valid range: 0.0 - 1.0)
    #[serde(default = "default_fill_alpha")]
    pub fill_alpha: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            stroke_width: default_stroke_width(),
            freehand_threshold: default_freehand_threshold(),
            color: default_color(),
            line_alpha: default_line_alpha(),
            fill_alpha: default_fill_alpha(),
        }
    }
}

/// Polyline tool behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolylineConfig {
    /// Start a new polyline right after one is finished instead of waiting
    /// for the tool to be selected again
    #[serde(default)]
    pub repeat: bool,
}

/// Canvas dimensions used by the headless host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (minimum 1.0)
    #[serde(default = "default_canvas_width")]
    pub width: f64,

    /// Canvas height in pixels (minimum 1.0)
    #[serde(default = "default_canvas_height")]
    pub height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_stroke_width() -> f64 {
    2.0
}

fn default_freehand_threshold() -> f64 {
    20.0
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("random".to_string())
}

fn default_line_alpha() -> f64 {
    0.8
}

fn default_fill_alpha() -> f64 {
    0.5
}

fn default_canvas_width() -> f64 {
    800.0
}

fn default_canvas_height() -> f64 {
    600.0
}
