//! Configuration enum types.

use crate::draw::{Color, RED, color::name_to_color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Paint choice for new gestures - a random color per gesture, a named color,
/// or RGB values.
///
/// # Examples
/// ```toml
/// # Fresh random color for every gesture
/// color = "random"
///
/// # Named color
/// color = "red"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// `random`, or a named color: red, green, blue, yellow, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// True for the `random` keyword (case-insensitive).
    pub fn is_random(&self) -> bool {
        matches!(self, ColorSpec::Name(name) if name.eq_ignore_ascii_case("random"))
    }

    /// Converts a fixed color specification to an opaque [`Color`].
    ///
    /// Unknown names (including `random`) fall back to red with a warning.
    /// RGB arrays are converted from the 0-255 range to 0.0-1.0.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using red", name);
                RED
            }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }
}
