//! RGBA color type, named colors, and per-gesture random colors.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use strokepad::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let translucent = red.with_alpha(0.5);
/// assert_eq!(translucent.a, 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same RGB with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Picks an independent uniformly random RGB with the given alpha.
    ///
    /// Successive gestures use this so neighbouring strokes stay distinguishable.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, alpha: f64) -> Self {
        Self {
            r: rng.r#gen::<f64>(),
            g: rng.r#gen::<f64>(),
            b: rng.r#gen::<f64>(),
            a: alpha,
        }
    }
}

/// Maps color name strings to Color values (case-insensitive).
///
/// Used by the configuration system to parse color names from the config file.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_colors_keep_requested_alpha_and_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let color = Color::random(&mut rng, 0.8);
            assert_eq!(color.a, 0.8);
            for c in [color.r, color.g, color.b] {
                assert!((0.0..1.0).contains(&c));
            }
        }
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        assert_eq!(name_to_color("White"), Some(WHITE));
        assert_eq!(name_to_color("BLUE"), Some(BLUE));
        assert!(name_to_color("chartreuse").is_none());
    }
}
