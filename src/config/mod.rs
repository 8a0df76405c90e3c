//! Configuration file support for strokepad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/strokepad/config.toml`. Settings cover stroke and paint
//! defaults, polyline behavior, and the headless canvas size.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, PolylineConfig};

use crate::settings::{ColorPolicy, DrawingSettings};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// stroke_width = 3.0
/// freehand_threshold = 20.0
/// color = "random"
/// line_alpha = 0.8
/// fill_alpha = 0.5
///
/// [polyline]
/// repeat = false
///
/// [canvas]
/// width = 800.0
/// height = 600.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Stroke and paint defaults for new gestures
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Polyline tool behavior
    #[serde(default)]
    pub polyline: PolylineConfig,

    /// Headless canvas dimensions
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `stroke_width`: 1.0 - 20.0
    /// - `freehand_threshold`: 0.0 - 200.0
    /// - `line_alpha`, `fill_alpha`: 0.0 - 1.0
    /// - `canvas.width`, `canvas.height`: at least 1.0
    pub fn validate_and_clamp(&mut self) {
        if !(1.0..=20.0).contains(&self.drawing.stroke_width) {
            log::warn!(
                "Invalid stroke_width {:.1}, clamping to 1.0-20.0 range",
                self.drawing.stroke_width
            );
            self.drawing.stroke_width = clamp_or(self.drawing.stroke_width, 1.0, 20.0, 2.0);
        }

        if !(0.0..=200.0).contains(&self.drawing.freehand_threshold) {
            log::warn!(
                "Invalid freehand_threshold {:.1}, clamping to 0.0-200.0 range",
                self.drawing.freehand_threshold
            );
            self.drawing.freehand_threshold =
                clamp_or(self.drawing.freehand_threshold, 0.0, 200.0, 20.0);
        }

        for (name, alpha, fallback) in [
            ("line_alpha", &mut self.drawing.line_alpha, 0.8),
            ("fill_alpha", &mut self.drawing.fill_alpha, 0.5),
        ] {
            if !(0.0..=1.0).contains(&*alpha) {
                log::warn!("Invalid {name} {:.3}, clamping to 0.0-1.0", *alpha);
                *alpha = clamp_or(*alpha, 0.0, 1.0, fallback);
            }
        }

        for (name, extent, fallback) in [
            ("canvas width", &mut self.canvas.width, 800.0),
            ("canvas height", &mut self.canvas.height, 600.0),
        ] {
            if !(*extent >= 1.0 && extent.is_finite()) {
                log::warn!("Invalid {name} {:.1}, using at least 1.0", *extent);
                *extent = if extent.is_finite() {
                    extent.max(1.0)
                } else {
                    fallback
                };
            }
        }

        if let ColorSpec::Name(name) = &self.drawing.color {
            if !self.drawing.color.is_random()
                && crate::draw::color::name_to_color(name).is_none()
            {
                log::warn!("Unknown color '{}', falling back to 'random'", name);
                self.drawing.color = ColorSpec::Name("random".to_string());
            }
        }
    }

    /// Settings snapshot for a [`GestureSession`](crate::session::GestureSession).
    pub fn to_settings(&self) -> DrawingSettings {
        let drawing = &self.drawing;
        let color_policy = if drawing.color.is_random() {
            ColorPolicy::Random {
                line_alpha: drawing.line_alpha,
                fill_alpha: drawing.fill_alpha,
            }
        } else {
            let base = drawing.color.to_color();
            ColorPolicy::Fixed {
                line: base.with_alpha(drawing.line_alpha),
                fill: base.with_alpha(drawing.fill_alpha),
            }
        };
        DrawingSettings {
            stroke_width: drawing.stroke_width,
            freehand_threshold: drawing.freehand_threshold,
            color_policy,
            polyline_repeat: self.polyline.repeat,
        }
    }

    /// JSON schema of the configuration file, for editors and tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/strokepad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("strokepad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a documented default configuration file in the user's config directory.
    ///
    /// Returns the path that was written.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or for any
    /// reason listed on [`create_default_file_at`](Self::create_default_file_at).
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;
        Self::create_default_file_at(&config_path)?;
        Ok(config_path)
    }

    /// Writes the example config from `config.example.toml` to `config_path`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The parent directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file_at(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        // Create directory
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }
}

/// Commented example configuration matching [`Config::default`].
const DEFAULT_CONFIG: &str = include_str!("../../config.example.toml");

/// Clamps `value` into `min..=max`, substituting `fallback` for NaN.
fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, Color};
    use tempfile::TempDir;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.to_settings(), DrawingSettings::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [drawing]
            stroke_width = 50.0
            freehand_threshold = -4.0
            line_alpha = 1.5

            [canvas]
            width = 0.0
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.drawing.stroke_width, 20.0);
        assert_eq!(config.drawing.freehand_threshold, 0.0);
        assert_eq!(config.drawing.line_alpha, 1.0);
        assert_eq!(config.canvas.width, 1.0);
        assert_eq!(config.canvas.height, 600.0);
    }

    #[test]
    fn unknown_color_name_falls_back_to_random() {
        let mut config: Config = toml::from_str("[drawing]\ncolor = \"mauve\"").unwrap();
        config.validate_and_clamp();
        assert!(config.drawing.color.is_random());
    }

    #[test]
    fn fixed_color_applies_configured_alphas() {
        let config: Config = toml::from_str(
            r#"
            [drawing]
            color = "blue"
            line_alpha = 0.6
            fill_alpha = 0.3

            [polyline]
            repeat = true
            "#,
        )
        .unwrap();
        let settings = config.to_settings();

        assert_eq!(
            settings.color_policy,
            ColorPolicy::Fixed {
                line: BLUE.with_alpha(0.6),
                fill: BLUE.with_alpha(0.3),
            }
        );
        assert!(settings.polyline_repeat);
    }

    #[test]
    fn rgb_color_parses_from_array() {
        let config: Config = toml::from_str("[drawing]\ncolor = [0, 255, 0]").unwrap();
        assert_eq!(config.drawing.color.to_color(), Color::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn load_from_reads_and_validates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[drawing]\nstroke_width = 0.5\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.stroke_width, 1.0);
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[drawing\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn example_config_parses_to_defaults() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn create_default_file_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("strokepad").join("config.toml");

        Config::create_default_file_at(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        let err = Config::create_default_file_at(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn schema_mentions_every_section() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        for section in ["drawing", "polyline", "canvas", "freehand_threshold"] {
            assert!(schema.contains(section), "schema lacks {section}");
        }
    }
}
