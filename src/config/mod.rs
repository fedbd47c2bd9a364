//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include the canvas size and
//! background, stroke presets, the sticker palette, and export options.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, ExportConfig, StickerConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 256
/// height = 256
/// background = "white"
///
/// [drawing]
/// default_color = "black"
/// thin_thickness = 2.0
/// thick_thickness = 5.0
///
/// [stickers]
/// palette = ["🐱", "🌮", "⭐"]
/// size = 24.0
///
/// [export]
/// scale = 4
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Surface size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Stroke color and thickness presets
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Sticker palette and glyph font
    #[serde(default)]
    pub stickers: StickerConfig,

    /// PNG export options
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width` / `canvas.height`: 16 - 4096
    /// - `thin_thickness` / `thick_thickness`: 1.0 - 20.0, thick at least thin
    /// - `stickers.size`: 8.0 - 128.0
    /// - `export.scale`: 1 - 8
    pub fn validate_and_clamp(&mut self) {
        for (name, value) in [
            ("canvas width", &mut self.canvas.width),
            ("canvas height", &mut self.canvas.height),
        ] {
            if !(16..=4096).contains(&*value) {
                log::warn!("Invalid {} {}, clamping to 16-4096 range", name, value);
                *value = (*value).clamp(16, 4096);
            }
        }

        for (name, value) in [
            ("thin_thickness", &mut self.drawing.thin_thickness),
            ("thick_thickness", &mut self.drawing.thick_thickness),
        ] {
            if !(1.0..=20.0).contains(&*value) {
                log::warn!("Invalid {} {:.1}, clamping to 1.0-20.0 range", name, value);
                *value = (*value).clamp(1.0, 20.0);
            }
        }

        if self.drawing.thick_thickness < self.drawing.thin_thickness {
            log::warn!(
                "thick_thickness {:.1} is below thin_thickness {:.1}, raising it",
                self.drawing.thick_thickness,
                self.drawing.thin_thickness
            );
            self.drawing.thick_thickness = self.drawing.thin_thickness;
        }

        if !(8.0..=128.0).contains(&self.stickers.size) {
            log::warn!(
                "Invalid sticker size {:.1}, clamping to 8.0-128.0 range",
                self.stickers.size
            );
            self.stickers.size = self.stickers.size.clamp(8.0, 128.0);
        }

        let before = self.stickers.palette.len();
        self.stickers.palette.retain(|glyph| !glyph.trim().is_empty());
        if self.stickers.palette.len() != before {
            log::warn!(
                "Dropped {} empty sticker palette entries",
                before - self.stickers.palette.len()
            );
        }

        let valid_weight = matches!(
            self.stickers.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .stickers
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.stickers.font_weight
            );
            self.stickers.font_weight = "normal".to_string();
        }

        if !matches!(
            self.stickers.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.stickers.font_style
            );
            self.stickers.font_style = "normal".to_string();
        }

        if !(1..=8).contains(&self.export.scale) {
            log::warn!(
                "Invalid export scale {}, clamping to 1-8 range",
                self.export.scale
            );
            self.export.scale = self.export.scale.clamp(1, 8);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
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
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from TOML text without validation.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
