//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{FontDescriptor, StickerStyle};
use serde::{Deserialize, Serialize};

/// Drawing surface settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Surface width in logical units (valid range: 16 - 4096)
    #[serde(default = "default_canvas_size")]
    pub width: u32,

    /// Surface height in logical units (valid range: 16 - 4096)
    #[serde(default = "default_canvas_size")]
    pub height: u32,

    /// Background painted under every frame
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
            background: default_background(),
        }
    }
}

/// Stroke defaults.
///
/// The thin preset is also the thickness a fresh surface starts with.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default stroke color - a named color or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Thickness of the "thin" preset (valid range: 1.0 - 20.0)
    #[serde(default = "default_thin_thickness")]
    pub thin_thickness: f64,

    /// Thickness of the "thick" preset (valid range: 1.0 - 20.0, at least `thin_thickness`)
    #[serde(default = "default_thick_thickness")]
    pub thick_thickness: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            thin_thickness: default_thin_thickness(),
            thick_thickness: default_thick_thickness(),
        }
    }
}

/// Sticker palette and glyph font.
#[derive(Debug, Serialize, Deserialize)]
pub struct StickerConfig {
    /// Built-in stickers offered before any custom ones
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Font family used to lay out glyphs
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", or numeric 100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Glyph size in points (valid range: 8.0 - 128.0)
    #[serde(default = "default_sticker_size")]
    pub size: f64,
}

impl Default for StickerConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            size: default_sticker_size(),
        }
    }
}

impl StickerConfig {
    /// Builds the render style for sticker glyphs.
    pub fn sticker_style(&self) -> StickerStyle {
        StickerStyle {
            font: FontDescriptor::new(
                self.font_family.clone(),
                self.font_weight.clone(),
                self.font_style.clone(),
            ),
            size: self.size,
        }
    }
}

/// PNG output settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Integer upscale factor for exported images (valid range: 1 - 8)
    #[serde(default = "default_export_scale")]
    pub scale: u32,

    /// Directory for exports when no explicit output path is given (`~` is expanded)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// Filename template (chrono format specifiers, no extension)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: default_export_scale(),
            directory: default_export_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_size() -> u32 {
    256
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_thin_thickness() -> f64 {
    2.0
}

fn default_thick_thickness() -> f64 {
    5.0
}

fn default_palette() -> Vec<String> {
    vec!["🐱".to_string(), "🌮".to_string(), "⭐".to_string()]
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_sticker_size() -> f64 {
    24.0
}

fn default_export_scale() -> u32 {
    1
}

fn default_export_directory() -> String {
    "~/Pictures/Sketchpad".to_string()
}

fn default_filename_template() -> String {
    "sketch_%Y-%m-%d_%H%M%S".to_string()
}
