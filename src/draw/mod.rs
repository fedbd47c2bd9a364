//! Rendering primitives and drawable definitions (Cairo-based).
//!
//! This module defines the core drawing types of the sketchpad:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Drawable`]: strokes and stickers placed on the canvas
//! - [`History`]: committed drawables plus the redo sequence
//! - [`Canvas`]: the raster surface a [`crate::input::SketchState`] renders into
//! - Rendering functions for Cairo-based output

pub mod canvas;
pub mod color;
pub mod drawable;
pub mod font;
pub mod history;
pub mod render;

pub use canvas::{Canvas, MAX_EXPORT_SCALE, pixel_at};
pub use color::Color;
pub use drawable::Drawable;
pub use font::{FontDescriptor, StickerStyle};
pub use history::History;
pub use render::{
    render_background, render_drawable, render_drawables, render_glyph, render_pen_preview,
    render_stroke,
};
