//! PNG and scene output.

use crate::config::ExportConfig;
use crate::draw::Drawable;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while writing output files.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Scene serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Ensure the output directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Resolves the default export path from configuration: directory plus a timestamped name.
pub fn default_output_path(config: &ExportConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&expand_tilde(&config.directory))?;
    Ok(directory.join(generate_filename(&config.filename_template, "png")))
}

/// Writes an image surface to `path` as PNG, creating parent directories.
pub fn write_png(surface: &cairo::ImageSurface, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }

    let mut file = fs::File::create(path)?;
    surface.write_to_png(&mut file)?;

    log::info!(
        "Saved {}x{} image to {}",
        surface.width(),
        surface.height(),
        path.display()
    );
    Ok(())
}

/// Writes the committed drawables to `path` as pretty-printed JSON.
pub fn write_scene_json(drawables: &[Drawable], path: &Path) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(drawables)?;
    fs::write(path, json)?;
    log::info!("Saved {} drawables to {}", drawables.len(), path.display());
    Ok(())
}
