//! Toolbar actions that carry no parameters.

use serde::{Deserialize, Serialize};

/// Buttons a host can expose next to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Clear,
    Undo,
    Redo,

    // Thickness presets
    Thin,
    Thick,

    /// Leave sticker mode without placing anything
    Deselect,
}

impl Action {
    /// Looks up an action by its lowercase name (`"undo"`, `"thin"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "clear" => Some(Action::Clear),
            "undo" => Some(Action::Undo),
            "redo" => Some(Action::Redo),
            "thin" => Some(Action::Thin),
            "thick" => Some(Action::Thick),
            "deselect" => Some(Action::Deselect),
            _ => None,
        }
    }
}
