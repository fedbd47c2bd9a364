//! Drawing tool selection.

/// Active tool on a sketch surface.
///
/// The tool decides what a primary-button press creates and which preview is
/// shown under the cursor while hovering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand strokes (default)
    #[default]
    Pen,
    /// Single-click sticker placement; reverts to [`Tool::Pen`] after one placement
    Sticker {
        /// Glyph placed on the next click
        glyph: String,
    },
}

impl Tool {
    /// Returns the selected sticker glyph, if sticker mode is active.
    pub fn sticker_glyph(&self) -> Option<&str> {
        match self {
            Tool::Sticker { glyph } => Some(glyph),
            Tool::Pen => None,
        }
    }
}
