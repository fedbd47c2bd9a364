use crate::input::action::Action;

use super::{Change, SketchState};

impl SketchState {
    /// Handles a toolbar button press.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Clear => self.clear(),
            Action::Undo => {
                self.undo();
            }
            Action::Redo => {
                self.redo();
            }
            Action::Thin => self.thin(),
            Action::Thick => self.thick(),
            Action::Deselect => self.deselect_sticker(),
        }
    }

    /// Moves the newest committed drawable to the redo sequence.
    ///
    /// Finishes any stroke in progress first. Returns `false` when there was
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.end_stroke();
        if self.history.undo() {
            log::debug!("Undo ({} drawables left)", self.drawables().len());
            self.notify(Change::Content);
            true
        } else {
            false
        }
    }

    /// Restores the newest redo entry as the newest committed drawable.
    ///
    /// Returns `false` when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.end_stroke();
        if self.history.redo() {
            log::debug!("Redo ({} drawables)", self.drawables().len());
            self.notify(Change::Content);
            true
        } else {
            false
        }
    }

    /// Empties both the committed and redo sequences.
    pub fn clear(&mut self) {
        self.end_stroke();
        self.history.clear();
        log::debug!("Canvas cleared");
        self.notify(Change::Content);
    }
}
