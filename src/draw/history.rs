//! Linear undo/redo history of committed drawables.

use super::drawable::Drawable;
use serde::{Deserialize, Serialize};

/// Container for everything drawn on one surface.
///
/// `committed` is the canvas content in draw order (first = bottom layer,
/// last = top layer). `redo` holds drawables removed by undo, newest last.
/// Pushing a new drawable discards `redo`; divergent branches are not kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    committed: Vec<Drawable>,
    redo: Vec<Drawable>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed drawables in draw order.
    pub fn committed(&self) -> &[Drawable] {
        &self.committed
    }

    /// Drawables available to redo; the last entry is restored first.
    pub fn redo_stack(&self) -> &[Drawable] {
        &self.redo
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Commits a new drawable on top and truncates the redo sequence.
    pub fn push(&mut self, drawable: Drawable) {
        self.committed.push(drawable);
        self.redo.clear();
    }

    /// Mutable access to the newest committed drawable (the in-progress stroke).
    pub(crate) fn last_mut(&mut self) -> Option<&mut Drawable> {
        self.committed.last_mut()
    }

    /// Moves the newest committed drawable onto the redo sequence.
    ///
    /// Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(drawable) => {
                self.redo.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Restores the newest redo entry as the newest committed drawable.
    ///
    /// Returns `false` when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(drawable) => {
                self.committed.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Empties both sequences.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo.clear();
    }
}
