use crate::draw::Drawable;
use crate::input::{events::MouseButton, tool::Tool};

use super::{Change, DrawingState, SketchState};

impl SketchState {
    /// Processes a pointer-down event.
    ///
    /// # Behavior
    /// - Left press with a sticker selected: places the sticker and reverts to the pen
    /// - Left press otherwise: starts a new stroke
    /// - Presses while already drawing and non-primary buttons are ignored
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left || self.is_drawing() {
            return;
        }

        self.cursor = Some((x, y));
        self.pointer_down = true;
        if matches!(self.tool, Tool::Sticker { .. }) {
            self.begin_sticker(x, y);
        } else {
            self.begin_stroke(x, y);
        }
    }

    /// Processes pointer motion.
    ///
    /// While drawing the point extends the stroke. With the pointer up the tool
    /// preview follows the cursor; a held button after a sticker press shows none.
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        self.cursor = Some((x, y));
        if self.is_drawing() {
            self.extend_stroke(x, y);
        } else if !self.pointer_down {
            self.state = DrawingState::PreviewingTool;
            self.notify(Change::ToolMoved);
        }
    }

    /// Processes a pointer-up event, finishing any stroke in progress.
    pub fn on_mouse_release(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left {
            return;
        }
        self.cursor = Some((x, y));
        self.pointer_down = false;
        self.end_stroke();
    }

    /// Processes the pointer leaving the surface.
    ///
    /// Finishes any stroke in progress and hides the tool preview.
    pub fn on_pointer_leave(&mut self) {
        self.end_stroke();
        self.cursor = None;
        self.pointer_down = false;
        if self.state == DrawingState::PreviewingTool {
            self.state = DrawingState::Idle;
            self.notify(Change::ToolMoved);
        }
    }

    /// Starts a stroke with a single point and commits it immediately.
    ///
    /// Committing truncates the redo sequence. Later motion extends the stroke
    /// in place until [`SketchState::end_stroke`].
    pub fn begin_stroke(&mut self, x: i32, y: i32) {
        self.end_stroke();
        self.history.push(Drawable::stroke_at(
            x,
            y,
            self.current_color,
            self.current_thickness,
        ));
        self.state = DrawingState::Drawing;
        log::debug!(
            "Stroke started at ({x}, {y}) with thickness {:.1}",
            self.current_thickness
        );
        self.notify(Change::Content);
    }

    /// Places the selected sticker at `(x, y)`, reverts to the pen tool and
    /// returns to `Idle`.
    ///
    /// Returns `false` without changes when no sticker is selected.
    pub fn begin_sticker(&mut self, x: i32, y: i32) -> bool {
        let glyph = match &self.tool {
            Tool::Sticker { glyph } => glyph.clone(),
            Tool::Pen => return false,
        };

        self.history.push(Drawable::Sticker { x, y, glyph });
        self.tool = Tool::Pen;
        self.state = DrawingState::Idle;
        log::debug!("Sticker placed at ({x}, {y})");
        self.notify(Change::Content);
        true
    }

    /// Appends a point to the stroke in progress.
    ///
    /// Returns `false` when no stroke is being drawn.
    pub fn extend_stroke(&mut self, x: i32, y: i32) -> bool {
        if !self.is_drawing() {
            return false;
        }

        let extended = self
            .history
            .last_mut()
            .is_some_and(|drawable| drawable.push_point(x, y));
        if extended {
            self.notify(Change::Content);
        } else {
            // The in-progress stroke is gone; nothing left to extend.
            self.state = DrawingState::Idle;
        }
        extended
    }

    /// Finishes the stroke in progress. The stroke stays committed unchanged.
    ///
    /// Returns `false` when no stroke was being drawn.
    pub fn end_stroke(&mut self) -> bool {
        if !self.is_drawing() {
            return false;
        }
        self.state = DrawingState::Idle;
        log::debug!("Stroke finished ({} drawables)", self.drawables().len());
        true
    }
}
