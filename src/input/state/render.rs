use crate::draw::{render_background, render_drawables, render_glyph, render_pen_preview};
use crate::input::tool::Tool;

use super::{DrawingState, SketchState};

impl SketchState {
    /// Renders the full frame: background, committed drawables, then the tool preview.
    ///
    /// The preview is drawn only while hovering with the pointer up.
    pub fn render(&self, ctx: &cairo::Context) {
        self.render_content(ctx);
        self.render_tool_preview(ctx);
    }

    /// Renders background and committed drawables without any preview.
    pub fn render_content(&self, ctx: &cairo::Context) {
        render_background(ctx, self.background);
        render_drawables(ctx, self.drawables(), &self.sticker_style);
    }

    /// Renders the active tool's preview at the cursor.
    ///
    /// # Returns
    /// `true` if a preview was drawn, `false` otherwise
    pub fn render_tool_preview(&self, ctx: &cairo::Context) -> bool {
        if self.state != DrawingState::PreviewingTool || self.pointer_down {
            return false;
        }
        let Some((x, y)) = self.cursor else {
            return false;
        };

        match &self.tool {
            Tool::Pen => {
                render_pen_preview(
                    ctx,
                    x as f64,
                    y as f64,
                    self.current_thickness,
                    self.current_color,
                );
            }
            Tool::Sticker { glyph } => {
                render_glyph(ctx, x as f64, y as f64, glyph, &self.sticker_style);
            }
        }
        true
    }
}
