//! Sketch surface state machine and controller state.

use crate::config::Config;
use crate::draw::{Color, Drawable, History, StickerStyle};
use crate::input::tool::Tool;
use crate::util;

/// Thickness range accepted by [`SketchState::set_thickness`].
pub const MIN_THICKNESS: f64 = 1.0;
pub const MAX_THICKNESS: f64 = 20.0;

/// Pointer state machine for one surface.
///
/// `PreviewingTool` is the hovering flavour of idle: the pointer is up and
/// inside the surface, so the active tool's preview follows the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// Pointer up and not over the surface (or not moved since the last release)
    Idle,
    /// Primary button held; the newest committed drawable is the stroke being drawn
    Drawing,
    /// Pointer up and hovering; the tool preview is drawn at the cursor
    PreviewingTool,
}

/// Kind of change reported to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Committed drawables or the redo sequence changed
    Content,
    /// Cursor, tool, or tool settings changed (only the preview is affected)
    ToolMoved,
}

type Listener = Box<dyn FnMut(Change)>;

/// Controller for one sketch surface.
///
/// Holds the drawing history, the current tool settings, and the pointer
/// state machine. Every mutation sets [`SketchState::needs_redraw`] and calls
/// the registered listeners synchronously before returning.
pub struct SketchState {
    /// Current stroke color for new strokes
    pub current_color: Color,
    /// Current stroke thickness for new strokes
    pub current_thickness: f64,
    /// Thickness applied by the "thin" preset
    pub thin_thickness: f64,
    /// Thickness applied by the "thick" preset
    pub thick_thickness: f64,
    /// Font and size for stickers and the sticker preview
    pub sticker_style: StickerStyle,
    /// Background painted before every frame
    pub background: Color,
    /// Whether the surface needs to be redrawn (reset by the host after rendering)
    pub needs_redraw: bool,
    pub(super) history: History,
    pub(super) tool: Tool,
    pub(super) state: DrawingState,
    pub(super) cursor: Option<(i32, i32)>,
    /// Primary button held (set even when the press placed a sticker)
    pub(super) pointer_down: bool,
    pub(super) stickers: Vec<String>,
    canvas_width: u32,
    canvas_height: u32,
    listeners: Vec<Listener>,
}

impl SketchState {
    /// Creates a new controller with the given defaults.
    ///
    /// # Arguments
    /// * `color` - Initial stroke color
    /// * `thin_thickness` - Thin preset, also the initial thickness
    /// * `thick_thickness` - Thick preset
    /// * `stickers` - Initial sticker palette
    /// * `sticker_style` - Font used for sticker glyphs
    /// * `background` - Canvas background color
    /// * `canvas_width` / `canvas_height` - Logical surface size
    #[allow(clippy::too_many_arguments)]
    pub fn with_defaults(
        color: Color,
        thin_thickness: f64,
        thick_thickness: f64,
        stickers: Vec<String>,
        sticker_style: StickerStyle,
        background: Color,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Self {
        Self {
            current_color: color,
            current_thickness: thin_thickness.clamp(MIN_THICKNESS, MAX_THICKNESS),
            thin_thickness,
            thick_thickness,
            sticker_style,
            background,
            needs_redraw: true,
            history: History::new(),
            tool: Tool::Pen,
            state: DrawingState::Idle,
            cursor: None,
            pointer_down: false,
            stickers,
            canvas_width,
            canvas_height,
            listeners: Vec::new(),
        }
    }

    /// Creates a controller from validated configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            config.drawing.default_color.to_color(),
            config.drawing.thin_thickness,
            config.drawing.thick_thickness,
            config.stickers.palette.clone(),
            config.stickers.sticker_style(),
            config.canvas.background.to_color(),
            config.canvas.width,
            config.canvas.height,
        )
    }

    /// Registers a listener called synchronously after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(Change) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Marks the surface dirty and notifies listeners.
    pub(super) fn notify(&mut self, change: Change) {
        self.needs_redraw = true;
        for listener in &mut self.listeners {
            listener(change);
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Committed drawables in draw order.
    pub fn drawables(&self) -> &[Drawable] {
        self.history.committed()
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn drawing_state(&self) -> DrawingState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state == DrawingState::Drawing
    }

    /// Whether the primary button is currently held over the surface.
    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    /// Last known cursor position over the surface, if any.
    pub fn cursor(&self) -> Option<(i32, i32)> {
        self.cursor
    }

    /// Sticker palette (built-in and custom glyphs) in creation order.
    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    pub fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    /// Sets the thickness for subsequently created strokes.
    ///
    /// Values are clamped to 1.0-20.0 and non-finite values are ignored.
    /// Committed strokes keep their own thickness.
    pub fn set_thickness(&mut self, thickness: f64) {
        if !thickness.is_finite() {
            log::warn!("Ignoring non-finite thickness {thickness}");
            return;
        }
        let clamped = thickness.clamp(MIN_THICKNESS, MAX_THICKNESS);
        if clamped != thickness {
            log::debug!("Thickness {thickness:.1} clamped to {clamped:.1}");
        }
        self.current_thickness = clamped;
        self.notify(Change::ToolMoved);
    }

    /// Applies the thin preset and returns to the pen tool.
    pub fn thin(&mut self) {
        self.deselect_sticker();
        self.set_thickness(self.thin_thickness);
    }

    /// Applies the thick preset and returns to the pen tool.
    pub fn thick(&mut self) {
        self.deselect_sticker();
        self.set_thickness(self.thick_thickness);
    }

    /// Sets the color for subsequently created strokes.
    pub fn set_color(&mut self, color: Color) {
        self.current_color = color;
        log::debug!("Color set to {}", util::color_to_name(&color));
        self.notify(Change::ToolMoved);
    }

    /// Activates sticker placement mode with `glyph`.
    ///
    /// An empty glyph is ignored.
    pub fn select_sticker(&mut self, glyph: &str) {
        if glyph.is_empty() {
            log::debug!("Ignoring empty sticker selection");
            return;
        }
        self.tool = Tool::Sticker {
            glyph: glyph.to_string(),
        };
        self.notify(Change::ToolMoved);
    }

    /// Returns to the pen tool. No-op when sticker mode is not active.
    pub fn deselect_sticker(&mut self) {
        if self.tool != Tool::Pen {
            self.tool = Tool::Pen;
            self.notify(Change::ToolMoved);
        }
    }

    /// Adds a custom sticker to the palette.
    ///
    /// Blank input is treated as a cancelled prompt and returns `None`.
    /// Otherwise returns the palette index of the glyph; a glyph already in the
    /// palette is not added twice.
    pub fn add_custom_sticker(&mut self, text: &str) -> Option<usize> {
        let glyph = text.trim();
        if glyph.is_empty() {
            log::debug!("Custom sticker prompt cancelled");
            return None;
        }

        if let Some(index) = self.stickers.iter().position(|existing| existing == glyph) {
            return Some(index);
        }

        self.stickers.push(glyph.to_string());
        log::info!("Added custom sticker '{glyph}'");
        self.notify(Change::ToolMoved);
        Some(self.stickers.len() - 1)
    }
}
