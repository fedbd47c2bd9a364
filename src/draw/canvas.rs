//! Raster surface owned by the host.

use crate::input::SketchState;

/// Largest export scale factor accepted by [`Canvas::export`].
pub const MAX_EXPORT_SCALE: u32 = 8;

/// Fixed-size ARGB image surface that a [`SketchState`] is rendered into.
///
/// The host calls [`Canvas::redraw`] whenever the state reports a change; the
/// surface always holds a complete frame (no incremental damage).
pub struct Canvas {
    surface: cairo::ImageSurface,
}

impl Canvas {
    /// Creates a blank (fully transparent) surface of the given size.
    pub fn new(width: i32, height: i32) -> Result<Self, cairo::Error> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self { surface })
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Clears the surface and renders the full state, including the tool preview.
    pub fn redraw(&mut self, state: &SketchState) -> Result<(), cairo::Error> {
        {
            let ctx = cairo::Context::new(&self.surface)?;
            state.render(&ctx);
        }
        self.surface.flush();
        Ok(())
    }

    /// Renders committed content (no tool preview) onto a new surface scaled by `scale`.
    ///
    /// `scale` is clamped to 1-8; a scaled size that does not fit an `i32`
    /// is reported as [`cairo::Error::InvalidSize`].
    pub fn export(state: &SketchState, scale: u32) -> Result<cairo::ImageSurface, cairo::Error> {
        let scale = scale.clamp(1, MAX_EXPORT_SCALE);
        let scaled = |size: u32| {
            size.checked_mul(scale)
                .and_then(|size| i32::try_from(size).ok())
                .ok_or(cairo::Error::InvalidSize)
        };
        let width = scaled(state.canvas_width())?;
        let height = scaled(state.canvas_height())?;
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        {
            let ctx = cairo::Context::new(&surface)?;
            ctx.scale(scale as f64, scale as f64);
            state.render_content(&ctx);
        }
        surface.flush();
        Ok(surface)
    }

    /// Reads one pixel as premultiplied `[r, g, b, a]` bytes.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<[u8; 4]> {
        pixel_at(&mut self.surface, x, y)
    }
}

/// Reads one pixel of an ARGB32 surface as `[r, g, b, a]`.
///
/// Returns `None` for out-of-bounds coordinates or while the surface data is
/// borrowed by a live context.
pub fn pixel_at(surface: &mut cairo::ImageSurface, x: i32, y: i32) -> Option<[u8; 4]> {
    if x < 0 || y < 0 || x >= surface.width() || y >= surface.height() {
        return None;
    }
    let stride = surface.stride() as usize;
    let data = surface.data().ok()?;
    let offset = y as usize * stride + x as usize * 4;
    let bytes: [u8; 4] = data.get(offset..offset + 4)?.try_into().ok()?;
    let argb = u32::from_ne_bytes(bytes);
    Some([
        (argb >> 16) as u8,
        (argb >> 8) as u8,
        argb as u8,
        (argb >> 24) as u8,
    ])
}
