//! Cairo-based rendering functions for drawables and tool previews.

use super::color::Color;
use super::drawable::Drawable;
use super::font::StickerStyle;

/// Fills the whole surface with the background color.
///
/// Uses the `Source` operator so any previous content (including alpha) is
/// replaced rather than blended.
pub fn render_background(ctx: &cairo::Context, background: Color) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Source);
    background.apply(ctx);
    let _ = ctx.paint(); // Ignore errors - a failed paint leaves the previous frame
    let _ = ctx.restore();
}

/// Renders all drawables in order (first drawable = bottom layer).
pub fn render_drawables(ctx: &cairo::Context, drawables: &[Drawable], style: &StickerStyle) {
    for drawable in drawables {
        render_drawable(ctx, drawable, style);
    }
}

/// Renders a single drawable, dispatching on its variant.
pub fn render_drawable(ctx: &cairo::Context, drawable: &Drawable, style: &StickerStyle) {
    match drawable {
        Drawable::Stroke {
            points,
            color,
            thick,
        } => render_stroke(ctx, points, *color, *thick),
        Drawable::Sticker { x, y, glyph } => {
            render_glyph(ctx, *x as f64, *y as f64, glyph, style);
        }
    }
}

/// Render a freehand stroke as a polyline through its points.
///
/// Fewer than two points form no segment and draw nothing.
pub fn render_stroke(ctx: &cairo::Context, points: &[(i32, i32)], color: Color, thick: f64) {
    if points.len() < 2 {
        return;
    }

    color.apply(ctx);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    let (x0, y0) = points[0];
    ctx.move_to(x0 as f64, y0 as f64);
    for &(x, y) in &points[1..] {
        ctx.line_to(x as f64, y as f64);
    }

    let _ = ctx.stroke();
}

/// Renders a glyph centered on `(x, y)` using Pango.
///
/// Emoji are drawn with their own colors when the font provides them; plain
/// text glyphs fall back to black.
pub fn render_glyph(ctx: &cairo::Context, x: f64, y: f64, glyph: &str, style: &StickerStyle) {
    if glyph.is_empty() {
        return;
    }

    let _ = ctx.save();
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    layout.set_font_description(Some(&style.pango_description()));
    layout.set_text(glyph);

    let (width, height) = layout.pixel_size();
    ctx.move_to(x - width as f64 / 2.0, y - height as f64 / 2.0);
    ctx.set_source_rgba(0.0, 0.0, 0.0, 1.0);
    pangocairo::functions::show_layout(ctx, &layout);

    let _ = ctx.restore();
}

/// Renders the pen preview: a circle outline whose diameter matches the stroke width.
pub fn render_pen_preview(ctx: &cairo::Context, x: f64, y: f64, thick: f64, color: Color) {
    let radius = (thick / 2.0).max(0.5);

    let _ = ctx.save();
    color.apply(ctx);
    ctx.set_line_width(1.0);
    ctx.new_sub_path();
    ctx.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
    let _ = ctx.stroke();
    let _ = ctx.restore();
}
