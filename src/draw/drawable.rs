//! Drawable items placed on the sketch surface.

use super::color::Color;
use serde::{Deserialize, Serialize};

/// Something committed to the canvas.
///
/// Every variant carries the parameters it needs to render independently of
/// the tool settings that were active when it was created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Drawable {
    /// Freehand polyline traced while the pointer was held down
    Stroke {
        /// Points in drawing order
        points: Vec<(i32, i32)>,
        /// Stroke color
        color: Color,
        /// Line thickness in logical units
        thick: f64,
    },
    /// Glyph placed by a single click while sticker mode was active
    Sticker {
        /// Center X coordinate
        x: i32,
        /// Center Y coordinate
        y: i32,
        /// Emoji or text label
        glyph: String,
    },
}

impl Drawable {
    /// Starts a stroke at a single point.
    pub fn stroke_at(x: i32, y: i32, color: Color, thick: f64) -> Self {
        Drawable::Stroke {
            points: vec![(x, y)],
            color,
            thick,
        }
    }

    /// Returns `true` when rendering this drawable produces no mark.
    ///
    /// A stroke needs at least two points to form a segment; a sticker with an
    /// empty glyph has nothing to lay out.
    pub fn is_degenerate(&self) -> bool {
        match self {
            Drawable::Stroke { points, .. } => points.len() < 2,
            Drawable::Sticker { glyph, .. } => glyph.is_empty(),
        }
    }

    /// Appends a point when this drawable is a stroke. Returns `false` for stickers.
    pub(crate) fn push_point(&mut self, x: i32, y: i32) -> bool {
        match self {
            Drawable::Stroke { points, .. } => {
                points.push((x, y));
                true
            }
            Drawable::Sticker { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;

    #[test]
    fn single_point_stroke_is_degenerate() {
        let mut stroke = Drawable::stroke_at(10, 10, BLACK, 2.0);
        assert!(stroke.is_degenerate());

        assert!(stroke.push_point(20, 20));
        assert!(!stroke.is_degenerate());
    }

    #[test]
    fn stickers_do_not_accept_points() {
        let mut sticker = Drawable::Sticker {
            x: 5,
            y: 5,
            glyph: "⭐".to_string(),
        };
        assert!(!sticker.push_point(6, 6));
        assert_eq!(
            sticker,
            Drawable::Sticker {
                x: 5,
                y: 5,
                glyph: "⭐".to_string(),
            }
        );
    }

    #[test]
    fn serializes_as_tagged_variant() {
        let stroke = Drawable::Stroke {
            points: vec![(1, 2), (3, 4)],
            color: BLACK,
            thick: 2.0,
        };
        let json = serde_json::to_string(&stroke).expect("serialize stroke");
        assert!(json.starts_with("{\"Stroke\""));

        let back: Drawable = serde_json::from_str(&json).expect("deserialize stroke");
        assert_eq!(back, stroke);
    }
}
