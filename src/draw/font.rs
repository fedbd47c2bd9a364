//! Font descriptor for sticker glyph rendering.

/// Font configuration for sticker glyphs.
///
/// Describes which font family, weight, and style Pango should use when laying
/// out a sticker, so placed stickers and the cursor preview look identical.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Noto Color Emoji")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
        }
    }
}

impl FontDescriptor {
    pub fn new(family: String, weight: String, style: String) -> Self {
        Self {
            family,
            weight,
            style,
        }
    }

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family Style Weight Size", e.g. "Sans 24" or "Sans Bold 32".
    pub fn to_pango_string(&self, size: f64) -> String {
        let mut parts = vec![self.family.clone()];

        if self.style.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.style));
        }

        if self.weight.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.weight));
        }

        parts.push(format!("{}", size.round() as i32));

        parts.join(" ")
    }
}

/// Font and size used for every sticker on a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerStyle {
    pub font: FontDescriptor,
    /// Font size in points
    pub size: f64,
}

impl Default for StickerStyle {
    fn default() -> Self {
        Self {
            font: FontDescriptor::default(),
            size: 24.0,
        }
    }
}

impl StickerStyle {
    pub fn pango_description(&self) -> pango::FontDescription {
        pango::FontDescription::from_string(&self.font.to_pango_string(self.size))
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
