//! Style engine
//!
//! Character-by-character rendering of text under a named style, plus the
//! alphabet preview used for labels and listings.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use super::catalog::{Style, StyleCatalog, StyleError};

/// Fixed alphabet walked by [`preview`]
pub const PREVIEW_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Render `text` in the named style.
///
/// Fails only when the style does not exist; every character of the input is
/// otherwise processed.
pub fn render(catalog: &StyleCatalog, text: &str, style_name: &str) -> Result<String, StyleError> {
    Ok(catalog.get_style(style_name)?.apply(text))
}

/// Glyphs of the named style over a-z, skipping unmapped letters
pub fn preview(catalog: &StyleCatalog, style_name: &str) -> Result<String, StyleError> {
    Ok(catalog.get_style(style_name)?.preview())
}

impl Style {
    /// Render `text` with this style.
    ///
    /// Letters whose lowercase form has a glyph are substituted; an uppercase
    /// source letter gets the uppercase mapping of the whole glyph (a no-op for
    /// glyphs without case). Everything else is copied through in place.
    pub fn apply(&self, text: &str) -> String {
        let mut styled = String::with_capacity(text.len() * 4);
        for ch in text.chars() {
            match self.styled_glyph(ch) {
                Some(glyph) if ch.is_uppercase() => styled.push_str(&glyph.to_uppercase()),
                Some(glyph) => styled.push_str(glyph),
                None => styled.push(ch),
            }
        }
        styled
    }

    pub fn preview(&self) -> String {
        PREVIEW_ALPHABET
            .chars()
            .filter_map(|letter| self.glyph(letter))
            .collect()
    }

    fn styled_glyph(&self, ch: char) -> Option<&str> {
        if !ch.is_alphabetic() {
            return None;
        }
        single_lowercase(ch).and_then(|lower| self.glyph(lower))
    }
}

/// Lowercase form of `ch` when it is a single character (`İ` lowercases to two)
fn single_lowercase(ch: char) -> Option<char> {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
