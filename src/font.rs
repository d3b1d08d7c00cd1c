use std::fs;

use ab_glyph::FontVec;
use log::warn;

/// Preferred rendering font; a TrueType collection, face 0 is the regular cut.
pub const PREFERRED_FONT_PATH: &str = "/System/Library/Fonts/Helvetica.ttc";

/// Outcome of loading the rendering font. Falling back is not an error, the
/// icons just get the blockier builtin glyphs.
pub enum FontLoad {
    Loaded(FontVec),
    FellBackToDefault,
}

pub fn load_preferred_font() -> FontLoad {
    load_font_file(PREFERRED_FONT_PATH)
}

fn load_font_file(path: &str) -> FontLoad {
    match fs::read(path) {
        Ok(data) => match FontVec::try_from_vec_and_index(data, 0) {
            Ok(font) => FontLoad::Loaded(font),
            Err(_) => {
                warn!("{} is not a usable font, using builtin glyphs", path);
                FontLoad::FellBackToDefault
            }
        },
        Err(err) => {
            warn!("cannot read {} ({}), using builtin glyphs", path, err);
            FontLoad::FellBackToDefault
        }
    }
}

pub(crate) const GLYPH_COLS: usize = 5;
pub(crate) const GLYPH_ROWS: usize = 7;

/// 5x7 bitmap glyphs for the letters the icon caption uses. Rows are top to
/// bottom, the low 5 bits of each row map left to right from the high bit.
pub(crate) fn builtin_glyph(c: char) -> Option<[u8; GLYPH_ROWS]> {
    let rows = match c {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        _ => return None,
    };
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_file_falls_back() {
        let loaded = load_font_file("/nonexistent/path/to/font.ttc");
        assert!(matches!(loaded, FontLoad::FellBackToDefault));
    }

    #[test]
    fn builtin_glyphs_cover_the_caption() {
        for c in "AIPM".chars() {
            assert!(builtin_glyph(c).is_some(), "missing glyph for {:?}", c);
        }
        assert!(builtin_glyph('z').is_none());
    }
}
