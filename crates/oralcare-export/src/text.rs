//! Bitmap text for the report canvas, drawn from the 8x8 `font8x8` glyphs.
//!
//! Characters outside the basic and Latin-1 tables are drawn as `?`.

use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};
use image::RgbaImage;

use crate::raster::blend;
use crate::styles::Color;

/// Side of one unscaled glyph cell, in pixels.
pub const GLYPH_SIZE: u32 = 8;

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or_default()
}

/// Width of `text` drawn at `scale`.
pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_SIZE * scale.max(1)
}

/// Draws one line of text with its top-left corner at `(x, y)`. Pixels
/// falling off the canvas are dropped.
pub fn draw_text(canvas: &mut RgbaImage, x: i64, y: i64, text: &str, color: Color, scale: u32) {
    let scale = i64::from(scale.max(1));
    let advance = i64::from(GLYPH_SIZE) * scale;
    let rgb = [color.r, color.g, color.b];
    let alpha = f64::from(color.alpha);

    for (i, c) in text.chars().enumerate() {
        let left = x + i as i64 * advance;
        for (row, bits) in glyph(c).into_iter().enumerate() {
            let top = y + row as i64 * scale;
            // Bit 0 is the leftmost column.
            for col in 0..8i64 {
                if bits & (1 << col) == 0 {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        blend(canvas, left + col * scale + dx, top + dy, rgb, alpha);
                    }
                }
            }
        }
    }
}
