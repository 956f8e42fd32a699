// src/glyph.rs

//! Fixed-size bitmap text.
//!
//! Text is rendered byte by byte from an 8x8 [`GlyphTable`], left to right,
//! with a fixed advance of [`GLYPH_SIZE`] pixels. There is no wrapping and
//! no kerning.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::compositor::blend;
use crate::font8x8::{GlyphRows, GlyphTable, FONT8X8_BASIC, GLYPH_SIZE};

/// A glyph whose first row equals this byte stops rendering of the rest of
/// the string.
pub const NEWLINE_ROW: u8 = b'\n';

const BLANK: GlyphRows = [0; GLYPH_SIZE];

/// Draws `text` with its top-left corner at `(x, y)` using the built-in font.
///
/// Returns the horizontal distance the cursor advanced, in pixels.
pub fn draw_text(canvas: &mut Canvas, text: &str, x: i64, y: i64, color: Color) -> i64 {
    draw_text_with(canvas, &FONT8X8_BASIC, text, x, y, color)
}

/// Draws `text` using `font`.
///
/// Rendering stops entirely at the first glyph whose top row is
/// [`NEWLINE_ROW`]; that glyph and everything after it are not drawn and do
/// not advance the cursor. Bytes outside the table render as blanks.
pub fn draw_text_with(
    canvas: &mut Canvas,
    font: &GlyphTable,
    text: &str,
    x: i64,
    y: i64,
    color: Color,
) -> i64 {
    let mut cursor = 0;
    for byte in text.bytes() {
        let glyph = font.get(usize::from(byte)).unwrap_or(&BLANK);
        if glyph[0] == NEWLINE_ROW {
            break;
        }
        blit(canvas, glyph, x + cursor, y, color);
        cursor += GLYPH_SIZE as i64;
    }
    cursor
}

fn blit(canvas: &mut Canvas, glyph: &GlyphRows, x: i64, y: i64, color: Color) {
    for (j, &row) in glyph.iter().enumerate() {
        for i in 0..GLYPH_SIZE {
            if (row >> i) & 1 != 0 {
                blend(canvas, x + i as i64, y + j as i64, color);
            }
        }
    }
}
