// src/color.rs

//! Packed 32-bit colors.
//!
//! A color is a plain `u32` laid out as `0xAARRGGBB`: alpha in the most
//! significant byte, then red, green and blue. Alpha 0 makes a draw a no-op,
//! alpha 255 overwrites the destination, anything in between blends.

/// A packed `0xAARRGGBB` color.
pub type Color = u32;

pub const TRANSPARENT: Color = 0x0000_0000;
pub const BLACK: Color = 0xFF00_0000;
pub const WHITE: Color = 0xFFFF_FFFF;
pub const RED: Color = 0xFFFF_0000;
pub const GREEN: Color = 0xFF00_FF00;
pub const BLUE: Color = 0xFF00_00FF;

/// Packs four channels into a color.
#[inline]
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Color {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

#[inline]
pub const fn alpha(c: Color) -> u8 {
    (c >> 24) as u8
}

#[inline]
pub const fn red(c: Color) -> u8 {
    (c >> 16) as u8
}

#[inline]
pub const fn green(c: Color) -> u8 {
    (c >> 8) as u8
}

#[inline]
pub const fn blue(c: Color) -> u8 {
    c as u8
}

/// Returns the color's bytes in `[R, G, B, A]` memory order, the layout
/// image encoders expect for 8-bit RGBA.
#[inline]
pub const fn to_rgba_bytes(c: Color) -> [u8; 4] {
    [red(c), green(c), blue(c), alpha(c)]
}
