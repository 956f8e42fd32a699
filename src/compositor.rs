// src/compositor.rs

//! The single per-pixel write every drawing primitive funnels through.

use crate::canvas::Canvas;
use crate::color::{alpha, blue, green, red, Color};

/// Composites `color` onto the cell at `(x, y)`.
///
/// Transparent colors are skipped before anything else, off-canvas
/// coordinates are clipped silently, opaque colors overwrite, and anything
/// else is blended with [`blend_over`].
#[inline]
pub fn blend(canvas: &mut Canvas, x: i64, y: i64, color: Color) {
    let a = alpha(color);
    if a == 0 {
        return;
    }
    let Some(idx) = canvas.cell_index(x, y) else {
        return;
    };
    let cells = canvas.cells_mut();
    cells[idx] = if a == u8::MAX {
        color
    } else {
        blend_over(color, cells[idx])
    };
}

/// Linear alpha blend of `src` over `dst`.
///
/// Each channel is `(a * src + (255 - a) * dst) / 255` with truncating
/// division; the result takes the source alpha.
#[inline]
pub fn blend_over(src: Color, dst: Color) -> Color {
    let a = u32::from(alpha(src));
    let inv = 255 - a;
    let mix = |s: u8, d: u8| (a * u32::from(s) + inv * u32::from(d)) / 255;

    let r = mix(red(src), red(dst));
    let g = mix(green(src), green(dst));
    let b = mix(blue(src), blue(dst));
    (a << 24) | (r << 16) | (g << 8) | b
}
