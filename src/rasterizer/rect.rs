// src/rasterizer/rect.rs

//! Axis-aligned rectangles.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::compositor::blend;
use crate::rasterizer::line;

/// Traces the outline of the `w x h` rectangle whose top-left cell is
/// `(x, y)`. Corners are shared by two edges and so are composited twice.
pub fn rect(canvas: &mut Canvas, x: i64, y: i64, w: i64, h: i64, color: Color) {
    let right = x + w - 1;
    let bottom = y + h - 1;
    line(canvas, x, y, x, bottom, color);
    line(canvas, x, y, right, y, color);
    line(canvas, x, bottom, right, bottom, color);
    line(canvas, right, y, right, bottom, color);
}

/// Fills the `w x h` rectangle whose top-left cell is `(x, y)`.
///
/// The iteration range is clamped to `[0, width] x [0, height]` first, so
/// only on-canvas cells are visited; each one is composited individually.
pub fn filled_rect(canvas: &mut Canvas, x: i64, y: i64, w: i64, h: i64, color: Color) {
    let width = i64::from(canvas.width());
    let height = i64::from(canvas.height());
    let x1 = x.clamp(0, width);
    let y1 = y.clamp(0, height);
    let x2 = x.saturating_add(w).clamp(0, width);
    let y2 = y.saturating_add(h).clamp(0, height);

    for j in y1..y2 {
        for i in x1..x2 {
            blend(canvas, i, j, color);
        }
    }
}
