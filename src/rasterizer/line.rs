// src/rasterizer/line.rs

//! Bresenham line rasterization.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::compositor::blend;

/// Draws a line from `(x1, y1)` to `(x2, y2)`, both endpoints included.
///
/// Shallow lines (`|dy| < |dx|`) step along x, everything else steps along
/// y. Endpoints are swapped as needed so the major axis always increases.
pub fn line(canvas: &mut Canvas, x1: i64, y1: i64, x2: i64, y2: i64, color: Color) {
    if y2.abs_diff(y1) < x2.abs_diff(x1) {
        if x1 > x2 {
            line_low(canvas, x2, y2, x1, y1, color);
        } else {
            line_low(canvas, x1, y1, x2, y2, color);
        }
    } else if y1 > y2 {
        line_high(canvas, x2, y2, x1, y1, color);
    } else {
        line_high(canvas, x1, y1, x2, y2, color);
    }
}

/// Steps along x; requires `x1 <= x2`.
fn line_low(canvas: &mut Canvas, x1: i64, y1: i64, x2: i64, y2: i64, color: Color) {
    let dx = x2 - x1;
    let mut dy = y2 - y1;
    let mut yi = 1;
    if dy < 0 {
        yi = -1;
        dy = -dy;
    }
    let mut p = 2 * dy - dx;

    let mut y = y1;
    for x in x1..=x2 {
        blend(canvas, x, y, color);
        if p > 0 {
            y += yi;
            p += 2 * (dy - dx);
        } else {
            p += 2 * dy;
        }
    }
}

/// Steps along y; requires `y1 <= y2`.
fn line_high(canvas: &mut Canvas, x1: i64, y1: i64, x2: i64, y2: i64, color: Color) {
    let mut dx = x2 - x1;
    let dy = y2 - y1;
    let mut xi = 1;
    if dx < 0 {
        xi = -1;
        dx = -dx;
    }
    let mut p = 2 * dx - dy;

    let mut x = x1;
    for y in y1..=y2 {
        blend(canvas, x, y, color);
        if p > 0 {
            x += xi;
            p += 2 * (dx - dy);
        } else {
            p += 2 * dx;
        }
    }
}
