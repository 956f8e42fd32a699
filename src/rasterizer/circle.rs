// src/rasterizer/circle.rs

//! Eight-way symmetric circle rasterization.
//!
//! The decision value starts at `round(π - 2r)` and grows by `πx + 2π` while
//! the next point stays inside, or by `π(x - y) + 3π` when `y` has to step
//! inward. The π coefficients replace the integer constants of the textbook
//! midpoint recurrence; the pixel output depends on them, so they stay.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::compositor::blend;
use crate::rasterizer::line;
use std::f64::consts::PI;

/// Draws the outline of a circle of radius `r` centred on `(x0, y0)`.
pub fn circle(canvas: &mut Canvas, x0: i64, y0: i64, r: i64, color: Color) {
    let mut x = 0;
    let mut y = r;
    let mut d = initial_decision(r);

    while x <= y {
        blend(canvas, x0 + x, y0 + y, color);
        blend(canvas, x0 + y, y0 + x, color);
        blend(canvas, x0 - y, y0 + x, color);
        blend(canvas, x0 - x, y0 + y, color);

        blend(canvas, x0 - x, y0 - y, color);
        blend(canvas, x0 - y, y0 - x, color);
        blend(canvas, x0 + y, y0 - x, color);
        blend(canvas, x0 + x, y0 - y, color);

        d = advance(d, x, &mut y);
        x += 1;
    }
}

/// Draws a solid circle as horizontal spans between symmetric point pairs.
///
/// Spans on the same row may be drawn more than once, so a translucent
/// color composites repeatedly there.
pub fn filled_circle(canvas: &mut Canvas, x0: i64, y0: i64, r: i64, color: Color) {
    let mut x = 0;
    let mut y = r;
    let mut d = initial_decision(r);

    while x <= y {
        line(canvas, x0 - x, y0 + y, x0 + x, y0 + y, color);
        line(canvas, x0 - y, y0 + x, x0 + y, y0 + x, color);
        line(canvas, x0 + x, y0 - y, x0 - x, y0 - y, color);
        line(canvas, x0 - y, y0 - x, x0 + y, y0 - x, color);

        d = advance(d, x, &mut y);
        x += 1;
    }
}

fn initial_decision(r: i64) -> i64 {
    (PI - (2 * r) as f64).round() as i64
}

/// Returns the next decision value, stepping `y` inward when the current
/// one is non-negative. The sum is truncated back to an integer each step.
fn advance(d: i64, x: i64, y: &mut i64) -> i64 {
    if d < 0 {
        (d as f64 + PI * x as f64 + PI * 2.0) as i64
    } else {
        let next = (d as f64 + PI * (x - *y) as f64 + PI * 3.0) as i64;
        *y -= 1;
        next
    }
}
