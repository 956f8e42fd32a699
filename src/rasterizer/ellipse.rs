// src/rasterizer/ellipse.rs

//! Two-region midpoint ellipse rasterization.
//!
//! The ellipse is given by its bounding box. Region 1 walks `x` outward from
//! the top pole while `|(ry²·x)/(rx²·y)| < 1`, stepping `y` inward whenever
//! `ry²x² + rx²(y - ½)² - rx²ry²` is positive. Region 2 walks `y` down to the
//! major axis, stepping `x` outward whenever `rx²y² + ry²(x + ½)² - rx²ry²`
//! is not positive.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::compositor::blend;
use crate::rasterizer::line;

/// Radii, centre and squared terms derived from a bounding box.
#[derive(Debug, Clone, Copy)]
struct Axes {
    xc: i64,
    yc: i64,
    ry: i64,
    rx_sq: f64,
    ry_sq: f64,
    rx_sq_ry_sq: f64,
}

impl Axes {
    fn from_bounds(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        let rx = (x1 - x0).abs() / 2;
        let ry = (y1 - y0).abs() / 2;
        let rx_sq = (rx * rx) as f64;
        let ry_sq = (ry * ry) as f64;
        Axes {
            xc: x0.min(x1) + rx,
            yc: y0.min(y1) + ry,
            ry,
            rx_sq,
            ry_sq,
            rx_sq_ry_sq: rx_sq * ry_sq,
        }
    }

    /// Slope test for region 1. Divides by zero once `y` reaches the major
    /// axis (or for a zero radius); the resulting infinity or NaN ends the
    /// region.
    fn in_region_one(&self, x: i64, y: i64) -> bool {
        ((self.ry_sq * x as f64) / (self.rx_sq * y as f64)).abs() < 1.0
    }

    fn region_one_decision(&self, x: i64, y: i64) -> f64 {
        let half = y as f64 - 0.5;
        self.ry_sq * (x * x) as f64 + self.rx_sq * half * half - self.rx_sq_ry_sq
    }

    fn region_two_decision(&self, x: i64, y: i64) -> f64 {
        let half = x as f64 + 0.5;
        self.rx_sq * (y * y) as f64 + self.ry_sq * half * half - self.rx_sq_ry_sq
    }

    /// Runs both regions, calling `emit(x, y)` for each step's quadrant
    /// offset from the centre.
    fn walk(&self, mut emit: impl FnMut(i64, i64)) {
        let mut x = 0;
        let mut y = self.ry;

        while self.in_region_one(x, y) {
            x += 1;
            if self.region_one_decision(x, y) > 0.0 {
                y -= 1;
            }
            emit(x, y);
        }

        while y > 0 {
            y -= 1;
            if self.region_two_decision(x, y) <= 0.0 {
                x += 1;
            }
            emit(x, y);
        }
    }
}

/// Draws the outline of the ellipse inscribed in `(x0, y0)-(x1, y1)`.
pub fn ellipse(canvas: &mut Canvas, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
    let axes = Axes::from_bounds(x0, y0, x1, y1);
    let (xc, yc) = (axes.xc, axes.yc);

    blend(canvas, xc, yc + axes.ry, color);
    blend(canvas, xc, yc - axes.ry, color);

    axes.walk(|x, y| {
        blend(canvas, xc + x, yc + y, color);
        blend(canvas, xc - x, yc - y, color);
        blend(canvas, xc - x, yc + y, color);
        blend(canvas, xc + x, yc - y, color);
    });
}

/// Draws a solid ellipse inscribed in `(x0, y0)-(x1, y1)` as horizontal
/// spans, one above and one below the major axis per step.
pub fn filled_ellipse(canvas: &mut Canvas, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
    let axes = Axes::from_bounds(x0, y0, x1, y1);
    let (xc, yc) = (axes.xc, axes.yc);

    axes.walk(|x, y| {
        line(canvas, xc + x, yc + y, xc - x, yc + y, color);
        line(canvas, xc - x, yc - y, xc + x, yc - y, color);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, WHITE};
    use crate::rasterizer::test_support::{blank, cells, count_of, painted};
    use test_log::test;

    #[test]
    fn small_outline() {
        let mut c = blank(6, 4);
        ellipse(&mut c, 0, 0, 4, 2, WHITE);
        assert_eq!(
            painted(&c),
            cells(&[
                (2, 2),
                (2, 0),
                (3, 2),
                (1, 0),
                (1, 2),
                (3, 0),
                (4, 1),
                (0, 1),
            ])
        );
    }

    #[test]
    fn bounds_order_does_not_matter() {
        let mut a = blank(20, 20);
        let mut b = blank(20, 20);
        ellipse(&mut a, 2, 3, 16, 11, WHITE);
        ellipse(&mut b, 16, 11, 2, 3, WHITE);
        assert_eq!(painted(&a), painted(&b));
    }

    #[test]
    fn small_filled() {
        let mut c = blank(6, 4);
        filled_ellipse(&mut c, 0, 0, 4, 2, WHITE);
        let mut expected = Vec::new();
        expected.extend((1..=3).map(|x| (x, 0)));
        expected.extend((0..=4).map(|x| (x, 1)));
        expected.extend((1..=3).map(|x| (x, 2)));
        assert_eq!(painted(&c), cells(&expected));
    }

    #[test]
    fn outline_is_symmetric_about_centre() {
        let mut c = blank(40, 30);
        ellipse(&mut c, 4, 2, 34, 22, WHITE);
        // centre (19, 12)
        for (x, y) in painted(&c) {
            let (dx, dy) = (x - 19, y - 12);
            assert_eq!(c.pixel(19 - dx, 12 + dy), Some(WHITE));
            assert_eq!(c.pixel(19 + dx, 12 - dy), Some(WHITE));
        }
        assert_eq!(c.pixel(19, 2), Some(WHITE));
        assert_eq!(c.pixel(19, 22), Some(WHITE));
        assert_eq!(c.pixel(4, 12), Some(WHITE));
        assert_eq!(c.pixel(34, 12), Some(WHITE));
    }

    #[test]
    fn zero_width_outline_is_vertical_segment() {
        let mut c = blank(5, 9);
        ellipse(&mut c, 2, 1, 2, 7, WHITE);
        let expected: Vec<(i64, i64)> = (1..=7).map(|y| (2, y)).collect();
        assert_eq!(painted(&c), cells(&expected));
    }

    #[test]
    fn point_bounds() {
        let mut c = blank(5, 5);
        ellipse(&mut c, 2, 2, 2, 2, WHITE);
        assert_eq!(painted(&c), cells(&[(2, 2)]));

        let mut c = blank(5, 5);
        filled_ellipse(&mut c, 2, 2, 2, 2, WHITE);
        assert_eq!(count_of(&c, BLACK), 25);
    }
}
