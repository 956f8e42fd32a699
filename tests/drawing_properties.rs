//! Integration tests: canvas-wide properties every primitive must honor.

use canvas_core::color::{Color, BLACK, RED, WHITE};
use canvas_core::compositor::blend;
use canvas_core::display::HeadlessSurface;
use canvas_core::glyph::draw_text;
use canvas_core::rasterizer::{
    circle, ellipse, filled_circle, filled_ellipse, filled_rect, line, rect,
};
use canvas_core::Canvas;
use test_log::test;

const W: u32 = 24;
const H: u32 = 16;

fn canvas() -> Canvas {
    Canvas::new(W, H, BLACK).unwrap()
}

/// Coordinates well outside the canvas in every direction.
fn outside_points() -> Vec<(i64, i64)> {
    let (w, h) = (i64::from(W), i64::from(H));
    vec![
        (-1, 0),
        (0, -1),
        (w, 0),
        (0, h),
        (w, h),
        (-1, -1),
        (-1000, 5),
        (5, 1000),
        (i64::MIN / 4, i64::MAX / 4),
    ]
}

#[test]
fn blend_outside_never_changes_buffer() {
    let mut c = canvas();
    filled_rect(&mut c, 0, 0, 12, 8, RED);
    let before = c.pixels().to_vec();
    for (x, y) in outside_points() {
        for color in [WHITE, 0x80FF_FFFF, 0x01FF_FFFF] {
            blend(&mut c, x, y, color);
        }
    }
    assert_eq!(c.pixels(), &before[..]);
}

#[test]
fn opaque_blend_reads_back_exactly() {
    let mut c = canvas();
    let colors: [Color; 4] = [0xFF00_0000, 0xFFFF_FFFF, 0xFF12_3456, 0xFFAB_CDEF];
    for (i, &color) in colors.iter().enumerate() {
        let x = i as i64 * 3;
        blend(&mut c, x, 2, 0x8040_4040);
        blend(&mut c, x, 2, color);
        assert_eq!(c.pixel(x, 2), Some(color));
    }
}

#[test]
fn transparent_draws_are_noops_everywhere() {
    let mut c = canvas();
    filled_rect(&mut c, 3, 3, 9, 9, 0xFF33_6699);
    let before = c.pixels().to_vec();
    let clear: Color = 0x00FF_FFFF;

    blend(&mut c, 4, 4, clear);
    line(&mut c, 0, 0, 23, 15, clear);
    rect(&mut c, 1, 1, 10, 10, clear);
    filled_rect(&mut c, 0, 0, 24, 16, clear);
    circle(&mut c, 12, 8, 6, clear);
    filled_circle(&mut c, 12, 8, 6, clear);
    ellipse(&mut c, 2, 2, 20, 14, clear);
    filled_ellipse(&mut c, 2, 2, 20, 14, clear);
    draw_text(&mut c, "Hi!", 1, 1, clear);

    assert_eq!(c.pixels(), &before[..]);
}

#[test]
fn lines_always_plot_both_endpoints() {
    let points = [(0, 0), (23, 15), (5, 11), (17, 2), (11, 11), (0, 15), (23, 0), (9, 3)];
    for &(x1, y1) in &points {
        for &(x2, y2) in &points {
            let mut c = canvas();
            line(&mut c, x1, y1, x2, y2, WHITE);
            assert_eq!(c.pixel(x1, y1), Some(WHITE), "({x1},{y1})->({x2},{y2}) start");
            assert_eq!(c.pixel(x2, y2), Some(WHITE), "({x1},{y1})->({x2},{y2}) end");
        }
    }
}

#[test]
fn low_slope_example_line() {
    let mut c = canvas();
    line(&mut c, 0, 0, 3, 1, WHITE);
    let lit: Vec<(i64, i64)> = (0..i64::from(H))
        .flat_map(|y| (0..i64::from(W)).map(move |x| (x, y)))
        .filter(|&(x, y)| c.pixel(x, y) == Some(WHITE))
        .collect();
    assert_eq!(lit, vec![(0, 0), (1, 0), (2, 1), (3, 1)]);
}

#[test]
fn filled_rect_never_escapes_canvas() {
    let cases = [
        (-5, -5, 10, 10),
        (20, 12, 50, 50),
        (-100, 4, 1000, 3),
        (0, 0, i64::MAX, i64::MAX),
        (i64::MIN, i64::MIN, i64::MAX, i64::MAX),
    ];
    for (x, y, w, h) in cases {
        let mut c = canvas();
        filled_rect(&mut c, x, y, w, h, WHITE);
        assert_eq!(c.pixels().len(), (W * H) as usize);
        for cy in 0..i64::from(H) {
            for cx in 0..i64::from(W) {
                let (px, py) = (i128::from(cx), i128::from(cy));
                let inside = px >= i128::from(x)
                    && py >= i128::from(y)
                    && px < i128::from(x) + i128::from(w)
                    && py < i128::from(y) + i128::from(h);
                let expected = if inside { WHITE } else { BLACK };
                assert_eq!(c.pixel(cx, cy), Some(expected), "({x},{y},{w},{h}) at ({cx},{cy})");
            }
        }
    }
}

#[test]
fn same_size_resize_is_untouched() {
    let mut surface = HeadlessSurface::new(W, H);
    let mut c = canvas();
    circle(&mut c, 10, 8, 5, WHITE);
    let before = c.pixels().to_vec();

    assert!(c.resize(W, H, RED, &mut surface).is_ok());
    assert_eq!(c.pixels(), &before[..]);
}

#[test]
fn resize_then_readback_is_all_fill() {
    let mut surface = HeadlessSurface::new(W, H);
    let mut c = canvas();
    filled_circle(&mut c, 10, 8, 5, WHITE);

    for (w, h) in [(7, 3), (40, 30), (1, 1), (W, H)] {
        c.resize(w, h, 0xFF44_5566, &mut surface).unwrap();
        assert_eq!(c.pixels().len(), (w * h) as usize);
        assert!(c.pixels().iter().all(|&p| p == 0xFF44_5566));
    }
}

#[test]
fn translucent_black_over_red() {
    let mut c = Canvas::new(10, 10, RED).unwrap();
    blend(&mut c, 5, 5, 0x8000_0000);
    assert_eq!(c.pixel(5, 5), Some(0x807F_0000));
}

#[test]
fn text_advances_eight_per_glyph() {
    let mut c = canvas();
    assert_eq!(draw_text(&mut c, "AB", 0, 0, WHITE), 16);
    assert_eq!(draw_text(&mut c, "", 0, 0, WHITE), 0);
    assert_eq!(draw_text(&mut c, "abc", 0, 8, WHITE), 24);
}
