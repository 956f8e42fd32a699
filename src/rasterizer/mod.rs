// src/rasterizer/mod.rs

//! Integer rasterization of lines, circles, ellipses and rectangles.
//!
//! Every primitive accepts arbitrary (possibly negative or off-canvas)
//! coordinates and writes through [`crate::compositor::blend`], which owns
//! clipping. Nothing here bounds-checks on its own, with the single
//! exception of [`filled_rect`], which clamps its iteration range.
//!
//! ```text
//! line ──────────────┐
//! circle / ellipse ──┼──> blend(canvas, x, y, color) ──> Canvas cell
//! rect / filled_rect ┘
//! ```

pub mod circle;
pub mod ellipse;
pub mod line;
pub mod rect;

pub use circle::{circle, filled_circle};
pub use ellipse::{ellipse, filled_ellipse};
pub use line::line;
pub use rect::{filled_rect, rect};
