// src/lib.rs

//! Software rendering core for a small fantasy-console runtime.
//!
//! A [`Canvas`] owns a packed `0xAARRGGBB` pixel buffer. Every drawing
//! primitive (lines, circles, ellipses, rectangles, bitmap text) writes into
//! it through [`compositor::blend`]. Once per frame the buffer is handed to a
//! [`display::PresentSurface`]; on request it is exported as a PNG.

pub mod canvas;
pub mod color;
pub mod compositor;
pub mod config;
pub mod debug;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod font8x8;
pub mod glyph;
pub mod rasterizer;

pub use canvas::Canvas;
pub use color::Color;
pub use engine::Engine;
pub use error::{CanvasError, DisplayError, ExportError};
