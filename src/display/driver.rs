// src/display/driver.rs
//! PresentSurface trait - the minimal interface the core needs from a
//! native windowing/graphics backend.
//!
//! ## Ownership
//! - The backend owns the window, the hardware renderer and the presentable
//!   texture.
//! - The core owns the pixel buffer and lends it out once per frame.
//!
//! ## Threading Model
//! - A surface is driven from the same thread that owns the canvas.
//! - No method is expected to be called concurrently.
//!
//! ## Pixel layout
//! `present` receives the canvas buffer as-is: row-major, `width * height`
//! packed `0xAARRGGBB` cells. Any conversion to a hardware texture format is
//! the backend's business.

use crate::color::Color;
use crate::error::DisplayError;

pub trait PresentSurface {
    /// (Re)creates the renderer and a presentable surface of
    /// `width x height`, with presentation synchronised to the display
    /// refresh when `vsync` is set.
    fn configure(&mut self, width: u32, height: u32, vsync: bool) -> Result<(), DisplayError>;

    /// Recreates only the presentable surface at the new logical size,
    /// keeping the current renderer settings.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), DisplayError>;

    /// Uploads one finished frame.
    fn present(&mut self, pixels: &[Color], width: u32, height: u32) -> Result<(), DisplayError>;
}

impl<S: PresentSurface + ?Sized> PresentSurface for Box<S> {
    fn configure(&mut self, width: u32, height: u32, vsync: bool) -> Result<(), DisplayError> {
        (**self).configure(width, height, vsync)
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), DisplayError> {
        (**self).resize(width, height)
    }

    fn present(&mut self, pixels: &[Color], width: u32, height: u32) -> Result<(), DisplayError> {
        (**self).present(pixels, width, height)
    }
}
