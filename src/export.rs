// src/export.rs

//! Screenshot export.
//!
//! The canvas stores `0xAARRGGBB` cells; image encoders want 8-bit RGBA in
//! `[R, G, B, A]` byte order. Export copies the canvas into a temporary
//! byte buffer in that order and hands it to an [`ImageWriter`]. The canvas
//! itself is only read.

use crate::canvas::Canvas;
use crate::color::to_rgba_bytes;
use crate::error::ExportError;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use log::{debug, info};
use std::path::Path;

/// File name used when no screenshot path is configured.
pub const DEFAULT_SCREENSHOT_PATH: &str = "screenshot.png";

/// Destination for exported RGBA8 images.
pub trait ImageWriter {
    /// Encodes `rgba` (`width * height * 4` bytes, stride `width * 4`) and
    /// persists it at `path`.
    fn write_rgba(&mut self, path: &Path, width: u32, height: u32, rgba: &[u8])
        -> Result<(), ExportError>;
}

/// Writes PNG files.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngWriter;

impl ImageWriter for PngWriter {
    fn write_rgba(
        &mut self,
        path: &Path,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) -> Result<(), ExportError> {
        let encoded = encode_png(width, height, rgba)?;
        std::fs::write(path, &encoded)?;
        info!(
            "Wrote {}x{} screenshot to {} ({} bytes)",
            width,
            height,
            path.display(),
            encoded.len()
        );
        Ok(())
    }
}

/// Copies the canvas into a fresh RGBA8 byte buffer.
pub fn to_rgba_buffer(canvas: &Canvas) -> Result<Vec<u8>, ExportError> {
    canvas
        .ensure_consistent()
        .map_err(|_| ExportError::SizeMismatch {
            width: canvas.width(),
            height: canvas.height(),
            cells: canvas.pixels().len(),
        })?;
    let mut rgba = Vec::with_capacity(canvas.pixels().len() * 4);
    for &c in canvas.pixels() {
        rgba.extend_from_slice(&to_rgba_bytes(c));
    }
    Ok(rgba)
}

/// PNG-encodes an RGBA8 buffer in memory.
pub fn encode_png(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, ExportError> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out).write_image(rgba, width, height, ExtendedColorType::Rgba8)?;
    Ok(out)
}

/// Encodes the whole canvas as PNG bytes.
pub fn export_png(canvas: &Canvas) -> Result<Vec<u8>, ExportError> {
    let rgba = to_rgba_buffer(canvas)?;
    encode_png(canvas.width(), canvas.height(), &rgba)
}

/// Exports the canvas through `writer` to `path`.
pub fn export_image<W>(canvas: &Canvas, writer: &mut W, path: &Path) -> Result<(), ExportError>
where
    W: ImageWriter + ?Sized,
{
    debug!(
        "Exporting {}x{} canvas to {}",
        canvas.width(),
        canvas.height(),
        path.display()
    );
    let rgba = to_rgba_buffer(canvas)?;
    writer.write_rgba(path, canvas.width(), canvas.height(), &rgba)
}
