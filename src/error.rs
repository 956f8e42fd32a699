// src/error.rs

//! Error types returned at the canvas, display and export boundaries.

use thiserror::Error;

/// Failures reported by a presentation surface.
#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Failed to create presentable surface of {width}x{height}: {reason}")]
    SurfaceCreation {
        width: u32,
        height: u32,
        reason: String,
    },
    #[error("Frame of {actual} cells does not match a {width}x{height} surface")]
    FrameSizeMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },
    #[error("Surface is not configured")]
    NotConfigured,
}

/// Failures while creating or resizing the canvas.
#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("Surface recreation failed: {0}")]
    Surface(#[from] DisplayError),
    #[error("Failed to allocate a {width}x{height} pixel buffer")]
    Allocation { width: u32, height: u32 },
    #[error("Canvas reports {width}x{height} but holds {cells} cells")]
    InconsistentSize { width: u32, height: u32, cells: usize },
}

/// Failures while exporting the canvas as an image.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to write image file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Canvas reports {width}x{height} but holds {cells} cells")]
    SizeMismatch { width: u32, height: u32, cells: usize },
}
