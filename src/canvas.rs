// src/canvas.rs

//! The owned pixel buffer every drawing operation mutates.
//!
//! The buffer is row-major, `width * height` packed colors. It is owned by
//! exactly one frame driver and mutated in place; there is no internal
//! locking and no double buffering.

use crate::color::{Color, TRANSPARENT};
use crate::display::PresentSurface;
use crate::error::CanvasError;
use crate::rasterizer;
use log::{debug, warn};

/// Width of a freshly created canvas.
pub const DEFAULT_WIDTH: u32 = 320;
/// Height of a freshly created canvas.
pub const DEFAULT_HEIGHT: u32 = 240;

#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Allocates a `width x height` canvas and fills every cell with `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> Result<Self, CanvasError> {
        let mut canvas = Canvas {
            width,
            height,
            pixels: allocate(width, height)?,
        };
        rasterizer::filled_rect(&mut canvas, 0, 0, width.into(), height.into(), fill);
        Ok(canvas)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read-only view of the raw row-major buffer.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Returns the color stored at `(x, y)`, or `None` if it lies off-canvas.
    pub fn pixel(&self, x: i64, y: i64) -> Option<Color> {
        self.cell_index(x, y).map(|idx| self.pixels[idx])
    }

    /// Whether a draw at `(x, y)` would land on the canvas.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..i64::from(self.width)).contains(&x) && (0..i64::from(self.height)).contains(&y)
    }

    /// False only after a failed resize left the stored dimensions out of
    /// step with the buffer.
    pub fn is_consistent(&self) -> bool {
        self.pixels.len() == cell_count(self.width, self.height).unwrap_or(usize::MAX)
    }

    /// Checks that the buffer still matches the stored dimensions.
    pub fn ensure_consistent(&self) -> Result<(), CanvasError> {
        if self.is_consistent() {
            Ok(())
        } else {
            Err(CanvasError::InconsistentSize {
                width: self.width,
                height: self.height,
                cells: self.pixels.len(),
            })
        }
    }

    /// Resizes the canvas and its presentable surface.
    ///
    /// A resize to the current dimensions is a no-op that keeps the existing
    /// contents. Otherwise the surface is recreated, the buffer reallocated
    /// and every cell filled with `fill`.
    ///
    /// The new dimensions are recorded before the surface and the buffer are
    /// touched and are not rolled back on failure. Callers must check
    /// [`Canvas::is_consistent`] before drawing again after an error.
    pub fn resize<S>(
        &mut self,
        new_width: u32,
        new_height: u32,
        fill: Color,
        surface: &mut S,
    ) -> Result<(), CanvasError>
    where
        S: PresentSurface + ?Sized,
    {
        if self.width == new_width && self.height == new_height {
            return Ok(());
        }
        debug!(
            "Resizing canvas {}x{} -> {}x{}",
            self.width, self.height, new_width, new_height
        );

        self.width = new_width;
        self.height = new_height;

        if let Err(e) = surface.resize(new_width, new_height) {
            warn!("Surface recreation failed during canvas resize: {}", e);
            return Err(e.into());
        }

        self.pixels = allocate(new_width, new_height)?;
        rasterizer::filled_rect(self, 0, 0, new_width.into(), new_height.into(), fill);
        Ok(())
    }

    /// Maps `(x, y)` to a buffer index when it is both within the stored
    /// dimensions and backed by the buffer.
    #[inline]
    pub(crate) fn cell_index(&self, x: i64, y: i64) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        (idx < self.pixels.len()).then_some(idx)
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            pixels: vec![TRANSPARENT; (DEFAULT_WIDTH * DEFAULT_HEIGHT) as usize],
        }
    }
}

fn cell_count(width: u32, height: u32) -> Option<usize> {
    (width as usize).checked_mul(height as usize)
}

/// Allocates a zeroed buffer so no cell is left uninitialised even when the
/// subsequent fill is transparent.
fn allocate(width: u32, height: u32) -> Result<Vec<Color>, CanvasError> {
    let cells = cell_count(width, height).ok_or(CanvasError::Allocation { width, height })?;
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(cells)
        .map_err(|_| CanvasError::Allocation { width, height })?;
    pixels.resize(cells, TRANSPARENT);
    Ok(pixels)
}
