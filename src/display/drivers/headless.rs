//! Headless in-memory presentation surface.
//!
//! Keeps a copy of the last presented frame so callers and tests can inspect
//! what would have reached the screen.

use crate::color::Color;
use crate::display::driver::PresentSurface;
use crate::error::DisplayError;
use log::{info, trace, warn};

#[derive(Debug, Default)]
pub struct HeadlessSurface {
    width_px: u32,
    height_px: u32,
    vsync: bool,
    configured: bool,
    resize_count: u64,
    frames_presented: u64,
    last_frame: Vec<Color>,
    fail_next_resize: bool,
}

impl HeadlessSurface {
    /// Creates a configured surface of `width_px x height_px` with vsync on.
    pub fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px,
            height_px,
            vsync: true,
            configured: true,
            ..Self::default()
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width_px, self.height_px)
    }

    pub fn vsync(&self) -> bool {
        self.vsync
    }

    pub fn resize_count(&self) -> u64 {
        self.resize_count
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// The most recently presented frame, empty until the first present.
    pub fn last_frame(&self) -> &[Color] {
        &self.last_frame
    }

    /// Makes the next `resize` fail as if the backend could not create a
    /// texture.
    pub fn fail_next_resize(&mut self) {
        self.fail_next_resize = true;
    }
}

impl PresentSurface for HeadlessSurface {
    fn configure(&mut self, width: u32, height: u32, vsync: bool) -> Result<(), DisplayError> {
        info!(
            "HeadlessSurface: configure {}x{} (vsync {})",
            width, height, vsync
        );
        self.width_px = width;
        self.height_px = height;
        self.vsync = vsync;
        self.configured = true;
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), DisplayError> {
        if !self.configured {
            return Err(DisplayError::NotConfigured);
        }
        if std::mem::take(&mut self.fail_next_resize) {
            warn!("HeadlessSurface: injected resize failure");
            return Err(DisplayError::SurfaceCreation {
                width,
                height,
                reason: "injected failure".to_string(),
            });
        }
        trace!("HeadlessSurface: resize {}x{}", width, height);
        self.width_px = width;
        self.height_px = height;
        self.resize_count += 1;
        Ok(())
    }

    fn present(&mut self, pixels: &[Color], width: u32, height: u32) -> Result<(), DisplayError> {
        if !self.configured {
            return Err(DisplayError::NotConfigured);
        }
        let expected = (self.width_px as usize) * (self.height_px as usize);
        if (width, height) != (self.width_px, self.height_px) || pixels.len() != expected {
            return Err(DisplayError::FrameSizeMismatch {
                width: self.width_px,
                height: self.height_px,
                actual: pixels.len(),
            });
        }
        trace!("HeadlessSurface: present frame {}", self.frames_presented);
        self.last_frame.clear();
        self.last_frame.extend_from_slice(pixels);
        self.frames_presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn present_records_frame() {
        let mut surface = HeadlessSurface::new(2, 1);
        surface.present(&[1, 2], 2, 1).unwrap();
        assert_eq!(surface.last_frame(), &[1, 2]);
        assert_eq!(surface.frames_presented(), 1);
    }

    #[test]
    fn present_rejects_mismatched_frame() {
        let mut surface = HeadlessSurface::new(2, 2);
        let err = surface.present(&[0; 3], 2, 2).unwrap_err();
        assert!(matches!(err, DisplayError::FrameSizeMismatch { actual: 3, .. }));
        assert_eq!(surface.frames_presented(), 0);
    }

    #[test]
    fn unconfigured_surface_refuses_work() {
        let mut surface = HeadlessSurface::default();
        assert!(matches!(surface.resize(1, 1), Err(DisplayError::NotConfigured)));
        surface.configure(1, 1, false).unwrap();
        assert!(!surface.vsync());
        surface.resize(3, 3).unwrap();
        assert_eq!(surface.size(), (3, 3));
    }

    #[test]
    fn injected_failure_fires_once() {
        let mut surface = HeadlessSurface::new(1, 1);
        surface.fail_next_resize();
        assert!(surface.resize(2, 2).is_err());
        assert_eq!(surface.size(), (1, 1));
        assert!(surface.resize(2, 2).is_ok());
        assert_eq!(surface.resize_count(), 1);
    }
}
