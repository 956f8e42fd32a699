// src/engine.rs

//! Frame driver: owns the canvas, the presentation surface and the debug
//! overlay, and exposes the externally triggered entry points (resize,
//! present, screenshot, overlay toggle).
//!
//! All drawing happens on the owning thread between calls to
//! [`Engine::present_frame`], through [`Engine::canvas_mut`].

use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::Config;
use crate::debug::{DebugOverlay, FrameFlags};
use crate::display::PresentSurface;
use crate::error::{CanvasError, DisplayError, ExportError};
use crate::export::{export_image, ImageWriter, PngWriter};
use log::{debug, error, info, trace};
use std::path::{Path, PathBuf};

pub struct Engine<S: PresentSurface> {
    canvas: Canvas,
    surface: S,
    overlay: DebugOverlay,
    flags: FrameFlags,
    debug_enabled: bool,
    screenshot_path: PathBuf,
    writer: Box<dyn ImageWriter>,
}

impl<S: PresentSurface> Engine<S> {
    /// Configures `surface` and allocates the canvas described by `config`.
    pub fn new(config: &Config, mut surface: S) -> Result<Self, CanvasError> {
        let width = config.canvas.width;
        let height = config.canvas.height;
        surface.configure(width, height, config.display.vsync)?;
        let canvas = Canvas::new(width, height, config.canvas.clear_color)?;

        let mut flags = FrameFlags::empty();
        flags.set(FrameFlags::VSYNC, config.display.vsync);
        flags.set(FrameFlags::LOCKSTEP, config.display.lockstep);

        info!(
            "Engine initialized: {}x{} canvas, flags {:?}, debug overlay {}",
            width, height, flags, config.debug.enabled
        );

        Ok(Engine {
            canvas,
            surface,
            overlay: DebugOverlay::new(config.debug.smoothing),
            flags,
            debug_enabled: config.debug.enabled,
            screenshot_path: config.screenshot.path.clone(),
            writer: Box::new(PngWriter),
        })
    }

    /// Replaces the screenshot writer.
    pub fn with_writer(mut self, writer: impl ImageWriter + 'static) -> Self {
        self.writer = Box::new(writer);
        self
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn overlay(&self) -> &DebugOverlay {
        &self.overlay
    }

    pub fn flags(&self) -> FrameFlags {
        self.flags
    }

    pub fn screenshot_path(&self) -> &Path {
        &self.screenshot_path
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    pub fn set_debug_enabled(&mut self, enabled: bool) {
        debug!("Debug overlay {}", if enabled { "on" } else { "off" });
        self.debug_enabled = enabled;
    }

    pub fn set_lockstep(&mut self, lockstep: bool) {
        self.flags.set(FrameFlags::LOCKSTEP, lockstep);
    }

    /// Rebuilds the surface with vsync on or off. The requested state is
    /// recorded even if the rebuild fails.
    pub fn set_vsync(&mut self, vsync: bool) -> Result<(), DisplayError> {
        self.flags.set(FrameFlags::VSYNC, vsync);
        self.surface
            .configure(self.canvas.width(), self.canvas.height(), vsync)
    }

    /// Resizes the canvas and surface, filling the new canvas with `fill`.
    ///
    /// On failure the canvas may be left inconsistent; [`Engine::present_frame`]
    /// refuses to present until a later resize succeeds.
    pub fn resize_canvas(&mut self, width: u32, height: u32, fill: Color) -> Result<(), CanvasError> {
        self.canvas
            .resize(width, height, fill, &mut self.surface)
            .inspect_err(|e| error!("Canvas resize to {}x{} failed: {}", width, height, e))
    }

    /// Writes the current canvas to the configured screenshot path.
    pub fn take_screenshot(&mut self) -> Result<(), ExportError> {
        export_image(&self.canvas, self.writer.as_mut(), &self.screenshot_path).inspect_err(|e| {
            error!(
                "Screenshot to {} failed: {}",
                self.screenshot_path.display(),
                e
            )
        })
    }

    /// Finishes the frame: draws the debug overlay when enabled, then hands
    /// the buffer to the surface.
    pub fn present_frame(&mut self, elapsed_ms: i32) -> Result<(), CanvasError> {
        self.canvas.ensure_consistent()?;
        self.overlay.set_elapsed_ms(elapsed_ms);
        if self.debug_enabled {
            self.overlay.draw(&mut self.canvas, self.flags);
        }
        trace!("Presenting frame ({} ms)", elapsed_ms);
        self.surface.present(
            self.canvas.pixels(),
            self.canvas.width(),
            self.canvas.height(),
        )?;
        Ok(())
    }
}
