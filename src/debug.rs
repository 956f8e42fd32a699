// src/debug.rs

//! On-canvas debug overlay: a smoothed frame-rate readout plus the current
//! vsync and timing-mode state, drawn in the bottom-right corner.

use crate::canvas::Canvas;
use crate::color::{Color, WHITE};
use crate::font8x8::GLYPH_SIZE;
use crate::glyph::draw_text;
use crate::rasterizer::filled_rect;
use bitflags::bitflags;
use log::trace;
use serde::{Deserialize, Serialize};

/// Default weight given to the previous average on each update.
pub const DEFAULT_SMOOTHING: f64 = 0.9;

/// Background behind the frame-rate readout: half-transparent black.
const BACKDROP: Color = 0x7F00_0000;
/// Longest frame-rate string that is rendered.
const MAX_FPS_TEXT: usize = 19;

bitflags! {
    /// Presentation and timing state shown by the overlay.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct FrameFlags: u8 {
        /// Presentation waits for the display refresh.
        const VSYNC    = 1 << 0;
        /// Updates run in lockstep with frames instead of catching up.
        const LOCKSTEP = 1 << 1;
    }
}

#[derive(Debug, Clone)]
pub struct DebugOverlay {
    avg_fps: f64,
    smoothing: f64,
    elapsed_ms: i32,
}

impl Default for DebugOverlay {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHING)
    }
}

impl DebugOverlay {
    pub fn new(smoothing: f64) -> Self {
        Self {
            avg_fps: 0.0,
            smoothing,
            elapsed_ms: 0,
        }
    }

    pub fn avg_fps(&self) -> f64 {
        self.avg_fps
    }

    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    pub fn elapsed_ms(&self) -> i32 {
        self.elapsed_ms
    }

    /// Records how long the last frame took.
    pub fn set_elapsed_ms(&mut self, elapsed_ms: i32) {
        self.elapsed_ms = elapsed_ms;
    }

    /// Folds the recorded frame time into the moving average:
    /// `avg = α·avg + (1 − α)·1000 / (elapsed + 1)`.
    pub fn update(&mut self) -> f64 {
        let frames_this_second = 1000.0 / (f64::from(self.elapsed_ms) + 1.0);
        let alpha = self.smoothing;
        self.avg_fps = alpha * self.avg_fps + (1.0 - alpha) * frames_this_second;
        self.avg_fps
    }

    /// The readout text for the current average, e.g. `"59.7 fps"`.
    pub fn fps_text(&self) -> String {
        let mut text = format!("{:.1} fps", self.avg_fps);
        text.truncate(MAX_FPS_TEXT);
        text
    }

    /// Updates the average and draws the overlay.
    pub fn draw(&mut self, canvas: &mut Canvas, flags: FrameFlags) {
        self.update();
        trace!("Debug overlay: {:.2} fps, flags {:?}", self.avg_fps, flags);

        let glyph = GLYPH_SIZE as i64;
        let width = i64::from(canvas.width());
        let height = i64::from(canvas.height());

        let mut start_x = width - 4 * glyph - 2;
        let start_y = height - glyph - 2;
        filled_rect(canvas, start_x, start_y, 4 * glyph + 2, 10, BACKDROP);
        draw_text(canvas, &self.fps_text(), start_x + 1, start_y + 1, WHITE);

        start_x = width - 9 * glyph - 2;
        let vsync = if flags.contains(FrameFlags::VSYNC) {
            "VSync On"
        } else {
            "VSync Off"
        };
        draw_text(canvas, vsync, start_x, start_y - glyph, WHITE);

        let mode = if flags.contains(FrameFlags::LOCKSTEP) {
            "Lockstep"
        } else {
            "Catchup"
        };
        draw_text(canvas, mode, start_x, start_y - 2 * glyph, WHITE);
    }
}
