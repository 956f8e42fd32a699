//! Minimal engine harness for integration tests.
//!
//! Wraps an [`Engine`] over a [`HeadlessSurface`] with a capturing image
//! writer, so tests can drive frames and inspect what was presented or
//! exported without touching the filesystem.

use canvas_core::color::Color;
use canvas_core::config::Config;
use canvas_core::display::HeadlessSurface;
use canvas_core::export::ImageWriter;
use canvas_core::{Engine, ExportError};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// One captured `write_rgba` call.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[derive(Clone, Default)]
pub struct CapturingWriter {
    pub images: Rc<RefCell<Vec<CapturedImage>>>,
}

impl ImageWriter for CapturingWriter {
    fn write_rgba(
        &mut self,
        path: &Path,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) -> Result<(), ExportError> {
        self.images.borrow_mut().push(CapturedImage {
            path: path.to_path_buf(),
            width,
            height,
            rgba: rgba.to_vec(),
        });
        Ok(())
    }
}

pub struct EngineHarness {
    pub engine: Engine<HeadlessSurface>,
    pub images: Rc<RefCell<Vec<CapturedImage>>>,
}

impl EngineHarness {
    pub fn new(width: u32, height: u32, clear_color: Color) -> Self {
        let mut config = Config::default();
        config.canvas.width = width;
        config.canvas.height = height;
        config.canvas.clear_color = clear_color;
        Self::with_config(&config)
    }

    pub fn with_config(config: &Config) -> Self {
        let writer = CapturingWriter::default();
        let images = Rc::clone(&writer.images);
        let engine = Engine::new(config, HeadlessSurface::default())
            .expect("headless engine should initialize")
            .with_writer(writer);
        Self { engine, images }
    }

    /// Presents one frame and returns what reached the surface.
    pub fn present(&mut self, elapsed_ms: i32) -> Vec<Color> {
        self.engine
            .present_frame(elapsed_ms)
            .expect("frame should present");
        self.engine.surface().last_frame().to_vec()
    }

    pub fn last_image(&self) -> Option<CapturedImage> {
        self.images.borrow().last().cloned()
    }
}
