// src/main.rs

//! Headless demo: renders a test scene onto the canvas, presents a few
//! frames with the debug overlay and writes a screenshot.

use anyhow::Context;
use canvas_core::{
    color::{argb, BLUE, GREEN, RED, WHITE},
    config::CONFIG,
    display::HeadlessSurface,
    glyph::draw_text,
    rasterizer::{circle, ellipse, filled_circle, filled_ellipse, filled_rect, line, rect},
    Canvas, Engine,
};
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

/// Frame time reported to the overlay for each demo frame.
const DEMO_FRAME_MS: i32 = 16;
const DEMO_FRAMES: usize = 30;

/// Render a test scene headlessly and save a screenshot.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Canvas width in pixels
    #[arg(short, long)]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Screenshot output path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Draw the debug overlay
    #[arg(short, long)]
    debug: bool,
}

fn draw_scene(canvas: &mut Canvas) {
    let w = i64::from(canvas.width());
    let h = i64::from(canvas.height());

    filled_rect(canvas, 8, 8, w / 3, h / 3, argb(0xFF, 0x20, 0x20, 0x60));
    rect(canvas, 8, 8, w / 3, h / 3, WHITE);
    line(canvas, 0, 0, w - 1, h - 1, RED);
    line(canvas, w - 1, 0, 0, h - 1, GREEN);

    filled_circle(canvas, w / 2, h / 2, h / 5, argb(0x80, 0x00, 0x80, 0xFF));
    circle(canvas, w / 2, h / 2, h / 4, WHITE);

    filled_ellipse(canvas, w - 90, 10, w - 10, 50, argb(0xC0, 0xFF, 0xA0, 0x00));
    ellipse(canvas, w - 90, 10, w - 10, 50, BLUE);

    draw_text(canvas, "Hello, canvas!", 12, h - 40, WHITE);
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let args = Args::parse();
    info!("Starting canvas-core demo: {:?}", args);

    let mut config = (*CONFIG).clone();
    if let Some(width) = args.width {
        config.canvas.width = width;
    }
    if let Some(height) = args.height {
        config.canvas.height = height;
    }
    if let Some(output) = args.output {
        config.screenshot.path = output;
    }
    config.debug.enabled |= args.debug;

    let surface = HeadlessSurface::default();
    let mut engine = Engine::new(&config, surface).context("Failed to initialize engine")?;

    for _ in 0..DEMO_FRAMES {
        draw_scene(engine.canvas_mut());
        if let Err(e) = engine.present_frame(DEMO_FRAME_MS) {
            error!("Failed to present frame: {}", e);
            break;
        }
    }
    info!(
        "Presented {} frames, average {:.1} fps",
        engine.surface().frames_presented(),
        engine.overlay().avg_fps()
    );

    engine
        .take_screenshot()
        .with_context(|| format!("Failed to write {}", engine.screenshot_path().display()))?;

    info!("canvas-core demo exited successfully.");
    Ok(())
}
