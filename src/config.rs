// src/config.rs

//! Configuration structures for the canvas runtime.
//!
//! Every section derives `Deserialize` with `#[serde(default)]`, so a config
//! file only needs to mention the settings it changes. The process-wide
//! [`CONFIG`] is loaded lazily from the JSON file named by
//! `CANVAS_CORE_CONFIG`, falling back to defaults.

use crate::color::{Color, BLACK};
use crate::debug::DEFAULT_SMOOTHING;
use crate::export::DEFAULT_SCREENSHOT_PATH;
use anyhow::Context;
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV_VAR: &str = "CANVAS_CORE_CONFIG";

/// Global configuration, loaded on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

// --- Top-Level Configuration Structure ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Canvas size and clear color.
    pub canvas: CanvasConfig,
    /// Debug overlay settings.
    pub debug: DebugConfig,
    /// Presentation settings.
    pub display: DisplayConfig,
    /// Screenshot export settings.
    pub screenshot: ScreenshotConfig,
}

impl Config {
    /// Parses a JSON document.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], or defaults if it is
    /// unset or unreadable.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            info!("{} not set, using default configuration", CONFIG_ENV_VAR);
            return Self::default();
        };
        let path = PathBuf::from(path);
        match Self::load(&path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{:#}. Using default configuration.", e);
                Self::default()
            }
        }
    }
}

// --- Canvas Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Packed `0xAARRGGBB` color the canvas is filled with at startup.
    pub clear_color: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        CanvasConfig {
            width: crate::canvas::DEFAULT_WIDTH,
            height: crate::canvas::DEFAULT_HEIGHT,
            clear_color: BLACK,
        }
    }
}

// --- Debug Overlay Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Draw the overlay each frame.
    pub enabled: bool,
    /// Weight of the previous average in the frame-rate moving average.
    pub smoothing: f64,
}

impl Default for DebugConfig {
    fn default() -> Self {
        DebugConfig {
            enabled: false,
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}

// --- Display Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Synchronise presentation with the display refresh.
    pub vsync: bool,
    /// Run updates in lockstep with frames rather than catching up.
    pub lockstep: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            vsync: true,
            lockstep: false,
        }
    }
}

// --- Screenshot Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenshotConfig {
    /// Where screenshots are written.
    pub path: PathBuf,
}

impl Default for ScreenshotConfig {
    fn default() -> Self {
        ScreenshotConfig {
            path: PathBuf::from(DEFAULT_SCREENSHOT_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use test_log::test;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!((config.canvas.width, config.canvas.height), (320, 240));
        assert_eq!(config.canvas.clear_color, 0xFF00_0000);
        assert!(!config.debug.enabled);
        assert_eq!(config.debug.smoothing, 0.9);
        assert!(config.display.vsync);
        assert!(!config.display.lockstep);
        assert_eq!(config.screenshot.path, PathBuf::from("screenshot.png"));
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = Config::from_json(r#"{ "canvas": { "width": 128 }, "debug": { "enabled": true } }"#)
            .unwrap();
        assert_eq!(config.canvas.width, 128);
        assert_eq!(config.canvas.height, 240);
        assert!(config.debug.enabled);
        assert_eq!(config.debug.smoothing, 0.9);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "screenshot": {{ "path": "out/frame.png" }} }}"#).unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.screenshot.path, PathBuf::from("out/frame.png"));
    }

    #[test]
    fn load_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));
    }
}
