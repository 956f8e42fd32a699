// src/display/drivers/mod.rs
//! Concrete presentation surfaces.

pub mod headless;

pub use headless::HeadlessSurface;
