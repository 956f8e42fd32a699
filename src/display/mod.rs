// src/display/mod.rs
//! Presentation-layer boundary.
//!
//! - PresentSurface: what the core needs from a windowing/graphics backend
//! - drivers: concrete surfaces (currently an in-memory headless one)

pub mod driver;
pub mod drivers;

pub use driver::PresentSurface;
pub use drivers::HeadlessSurface;
