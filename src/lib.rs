//! Murom: software triangle rasterizer
//!
//! The rasterization core writes into an owned BGRA framebuffer and has no
//! windowing dependency; the binary uploads that buffer to a macroquad
//! texture and presents it.

pub mod app;
pub mod config;
pub mod demo;
pub mod rasterizer;

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
