//! Rendering module for pxcanvas.
//!
//! This module flattens layered canvases into presentable RGBA8 buffers and
//! moves canvases in and out of PNG files.

mod composite;
mod png;

pub use composite::{render_layers, Layer};
pub use png::{load_canvas, write_canvas, write_rgba};
