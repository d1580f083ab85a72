//! pxcanvas - Layered pixel canvas engine
//!
//! The rendering core of a layered pixel-art editor: an owned RGBA8
//! [`Canvas`] with point, line and flood-fill drawing, crop/nearest/smooth
//! resizing, and a compositor that flattens an ordered list of layers into a
//! presentable byte buffer under per-layer blend modes.
//!
//! All engine operations are synchronous. A canvas has a single owner and is
//! mutated in place; the compositor only borrows its inputs.

pub mod canvas;
pub mod cli;
pub mod error;
pub mod output;
pub mod render;
pub mod stack;
pub mod types;

pub use canvas::{Canvas, ResizeMode};
pub use error::{CanvasError, Result};
pub use render::{load_canvas, render_layers, write_canvas, write_rgba, Layer};
pub use stack::{CanvasMut, LayerEntry, LayerStack};
pub use types::{BlendMode, Colour};
