//! Core value types for pxcanvas.
//!
//! - `Colour` - RGBA colour values with 8-bit channels
//! - `BlendMode` - How a layer contributes to a composite

mod blend;
mod colour;

pub use blend::BlendMode;
pub use colour::Colour;
