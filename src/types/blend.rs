//! Per-layer blend modes.

use std::fmt;
use std::str::FromStr;

use crate::error::{CanvasError, Result};

/// How a layer's colour contributes to the running composite.
///
/// The mode belongs to the layer at composite time, not to its canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// Energy-accumulating sum of alpha-weighted colour. Never normalised.
    Add,
    /// Alpha compositing; earlier layers stay in front of later ones.
    #[default]
    Over,
}

impl BlendMode {
    /// All modes, in declaration order.
    pub const ALL: [Self; 2] = [Self::Add, Self::Over];

    /// Lowercase name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Over => "over",
        }
    }
}

impl FromStr for BlendMode {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "over" | "normal" => Ok(Self::Over),
            other => Err(CanvasError::Parse {
                message: format!("Unknown blend mode: {}", other),
                help: Some("Use 'over' or 'add'".to_string()),
            }),
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
