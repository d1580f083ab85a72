pub mod completions;
pub mod composite;
pub mod draw;
pub mod resize;

use std::str::FromStr;

use clap::{Parser, Subcommand};

use crate::error::{CanvasError, Result};

/// pxcanvas - Layered pixel canvas toolkit
#[derive(Parser, Debug)]
#[command(name = "pxcanvas")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show debug logging (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Flatten layer images into one PNG
    Composite(composite::CompositeArgs),

    /// Resize an image, cropping or resampling its content
    Resize(resize::ResizeArgs),

    /// Draw points, lines and fills onto an image
    Draw(draw::DrawArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// An `X,Y` pixel coordinate as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl FromStr for Point {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self> {
        match parse_ints(s)?.as_slice() {
            &[x, y] => Ok(Self { x, y }),
            _ => Err(CanvasError::Parse {
                message: format!("Expected X,Y but got '{}'", s),
                help: Some("Example: 4,7".to_string()),
            }),
        }
    }
}

/// Parse a comma-separated list of integers.
pub(crate) fn parse_ints(s: &str) -> Result<Vec<i32>> {
    s.split(',')
        .map(|part| {
            part.trim().parse::<i32>().map_err(|_| CanvasError::Parse {
                message: format!("'{}' is not an integer", part.trim()),
                help: None,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!("3,-4".parse::<Point>().unwrap(), Point { x: 3, y: -4 });
        assert_eq!(" 1 , 2 ".parse::<Point>().unwrap(), Point { x: 1, y: 2 });
        assert!("1".parse::<Point>().is_err());
        assert!("1,2,3".parse::<Point>().is_err());
        assert!("a,b".parse::<Point>().is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
