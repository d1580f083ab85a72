//! `pxcanvas draw` - apply drawing operations to an image.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;

use super::parse_ints;
use crate::canvas::Canvas;
use crate::error::{CanvasError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{load_canvas, write_canvas};
use crate::types::Colour;

/// Draw points, lines and fills onto an image
#[derive(Args, Debug)]
pub struct DrawArgs {
    /// Image to draw on, or new:WxH for a blank canvas
    pub input: Source,

    /// Output PNG file
    #[arg(long, short)]
    pub output: PathBuf,

    /// Drawing colour (#RGB, #RGBA, #RRGGBB or #RRGGBBAA)
    #[arg(long, short, default_value = "#000000")]
    pub colour: Colour,

    /// Operations applied in order: point:X,Y  line:X0,Y0,X1,Y1  fill:X,Y
    #[arg(required = true)]
    pub ops: Vec<DrawOp>,
}

/// Where the canvas to draw on comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    File(PathBuf),
    Blank { width: u32, height: u32 },
}

impl FromStr for Source {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self> {
        let Some(size) = s.strip_prefix("new:") else {
            return Ok(Self::File(PathBuf::from(s)));
        };

        let parsed = size
            .split_once(|c: char| c == 'x' || c == 'X')
            .and_then(|(w, h)| Some((w.trim().parse().ok()?, h.trim().parse().ok()?)));

        match parsed {
            Some((width, height)) => Ok(Self::Blank { width, height }),
            None => Err(CanvasError::Parse {
                message: format!("Invalid canvas size: {}", size),
                help: Some("Example: new:16x16".to_string()),
            }),
        }
    }
}

impl Source {
    fn open(&self) -> Result<Canvas> {
        match self {
            Self::File(path) => load_canvas(path),
            Self::Blank { width, height } => Ok(Canvas::new(*width, *height)),
        }
    }
}

/// A single drawing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    Point { x: i32, y: i32 },
    Line { x0: i32, y0: i32, x1: i32, y1: i32 },
    Fill { x: i32, y: i32 },
}

impl DrawOp {
    pub fn apply(self, canvas: &mut Canvas, colour: Colour) {
        match self {
            Self::Point { x, y } => canvas.set_pixel(x, y, colour),
            Self::Line { x0, y0, x1, y1 } => canvas.draw_line(x0, y0, x1, y1, colour),
            Self::Fill { x, y } => canvas.fill(x, y, colour),
        }
    }
}

impl FromStr for DrawOp {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, coords) = s.split_once(':').ok_or_else(|| CanvasError::Parse {
            message: format!("Invalid operation: {}", s),
            help: Some("Use point:X,Y, line:X0,Y0,X1,Y1 or fill:X,Y".to_string()),
        })?;
        let coords = parse_ints(coords)?;

        match (kind.trim(), coords.as_slice()) {
            ("point", &[x, y]) => Ok(Self::Point { x, y }),
            ("line", &[x0, y0, x1, y1]) => Ok(Self::Line { x0, y0, x1, y1 }),
            ("fill", &[x, y]) => Ok(Self::Fill { x, y }),
            _ => Err(CanvasError::Parse {
                message: format!("Invalid operation: {}", s),
                help: Some("Use point:X,Y, line:X0,Y0,X1,Y1 or fill:X,Y".to_string()),
            }),
        }
    }
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point { x, y } => write!(f, "point:{},{}", x, y),
            Self::Line { x0, y0, x1, y1 } => write!(f, "line:{},{},{},{}", x0, y0, x1, y1),
            Self::Fill { x, y } => write!(f, "fill:{},{}", x, y),
        }
    }
}

pub fn run(args: DrawArgs, printer: &Printer) -> Result<()> {
    let mut canvas = args.input.open()?;

    for op in &args.ops {
        printer.info("Drawing", &format!("{} {}", op, args.colour));
        op.apply(&mut canvas, args.colour);
    }

    write_canvas(&canvas, &args.output, 1)?;

    printer.success(
        "Wrote",
        &format!(
            "{} with {}",
            display_path(&args.output),
            plural(args.ops.len(), "operation", "operations")
        ),
    );

    Ok(())
}
