//! `pxcanvas resize` - resize an image file.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::canvas::ResizeMode;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::render::{load_canvas, write_canvas};

/// Resize an image, cropping or resampling its content
#[derive(Args, Debug)]
pub struct ResizeArgs {
    /// Image to resize
    pub input: PathBuf,

    /// Output PNG file
    #[arg(long, short)]
    pub output: PathBuf,

    /// New width in pixels
    #[arg(long)]
    pub width: u32,

    /// New height in pixels
    #[arg(long)]
    pub height: u32,

    /// How existing pixels are carried over
    #[arg(long, value_enum, default_value_t = ModeArg::Crop)]
    pub mode: ModeArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Keep pixels in place, crop or pad with transparency
    Crop,
    /// Scale with nearest-neighbour sampling
    Nearest,
    /// Scale with bilinear sampling (output is flattened onto white)
    Smooth,
}

impl From<ModeArg> for ResizeMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Crop => Self::Crop,
            ModeArg::Nearest => Self::Nearest,
            ModeArg::Smooth => Self::Smooth,
        }
    }
}

pub fn run(args: ResizeArgs, printer: &Printer) -> Result<()> {
    let mut canvas = load_canvas(&args.input)?;
    let (old_width, old_height) = canvas.size();

    canvas.resize(args.width, args.height, args.mode.into());
    write_canvas(&canvas, &args.output, 1)?;

    printer.success(
        "Resized",
        &format!(
            "{} {}x{} -> {}x{} ({:?})",
            display_path(&args.input),
            old_width,
            old_height,
            args.width,
            args.height,
            args.mode
        ),
    );

    Ok(())
}
