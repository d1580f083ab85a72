//! `pxcanvas composite` - flatten layer images into one PNG.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;

use super::Point;
use crate::error::{CanvasError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{load_canvas, write_rgba};
use crate::stack::LayerStack;
use crate::types::BlendMode;

/// Flatten layer images into one PNG
#[derive(Args, Debug)]
pub struct CompositeArgs {
    /// Layer images, front first, as PATH or PATH:MODE (mode: over, add)
    #[arg(required = true)]
    pub layers: Vec<LayerSpec>,

    /// Output PNG file
    #[arg(long, short)]
    pub output: PathBuf,

    /// Pixel to mark as the cursor, as X,Y
    #[arg(long)]
    pub highlight: Option<Point>,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "1")]
    pub scale: u32,
}

/// A layer image and the mode it blends with.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSpec {
    pub path: PathBuf,
    pub mode: BlendMode,
}

impl FromStr for LayerSpec {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self> {
        // A trailing `:over`/`:add` selects the mode; anything else is part of the path.
        if let Some((path, mode)) = s.rsplit_once(':') {
            if let Ok(mode) = mode.parse::<BlendMode>() {
                if path.is_empty() {
                    return Err(CanvasError::Parse {
                        message: format!("Layer '{}' has no path", s),
                        help: Some("Use PATH or PATH:MODE".to_string()),
                    });
                }
                return Ok(Self {
                    path: PathBuf::from(path),
                    mode,
                });
            }
        }

        Ok(Self {
            path: PathBuf::from(s),
            mode: BlendMode::default(),
        })
    }
}

pub fn run(args: CompositeArgs, printer: &Printer) -> Result<()> {
    let mut stack: Option<LayerStack> = None;

    for spec in &args.layers {
        let canvas = load_canvas(&spec.path)?;
        let name = display_path(&spec.path);
        let stack = stack.get_or_insert_with(|| LayerStack::new(canvas.width(), canvas.height()));

        printer.info(
            "Loading",
            &format!("{} ({}x{}, {})", name, canvas.width(), canvas.height(), spec.mode),
        );
        stack.insert_canvas(name, canvas, spec.mode)?;
    }

    let Some(stack) = stack else {
        return Ok(());
    };

    let highlight = args
        .highlight
        .and_then(|p| Some((u32::try_from(p.x).ok()?, u32::try_from(p.y).ok()?)));

    let (width, height) = stack.size();
    let rgba = stack.render(highlight)?;
    write_rgba(&rgba, width, height, &args.output, args.scale)?;

    printer.success(
        "Composited",
        &format!(
            "{} into {}",
            plural(stack.len(), "layer", "layers"),
            printer.cyan(&display_path(&args.output))
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::render::write_canvas;
    use crate::types::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_layer_spec_parsing() {
        let spec: LayerSpec = "art/ink.png:add".parse().unwrap();
        assert_eq!(spec.path, PathBuf::from("art/ink.png"));
        assert_eq!(spec.mode, BlendMode::Add);

        let spec: LayerSpec = "paper.png".parse().unwrap();
        assert_eq!(spec.mode, BlendMode::Over);

        // A colon that is not a mode stays in the path.
        let spec: LayerSpec = "C:/art/paper.png".parse().unwrap();
        assert_eq!(spec.path, PathBuf::from("C:/art/paper.png"));

        assert!(":over".parse::<LayerSpec>().is_err());
    }

    #[test]
    fn test_run_composites_files() {
        let dir = tempdir().unwrap();
        let front = dir.path().join("front.png");
        let back = dir.path().join("back.png");
        let output = dir.path().join("out.png");

        let mut canvas = Canvas::new(2, 1);
        canvas.set_pixel(0, 0, Colour::BLACK);
        write_canvas(&canvas, &front, 1).unwrap();

        let mut canvas = Canvas::new(2, 1);
        canvas.fill(0, 0, Colour::WHITE);
        write_canvas(&canvas, &back, 1).unwrap();

        let args = CompositeArgs {
            layers: vec![
                LayerSpec { path: front, mode: BlendMode::Over },
                LayerSpec { path: back, mode: BlendMode::Over },
            ],
            output: output.clone(),
            highlight: None,
            scale: 1,
        };
        run(args, &Printer::plain()).unwrap();

        let result = load_canvas(&output).unwrap();
        assert_eq!(result.get_pixel(0, 0), Some(Colour::BLACK));
        assert_eq!(result.get_pixel(1, 0), Some(Colour::WHITE));
    }

    #[test]
    fn test_run_rejects_mismatched_layers() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        write_canvas(&Canvas::new(2, 2), &a, 1).unwrap();
        write_canvas(&Canvas::new(3, 2), &b, 1).unwrap();

        let args = CompositeArgs {
            layers: vec![
                LayerSpec { path: a, mode: BlendMode::Over },
                LayerSpec { path: b, mode: BlendMode::Add },
            ],
            output: dir.path().join("out.png"),
            highlight: None,
            scale: 1,
        };
        assert!(run(args, &Printer::plain()).is_err());
    }
}
