//! Ordered, named layers of one size, with a current-layer cursor.
//!
//! Index 0 is the front layer: it is composited on top of everything after
//! it. All layers share the stack's dimensions, which is what lets
//! [`LayerStack::render`] hand them to the compositor without surprises.

use log::debug;

use crate::canvas::{Canvas, ResizeMode};
use crate::error::{CanvasError, Result};
use crate::render::{render_layers, Layer};
use crate::types::{BlendMode, Colour};

/// A single named layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerEntry {
    pub name: String,
    pub mode: BlendMode,
    canvas: Canvas,
}

impl LayerEntry {
    /// The layer's pixels.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Mutable access for drawing. The canvas cannot be swapped for one of a
    /// different size through this handle.
    pub fn canvas_mut(&mut self) -> CanvasMut<'_> {
        CanvasMut(&mut self.canvas)
    }
}

/// Drawing handle to a layer's canvas.
///
/// Derefs to [`Canvas`] for reads; exposes the in-place drawing operations
/// but not resizing, so the stack's size invariant holds.
#[derive(Debug)]
pub struct CanvasMut<'a>(&'a mut Canvas);

impl CanvasMut<'_> {
    /// See [`Canvas::set_pixel`].
    pub fn set_pixel(&mut self, x: i32, y: i32, colour: Colour) {
        self.0.set_pixel(x, y, colour);
    }

    /// See [`Canvas::draw_line`].
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colour: Colour) {
        self.0.draw_line(x0, y0, x1, y1, colour);
    }

    /// See [`Canvas::fill`].
    pub fn fill(&mut self, x: i32, y: i32, colour: Colour) {
        self.0.fill(x, y, colour);
    }

    /// See [`Canvas::clear`].
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl std::ops::Deref for CanvasMut<'_> {
    type Target = Canvas;

    fn deref(&self) -> &Canvas {
        self.0
    }
}

/// The editor's layer list.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerStack {
    width: u32,
    height: u32,
    layers: Vec<LayerEntry>,
    current: usize,
}

impl LayerStack {
    /// Create an empty stack whose layers will be `width x height`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            layers: Vec::new(),
            current: 0,
        }
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the stack has no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &LayerEntry> {
        self.layers.iter()
    }

    /// Append a blank layer at the back, returning its index.
    pub fn push(&mut self, name: impl Into<String>, mode: BlendMode) -> usize {
        let canvas = Canvas::new(self.width, self.height);
        self.append(name.into(), canvas, mode)
    }

    /// Append an existing canvas at the back, returning its index.
    pub fn insert_canvas(
        &mut self,
        name: impl Into<String>,
        canvas: Canvas,
        mode: BlendMode,
    ) -> Result<usize> {
        let name = name.into();
        if canvas.size() != self.size() {
            return Err(CanvasError::Dimension {
                message: format!(
                    "layer '{}' is {}x{} but the stack is {}x{}",
                    name,
                    canvas.width(),
                    canvas.height(),
                    self.width,
                    self.height
                ),
                help: Some("Resize the canvas to the stack size first".to_string()),
            });
        }

        Ok(self.append(name, canvas, mode))
    }

    fn append(&mut self, name: String, canvas: Canvas, mode: BlendMode) -> usize {
        self.layers.push(LayerEntry { name, mode, canvas });
        self.layers.len() - 1
    }

    /// Remove and return a layer. The cursor is clamped to the last layer.
    pub fn remove(&mut self, index: usize) -> Result<LayerEntry> {
        self.check_index(index)?;

        let entry = self.layers.remove(index);
        if self.current >= self.layers.len() {
            self.current = self.layers.len().saturating_sub(1);
        }
        Ok(entry)
    }

    /// Move a layer to `destination`. An out-of-range destination is ignored.
    pub fn move_layer(&mut self, index: usize, destination: usize) -> Result<()> {
        self.check_index(index)?;
        if destination >= self.layers.len() {
            return Ok(());
        }

        let entry = self.layers.remove(index);
        self.layers.insert(destination, entry);
        Ok(())
    }

    /// Make `index` the layer being edited. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.layers.len() {
            self.current = index;
        }
    }

    /// Index of the layer being edited.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The layer being edited, if any.
    pub fn current(&self) -> Option<&LayerEntry> {
        self.layers.get(self.current)
    }

    /// Mutable access to the layer being edited.
    pub fn current_mut(&mut self) -> Option<&mut LayerEntry> {
        self.layers.get_mut(self.current)
    }

    /// Get a layer by index.
    pub fn get(&self, index: usize) -> Option<&LayerEntry> {
        self.layers.get(index)
    }

    /// Get a layer by index for editing.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut LayerEntry> {
        self.layers.get_mut(index)
    }

    /// Rename a layer.
    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        self.check_index(index)?;
        self.layers[index].name = name.into();
        Ok(())
    }

    /// Change how a layer blends.
    pub fn set_mode(&mut self, index: usize, mode: BlendMode) -> Result<()> {
        self.check_index(index)?;
        self.layers[index].mode = mode;
        Ok(())
    }

    /// Resize every layer and the stack itself.
    pub fn resize(&mut self, width: u32, height: u32, mode: ResizeMode) {
        debug!(
            "resizing {} layer(s) to {}x{} ({:?})",
            self.layers.len(),
            width,
            height,
            mode
        );

        for entry in &mut self.layers {
            entry.canvas.resize(width, height, mode);
        }
        self.width = width;
        self.height = height;
    }

    /// Flatten the stack front to back, optionally marking a cursor pixel.
    pub fn render(&self, highlight: Option<(u32, u32)>) -> Result<Vec<u8>> {
        let layers: Vec<Layer<'_>> = self
            .layers
            .iter()
            .map(|entry| Layer::new(&entry.canvas, entry.mode))
            .collect();

        render_layers(self.width, self.height, &layers, highlight)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.layers.len() {
            return Ok(());
        }

        Err(CanvasError::Layer {
            message: format!("no layer at index {} (stack has {})", index, self.layers.len()),
            help: None,
        })
    }
}
