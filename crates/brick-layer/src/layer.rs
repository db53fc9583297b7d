use brick_core::{Dimensions, Grid};
use serde::Serialize;

/// One course of the wall: its size and the rows entered so far.
///
/// Layers are only built through a session; files are read into
/// [`crate::LayerFile`] and replayed row by row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layer {
    dimensions: Dimensions,
    state: Grid,
}

impl Layer {
    /// Creates an empty layer of the given size.
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            state: Vec::with_capacity(dimensions.rows),
        }
    }

    /// Returns the layer size.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Number of rows the layer holds once complete.
    pub fn rows(&self) -> usize {
        self.dimensions.rows
    }

    /// Number of ids per row.
    pub fn columns(&self) -> usize {
        self.dimensions.columns
    }

    /// Number of bricks the finished layer contains.
    pub fn target_brick_count(&self) -> usize {
        self.dimensions.target_brick_count()
    }

    /// Rows accepted so far, top to bottom.
    pub fn state(&self) -> &Grid {
        &self.state
    }

    /// Number of rows accepted so far.
    pub fn filled_rows(&self) -> usize {
        self.state.len()
    }

    /// Whether every row has been entered.
    pub fn is_full(&self) -> bool {
        self.state.len() == self.dimensions.rows
    }

    pub(crate) fn push_row(&mut self, row: Vec<u32>) {
        self.state.push(row);
    }
}
