use serde::{Deserialize, Serialize};

/// Smallest accepted value for either layer dimension.
pub const MIN_LAYER_SIZE: usize = 2;

/// Exclusive upper bound for either layer dimension.
pub const MAX_LAYER_SIZE: usize = 100;

/// Number of cells covered by one brick.
pub const BRICK_PARTS: usize = 2;

/// Smallest valid brick id. `0` is reserved for unfilled cells.
pub const MIN_BRICK_ID: u32 = 1;

/// Cell value marking a slot the offset builder could not fill.
pub const EMPTY_CELL: u32 = 0;

/// Row-major grid of brick ids.
pub type Grid = Vec<Vec<u32>>;

/// Size of a layer: `rows` is the vertical axis, `columns` the horizontal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    /// Number of rows in the layer.
    pub rows: usize,
    /// Number of cells per row.
    pub columns: usize,
}

impl Dimensions {
    /// Creates a dimension pair without validating it.
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Number of bricks required to tile the layer.
    pub const fn target_brick_count(&self) -> usize {
        self.rows * self.columns / BRICK_PARTS
    }

    /// Returns a grid of this size with every cell unfilled.
    pub fn empty_grid(&self) -> Grid {
        vec![vec![EMPTY_CELL; self.columns]; self.rows]
    }
}
