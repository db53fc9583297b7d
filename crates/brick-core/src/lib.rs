#![deny(missing_docs)]
#![doc = "Core data types and errors for the brickwork layer engine."]

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;
mod types;

pub use errors::{BrickError, ErrorInfo};
pub use types::{
    Dimensions, Grid, BRICK_PARTS, EMPTY_CELL, MAX_LAYER_SIZE, MIN_BRICK_ID, MIN_LAYER_SIZE,
};

/// Identifier of a brick within a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BrickId(u32);

impl BrickId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u32 {
        self.0
    }

    /// Zero based slot of the identifier in id-indexed tables, `None` for the
    /// reserved empty value.
    pub fn index(&self) -> Option<usize> {
        self.0.checked_sub(MIN_BRICK_ID).map(|slot| slot as usize)
    }
}

impl fmt::Display for BrickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cell coordinate: `row` is the vertical index, `col` the horizontal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Point {
    /// Creates a new coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the two points share an edge.
    pub fn is_adjacent(&self, other: &Point) -> bool {
        (self.row == other.row && self.col.abs_diff(other.col) == 1)
            || (self.col == other.col && self.row.abs_diff(other.row) == 1)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
