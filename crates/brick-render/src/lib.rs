#![deny(missing_docs)]

//! Text diagrams of brick layers.
//!
//! Each cell of an `R × C` grid is drawn inside a frame of border slots, giving
//! a `(2R+1) × (2C+1)` layout. Border slots between two cells of the same brick
//! are left open so every brick reads as a single outlined block.

use brick_core::{Grid, EMPTY_CELL};
use serde::{Deserialize, Serialize};

/// Symbols used when drawing a layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Symbol for frames, corners and seams between different bricks.
    #[serde(default = "default_edge")]
    pub edge: char,
    /// Symbol for the slot between the two halves of one brick.
    #[serde(default = "default_joint")]
    pub joint: char,
}

fn default_edge() -> char {
    '*'
}

fn default_joint() -> char {
    ' '
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            edge: default_edge(),
            joint: default_joint(),
        }
    }
}

/// Draws `grid` as a framed diagram, one line per layout row, without a trailing newline.
///
/// Ids are right-aligned to the widest id so columns line up; cells holding
/// `0` are drawn blank. An empty grid renders as an empty string.
pub fn render_wall(grid: &Grid, options: &RenderOptions) -> String {
    let rows = grid.len();
    let columns = grid.first().map_or(0, Vec::len);
    if rows == 0 || columns == 0 {
        return String::new();
    }
    let width = grid
        .iter()
        .flatten()
        .filter(|id| **id != EMPTY_CELL)
        .map(|id| id.to_string().len())
        .max()
        .unwrap_or(1);

    let cell = |row: usize, col: usize| -> u32 {
        grid.get(row)
            .and_then(|values| values.get(col))
            .copied()
            .unwrap_or(EMPTY_CELL)
    };
    let same_brick = |a: u32, b: u32| a != EMPTY_CELL && a == b;

    let mut lines = Vec::with_capacity(2 * rows + 1);
    for layout_row in 0..=2 * rows {
        let mut line = String::new();
        for layout_col in 0..=2 * columns {
            let row_slot = layout_row % 2 == 1;
            let col_slot = layout_col % 2 == 1;
            let (row, col) = (layout_row / 2, layout_col / 2);
            match (row_slot, col_slot) {
                (true, true) => {
                    let id = cell(row, col);
                    if id == EMPTY_CELL {
                        line.push_str(&" ".repeat(width));
                    } else {
                        line.push_str(&format!("{id:>width$}"));
                    }
                }
                // Vertical border between (row, col - 1) and (row, col).
                (true, false) => {
                    let open = col > 0 && col < columns && same_brick(cell(row, col - 1), cell(row, col));
                    line.push(if open { options.joint } else { options.edge });
                }
                // Horizontal border between (row - 1, col) and (row, col).
                (false, true) => {
                    let open = row > 0 && row < rows && same_brick(cell(row - 1, col), cell(row, col));
                    let symbol = if open { options.joint } else { options.edge };
                    line.extend(std::iter::repeat(symbol).take(width));
                }
                (false, false) => line.push(options.edge),
            }
        }
        lines.push(line);
    }
    lines.join("\n")
}
