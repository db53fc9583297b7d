use brick_core::errors::{BrickError, ErrorInfo};
use brick_core::{Dimensions, Grid, EMPTY_CELL, MIN_BRICK_ID};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::layer::Layer;
use crate::serialization::layer_to_text;
use crate::session::LayerSession;

/// Generates a random legal layer from a seed.
///
/// The grid is cut into 2×2 blocks, each filled with two horizontal or two
/// vertical bricks, and the ids are shuffled. The result is replayed through a
/// session so it carries a tracker like any user supplied layer.
pub fn gen_block_layer(dims: Dimensions, seed: u64) -> Result<Layer, BrickError> {
    require_even(dims)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let shape = block_shape(dims, &mut rng);
    let grid = relabel(&shape, dims, &mut rng);
    replay(&grid, dims)
}

/// Same as [`gen_block_layer`] but rendered in the text layer format.
pub fn gen_block_layer_text(dims: Dimensions, seed: u64) -> Result<String, BrickError> {
    gen_block_layer(dims, seed).map(|layer| layer_to_text(&layer))
}

/// Generates a random legal layer by flipping 2×2 squares of a running tiling.
///
/// Starts from rows of horizontal bricks and makes `flips` attempts, each
/// picking a random 2×2 window; a window covered by two parallel bricks is
/// turned a quarter. Flips connect every domino tiling of a rectangle, so
/// bricks end up crossing any block boundary. Ids are shuffled afterwards.
pub fn gen_flip_layer(dims: Dimensions, seed: u64, flips: usize) -> Result<Layer, BrickError> {
    require_even(dims)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut shape = horizontal_shape(dims);
    for _ in 0..flips {
        let row = rng.gen_range(0..dims.rows - 1);
        let col = rng.gen_range(0..dims.columns - 1);
        flip_window(&mut shape, row, col);
    }
    let grid = relabel(&shape, dims, &mut rng);
    replay(&grid, dims)
}

fn require_even(dims: Dimensions) -> Result<(), BrickError> {
    if dims.rows % 2 != 0 || dims.columns % 2 != 0 || dims.rows == 0 || dims.columns == 0 {
        return Err(BrickError::DimensionFormat(
            ErrorInfo::new("dimension-format", "generated layers need even, non-zero sides")
                .with_context("rows", dims.rows)
                .with_context("columns", dims.columns),
        ));
    }
    Ok(())
}

fn replay(grid: &Grid, dims: Dimensions) -> Result<Layer, BrickError> {
    let mut session = LayerSession::new(dims);
    for row in grid {
        let line = row
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        session = session.ingest_row(&line)?;
    }
    session.into_layer().ok_or_else(|| {
        BrickError::Serde(ErrorInfo::new(
            "generator-incomplete",
            "generated grid did not fill the layer",
        ))
    })
}

fn block_shape(dims: Dimensions, rng: &mut StdRng) -> Grid {
    let mut grid = dims.empty_grid();
    let mut next = MIN_BRICK_ID;
    for top in (0..dims.rows).step_by(2) {
        for left in (0..dims.columns).step_by(2) {
            let (a, b) = (next, next + 1);
            next += 2;
            if rng.gen_bool(0.5) {
                grid[top][left] = a;
                grid[top][left + 1] = a;
                grid[top + 1][left] = b;
                grid[top + 1][left + 1] = b;
            } else {
                grid[top][left] = a;
                grid[top + 1][left] = a;
                grid[top][left + 1] = b;
                grid[top + 1][left + 1] = b;
            }
        }
    }
    grid
}

fn horizontal_shape(dims: Dimensions) -> Grid {
    let per_row = dims.columns / 2;
    (0..dims.rows)
        .map(|row| {
            (0..dims.columns)
                .map(|col| MIN_BRICK_ID + (row * per_row + col / 2) as u32)
                .collect()
        })
        .collect()
}

/// Turns the two bricks covering the window at `(row, col)` if they are parallel.
fn flip_window(grid: &mut Grid, row: usize, col: usize) -> bool {
    let (a, b) = (grid[row][col], grid[row][col + 1]);
    let (c, d) = (grid[row + 1][col], grid[row + 1][col + 1]);
    if a == b && c == d && a != c {
        grid[row + 1][col] = a;
        grid[row][col + 1] = c;
        grid[row + 1][col + 1] = c;
        true
    } else if a == c && b == d && a != b {
        grid[row][col + 1] = a;
        grid[row + 1][col] = b;
        grid[row + 1][col + 1] = b;
        true
    } else {
        false
    }
}

fn relabel(shape: &Grid, dims: Dimensions, rng: &mut StdRng) -> Grid {
    let count = dims.target_brick_count() as u32;
    let mut labels: Vec<u32> = (MIN_BRICK_ID..=count).collect();
    labels.shuffle(rng);
    shape
        .iter()
        .map(|row| {
            row.iter()
                .map(|id| match id.checked_sub(MIN_BRICK_ID) {
                    Some(slot) => labels[slot as usize],
                    None => EMPTY_CELL,
                })
                .collect()
        })
        .collect()
}
