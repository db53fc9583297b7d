use std::collections::BTreeMap;

use brick_core::{Dimensions, Grid, Point, EMPTY_CELL, MIN_BRICK_ID};
use brick_layer::Layer;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::placement::{select_placement, Placement};

/// Cells skipped on both walks when no rule applies.
const FALLBACK_STEP: usize = 2;

/// Counters describing how the target course was filled.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildStats {
    /// Number of bricks laid per rule.
    pub placements: BTreeMap<Placement, usize>,
    /// Number of times no rule applied and both walks skipped ahead.
    pub fallbacks: usize,
    /// Number of source cells skipped because their brick was already laid.
    pub already_placed: usize,
    /// Number of loop iterations.
    pub steps: usize,
}

impl BuildStats {
    fn record(&mut self, placement: Placement) {
        *self.placements.entry(placement).or_default() += 1;
    }

    /// Total bricks laid by all rules.
    pub fn bricks_placed(&self) -> usize {
        self.placements.values().sum()
    }
}

/// Second course produced by [`build_offset_layer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetLayer {
    /// Size shared with the source layer.
    pub dimensions: Dimensions,
    /// Brick ids of the new course; `0` marks cells no rule could fill.
    pub grid: Grid,
    /// Whether every cell was filled.
    pub solved: bool,
    /// How the grid was filled.
    pub stats: BuildStats,
}

impl OffsetLayer {
    /// Positions left unfilled.
    pub fn unfilled(&self) -> Vec<Point> {
        self.grid
            .iter()
            .enumerate()
            .flat_map(|(row, values)| {
                values
                    .iter()
                    .enumerate()
                    .filter(|(_, id)| **id == EMPTY_CELL)
                    .map(move |(col, _)| Point::new(row, col))
            })
            .collect()
    }
}

/// Walk position that may run off the left edge or above the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    row: isize,
    col: isize,
}

impl Cursor {
    fn last(dims: Dimensions) -> Self {
        Self {
            row: dims.rows as isize - 1,
            col: dims.columns as isize - 1,
        }
    }

    fn exhausted(&self) -> bool {
        self.row < 0
    }

    /// Moves to the end of the previous row once the column ran off the edge.
    fn wrap(&mut self, columns: usize) -> bool {
        if self.col < 0 {
            self.row -= 1;
            self.col = columns as isize - 1;
            true
        } else {
            false
        }
    }

    fn back(&mut self, cells: usize) {
        self.col -= cells as isize;
    }

    fn up(&mut self, rows: usize) {
        self.row -= rows as isize;
    }

    fn point(&self) -> Point {
        Point::new(self.row as usize, self.col as usize)
    }
}

/// Builds a staggered second course over a complete layer.
///
/// The builder never fails: when the greedy walk cannot fill every cell the
/// partial grid is returned with `solved == false`. A layer that still misses
/// rows yields an empty, unsolved grid.
pub fn build_offset_layer(layer: &Layer) -> OffsetLayer {
    build_offset_grid(layer.state(), layer.dimensions())
}

/// Builds a staggered second course over a raw grid of brick ids.
///
/// Both the source and the target are walked from the last cell to the first.
/// At each step the source brick under the source cursor is dropped at the
/// target cursor with the first [`Placement`] rule that holds.
///
/// A `source` whose shape differs from `dims` is not walked at all; the empty
/// target grid comes back unsolved.
pub fn build_offset_grid(source: &Grid, dims: Dimensions) -> OffsetLayer {
    let mut target = dims.empty_grid();
    let mut placed = vec![false; dims.target_brick_count()];
    let mut stats = BuildStats::default();

    if !has_shape(source, dims) {
        warn!(
            rows = dims.rows,
            columns = dims.columns,
            filled = source.len(),
            "source grid does not match its dimensions"
        );
        return OffsetLayer {
            dimensions: dims,
            grid: target,
            solved: false,
            stats,
        };
    }
    let mut src = Cursor::last(dims);
    let mut tgt = Cursor::last(dims);

    while !src.exhausted() && !tgt.exhausted() {
        stats.steps += 1;
        if src.wrap(dims.columns) || tgt.wrap(dims.columns) {
            continue;
        }

        let id = source[src.row as usize][src.col as usize];
        if is_placed(&placed, id) {
            stats.already_placed += 1;
            src.back(1);
            continue;
        }

        let at = tgt.point();
        if target[at.row][at.col] != EMPTY_CELL {
            tgt.back(1);
            continue;
        }

        match select_placement(source, &target, src.point(), at) {
            Some(placement) => {
                if let Some(partner) = placement.partner(at) {
                    target[partner.row][partner.col] = id;
                }
                target[at.row][at.col] = id;
                mark_placed(&mut placed, id);
                stats.record(placement);
                debug!(id, ?placement, row = at.row, col = at.col, "brick laid");
                src.back(placement.source_step());
                let (rows, cols) = placement.target_move();
                tgt.up(rows);
                tgt.back(cols);
            }
            None => {
                stats.fallbacks += 1;
                debug!(id, row = at.row, col = at.col, "no placement applies");
                src.back(FALLBACK_STEP);
                tgt.back(FALLBACK_STEP);
            }
        }
    }

    let solved = target
        .iter()
        .all(|row| row.iter().all(|id| *id != EMPTY_CELL));
    info!(
        rows = dims.rows,
        columns = dims.columns,
        solved,
        bricks = stats.bricks_placed(),
        fallbacks = stats.fallbacks,
        "offset layer built"
    );
    OffsetLayer {
        dimensions: dims,
        grid: target,
        solved,
        stats,
    }
}

fn has_shape(source: &Grid, dims: Dimensions) -> bool {
    dims.rows > 0
        && dims.columns > 0
        && source.len() == dims.rows
        && source.iter().all(|row| row.len() == dims.columns)
}

fn is_placed(placed: &[bool], id: u32) -> bool {
    id.checked_sub(MIN_BRICK_ID)
        .and_then(|slot| placed.get(slot as usize))
        .copied()
        .unwrap_or(false)
}

fn mark_placed(placed: &mut [bool], id: u32) {
    if let Some(slot) = id
        .checked_sub(MIN_BRICK_ID)
        .and_then(|slot| placed.get_mut(slot as usize))
    {
        *slot = true;
    }
}
