use std::collections::BTreeMap;

use brick_core::{Grid, Point, BRICK_PARTS, EMPTY_CELL};
use serde::{Deserialize, Serialize};

/// Something wrong with a single brick id found by [`audit_tiling`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditViolation {
    /// The id covers a number of cells other than two.
    WrongPartCount {
        /// Offending id.
        id: u32,
        /// Cells carrying the id.
        cells: Vec<Point>,
    },
    /// The id covers two cells that do not share an edge.
    NotAdjacent {
        /// Offending id.
        id: u32,
        /// Cells carrying the id.
        cells: Vec<Point>,
    },
    /// Cells left unfilled.
    Unfilled {
        /// Positions holding the empty value.
        cells: Vec<Point>,
    },
}

/// Result of rescanning a grid independently of the ingestion path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TilingAudit {
    /// Number of ids that form a legal domino.
    pub bricks: usize,
    /// Every problem found, ordered by id.
    pub violations: Vec<AuditViolation>,
}

impl TilingAudit {
    /// Whether the grid is a complete domino tiling.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Groups the cells of a grid by brick id, skipping unfilled cells.
pub fn brick_cells(grid: &Grid) -> BTreeMap<u32, Vec<Point>> {
    let mut cells: BTreeMap<u32, Vec<Point>> = BTreeMap::new();
    for (row, values) in grid.iter().enumerate() {
        for (col, id) in values.iter().copied().enumerate() {
            if id != EMPTY_CELL {
                cells.entry(id).or_default().push(Point::new(row, col));
            }
        }
    }
    cells
}

/// Checks that every id of `grid` covers exactly two adjacent cells.
pub fn audit_tiling(grid: &Grid) -> TilingAudit {
    let mut audit = TilingAudit::default();

    let unfilled: Vec<Point> = grid
        .iter()
        .enumerate()
        .flat_map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .filter(|(_, id)| **id == EMPTY_CELL)
                .map(move |(col, _)| Point::new(row, col))
        })
        .collect();
    if !unfilled.is_empty() {
        audit
            .violations
            .push(AuditViolation::Unfilled { cells: unfilled });
    }

    for (id, cells) in brick_cells(grid) {
        let domino = matches!(cells.as_slice(), [first, second] if first.is_adjacent(second));
        if domino {
            audit.bricks += 1;
        } else if cells.len() == BRICK_PARTS {
            audit.violations.push(AuditViolation::NotAdjacent { id, cells });
        } else {
            audit
                .violations
                .push(AuditViolation::WrongPartCount { id, cells });
        }
    }

    audit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_mixed_orientation_tiling() {
        let grid = vec![vec![1, 2, 2, 3], vec![1, 4, 4, 3]];
        let audit = audit_tiling(&grid);
        assert!(audit.is_valid());
        assert_eq!(audit.bricks, 4);
    }

    #[test]
    fn reports_every_kind_of_violation() {
        let grid = vec![vec![1, 2, 1, 0], vec![3, 3, 3, 0]];
        let audit = audit_tiling(&grid);
        assert!(!audit.is_valid());
        assert_eq!(audit.bricks, 0);
        assert_eq!(
            audit.violations,
            vec![
                AuditViolation::Unfilled {
                    cells: vec![Point::new(0, 3), Point::new(1, 3)],
                },
                AuditViolation::NotAdjacent {
                    id: 1,
                    cells: vec![Point::new(0, 0), Point::new(0, 2)],
                },
                AuditViolation::WrongPartCount {
                    id: 2,
                    cells: vec![Point::new(0, 1)],
                },
                AuditViolation::WrongPartCount {
                    id: 3,
                    cells: vec![Point::new(1, 0), Point::new(1, 1), Point::new(1, 2)],
                },
            ]
        );
    }
}
