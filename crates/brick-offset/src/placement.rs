use brick_core::{Grid, Point, EMPTY_CELL};
use serde::{Deserialize, Serialize};

/// The four ways a source brick can be laid into the target course.
///
/// The first word names the brick's orientation in the source, the second its
/// orientation in the target. Rules are tried in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// Horizontal in the source, horizontal in the target.
    LeftToLeft,
    /// Vertical in the source, horizontal in the target.
    UpToLeft,
    /// Horizontal in the source, vertical in the target.
    LeftToUp,
    /// Vertical in the source, vertical in the target.
    UpToUp,
}

impl Placement {
    /// Preference order used by the builder.
    pub const ORDER: [Placement; 4] = [
        Placement::LeftToLeft,
        Placement::UpToLeft,
        Placement::LeftToUp,
        Placement::UpToUp,
    ];

    /// Source cells consumed by the placement.
    pub const fn source_step(&self) -> usize {
        match self {
            Placement::LeftToLeft | Placement::LeftToUp => 2,
            Placement::UpToLeft | Placement::UpToUp => 1,
        }
    }

    /// How far the target cursor moves back after the placement, as `(rows, columns)`.
    ///
    /// Only [`Placement::UpToUp`] climbs a row and keeps its column; every
    /// other rule walks left along the current row.
    pub const fn target_move(&self) -> (usize, usize) {
        match self {
            Placement::LeftToLeft | Placement::UpToLeft => (0, 2),
            Placement::LeftToUp => (0, 1),
            Placement::UpToUp => (1, 0),
        }
    }

    /// Whether the brick lies along a row of the target.
    pub const fn is_horizontal_in_target(&self) -> bool {
        matches!(self, Placement::LeftToLeft | Placement::UpToLeft)
    }

    /// Checks the rule at the given source and target cells.
    ///
    /// A rule holds when the source brick has the required orientation and the
    /// target pair is free and straddles a seam of the source course, so the
    /// new brick never lies exactly on an old one.
    pub fn applies(&self, source: &Grid, target: &Grid, src: Point, tgt: Point) -> bool {
        let source_shape = match self {
            Placement::LeftToLeft | Placement::LeftToUp => source_is_horizontal(source, src),
            Placement::UpToLeft | Placement::UpToUp => source_is_vertical(source, src),
        };
        let target_free = if self.is_horizontal_in_target() {
            free_left_pair(source, target, tgt)
        } else {
            free_upper_pair(source, target, tgt)
        };
        target_free && source_shape
    }

    /// The partner cell the placement writes next to `tgt`.
    pub fn partner(&self, tgt: Point) -> Option<Point> {
        if self.is_horizontal_in_target() {
            tgt.col.checked_sub(1).map(|col| Point::new(tgt.row, col))
        } else {
            tgt.row.checked_sub(1).map(|row| Point::new(row, tgt.col))
        }
    }
}

/// Picks the first rule of [`Placement::ORDER`] that holds.
pub fn select_placement(source: &Grid, target: &Grid, src: Point, tgt: Point) -> Option<Placement> {
    Placement::ORDER
        .into_iter()
        .find(|placement| placement.applies(source, target, src, tgt))
}

fn cell(grid: &Grid, at: Point) -> Option<u32> {
    grid.get(at.row).and_then(|row| row.get(at.col)).copied()
}

fn source_is_horizontal(source: &Grid, src: Point) -> bool {
    src.col > 0 && cell(source, src) == cell(source, Point::new(src.row, src.col - 1))
}

fn source_is_vertical(source: &Grid, src: Point) -> bool {
    src.row > 0 && cell(source, src) == cell(source, Point::new(src.row - 1, src.col))
}

fn free_left_pair(source: &Grid, target: &Grid, tgt: Point) -> bool {
    if tgt.col == 0 {
        return false;
    }
    let left = Point::new(tgt.row, tgt.col - 1);
    cell(source, tgt) != cell(source, left) && cell(target, left) == Some(EMPTY_CELL)
}

fn free_upper_pair(source: &Grid, target: &Grid, tgt: Point) -> bool {
    if tgt.row == 0 {
        return false;
    }
    let up = Point::new(tgt.row - 1, tgt.col);
    cell(source, tgt) != cell(source, up) && cell(target, up) == Some(EMPTY_CELL)
}
