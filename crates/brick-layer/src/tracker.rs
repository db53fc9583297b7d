use brick_core::{BrickId, Point, BRICK_PARTS};

/// How a new part relates to the single part a brick already has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// The new part sits directly below the existing one.
    Vertical,
    /// The new part sits directly right of the existing one.
    Horizontal,
}

/// A brick under construction: its id and the cells assigned to it so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brick {
    id: BrickId,
    parts: Vec<Point>,
}

impl Brick {
    fn new(id: BrickId, first: Point) -> Self {
        let mut parts = Vec::with_capacity(BRICK_PARTS);
        parts.push(first);
        Self { id, parts }
    }

    /// Returns the id of the brick.
    pub fn id(&self) -> BrickId {
        self.id
    }

    /// Returns the cells recorded for the brick, in insertion order.
    pub fn parts(&self) -> &[Point] {
        &self.parts
    }

    /// Whether both parts have been recorded.
    pub fn is_complete(&self) -> bool {
        self.parts.len() == BRICK_PARTS
    }

    /// Whether the recorded parts form a legal domino.
    pub fn is_domino(&self) -> bool {
        match self.parts.as_slice() {
            [first, second] => first.is_adjacent(second),
            _ => false,
        }
    }

    /// Classifies `next` against the single recorded part.
    ///
    /// Ingestion runs top to bottom and left to right, so a legal second part is
    /// always below or to the right of the first one.
    pub fn continuation(&self, next: Point) -> Option<Continuation> {
        let [existing] = self.parts.as_slice() else {
            return None;
        };
        if existing.col == next.col && existing.row + 1 == next.row {
            Some(Continuation::Vertical)
        } else if existing.row == next.row && existing.col + 1 == next.col {
            Some(Continuation::Horizontal)
        } else {
            None
        }
    }
}

/// Id-indexed table of every brick seen while ingesting one layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrickTracker {
    slots: Vec<Option<Brick>>,
}

impl BrickTracker {
    /// Creates an empty tracker able to hold ids `1..=capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Returns the brick recorded for `id`, if any.
    pub fn get(&self, id: BrickId) -> Option<&Brick> {
        id.index()
            .and_then(|slot| self.slots.get(slot))
            .and_then(Option::as_ref)
    }

    /// Number of parts recorded for `id`.
    pub fn part_count(&self, id: BrickId) -> usize {
        self.get(id).map_or(0, |brick| brick.parts.len())
    }

    /// Records a part for `id`, creating the brick on first sight.
    ///
    /// Callers validate the position first; this only refuses ids outside the
    /// table and bricks that are already complete.
    pub(crate) fn record(&mut self, id: BrickId, part: Point) -> bool {
        let Some(slot) = id.index().and_then(|slot| self.slots.get_mut(slot)) else {
            return false;
        };
        match slot {
            Some(brick) if brick.is_complete() => false,
            Some(brick) => {
                brick.parts.push(part);
                true
            }
            None => {
                *slot = Some(Brick::new(id, part));
                true
            }
        }
    }

    /// Iterates over every brick created so far, ordered by id.
    pub fn bricks(&self) -> impl Iterator<Item = &Brick> + '_ {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Ids of bricks that still miss a part.
    pub fn incomplete_ids(&self) -> Vec<BrickId> {
        self.bricks()
            .filter(|brick| !brick.is_complete())
            .map(Brick::id)
            .collect()
    }

    /// Number of bricks that have both parts.
    pub fn complete_count(&self) -> usize {
        self.bricks().filter(|brick| brick.is_complete()).count()
    }
}
