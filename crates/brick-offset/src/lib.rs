#![deny(missing_docs)]

//! Greedy construction of a second brick course staggered against a first one.
//!
//! [`build_offset_layer`] walks the source layer and an empty target grid from
//! the last cell to the first and drops each source brick with the first
//! [`Placement`] rule that keeps the new brick off the old joints. The walk is
//! a single greedy pass: it may leave cells unfilled, which is reported through
//! [`OffsetLayer::solved`] rather than as an error.

mod builder;
mod placement;
mod report;

pub use builder::{build_offset_grid, build_offset_layer, BuildStats, OffsetLayer};
pub use placement::{select_placement, Placement};
pub use report::{coinciding_bricks, offset_from_json, offset_to_json};
