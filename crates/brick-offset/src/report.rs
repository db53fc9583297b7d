use std::collections::BTreeSet;

use brick_core::errors::{BrickError, ErrorInfo};
use brick_core::{Grid, Point};
use brick_layer::brick_cells;

use crate::builder::OffsetLayer;

/// Ids of target bricks that cover exactly the same two cells as some source brick.
///
/// An empty result means no joint of the new course lines up with a brick of
/// the old one.
pub fn coinciding_bricks(source: &Grid, target: &Grid) -> Vec<u32> {
    let below: BTreeSet<Vec<Point>> = brick_cells(source).into_values().collect();
    brick_cells(target)
        .into_iter()
        .filter(|(_, cells)| below.contains(cells))
        .map(|(id, _)| id)
        .collect()
}

/// Serializes an offset layer to pretty JSON.
pub fn offset_to_json(offset: &OffsetLayer) -> Result<String, BrickError> {
    serde_json::to_string_pretty(offset)
        .map_err(|err| BrickError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores an offset layer from JSON.
pub fn offset_from_json(json: &str) -> Result<OffsetLayer, BrickError> {
    serde_json::from_str(json)
        .map_err(|err| BrickError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_courses_coincide_everywhere() {
        let grid = vec![vec![1, 1, 2, 2], vec![3, 3, 4, 4]];
        assert_eq!(coinciding_bricks(&grid, &grid), vec![1, 2, 3, 4]);
    }

    #[test]
    fn relabelled_brick_still_coincides() {
        let source = vec![vec![1, 1, 2, 2], vec![3, 3, 4, 4]];
        let target = vec![vec![2, 1, 1, 4], vec![2, 3, 3, 4]];
        assert!(coinciding_bricks(&source, &target).is_empty());

        let target = vec![vec![5, 5, 6, 7], vec![8, 8, 6, 7]];
        assert_eq!(coinciding_bricks(&source, &target), vec![5, 8]);
    }
}
