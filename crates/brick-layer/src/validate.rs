use std::sync::LazyLock;

use brick_core::errors::{BrickError, ErrorInfo};
use brick_core::{BrickId, Dimensions, Grid, Point, MAX_LAYER_SIZE, MIN_BRICK_ID, MIN_LAYER_SIZE};
use regex::Regex;

use crate::tracker::BrickTracker;

static DIMENSION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\W*\d+\W+\d+\W*$").expect("dimension pattern compiles"));

static ROW_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\W*\d{1,2}(?:\W+\d{1,2})*\W*$").expect("row pattern compiles")
});

const DIMENSION_TOKENS: usize = 2;

/// Parses a `"rows columns"` line into validated [`Dimensions`].
///
/// Tokens are checked in order, so `"3 200"` reports the odd value before the
/// out of range one.
pub fn parse_dimensions(input: &str) -> Result<Dimensions, BrickError> {
    if !DIMENSION_LINE.is_match(input) {
        return Err(dimension_format(input));
    }
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != DIMENSION_TOKENS {
        return Err(dimension_format(input));
    }

    let mut values = [0usize; DIMENSION_TOKENS];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        let value: usize = token.parse().map_err(|_| dimension_format(input))?;
        if value % 2 == 1 {
            return Err(dimension_format(input));
        }
        if !(MIN_LAYER_SIZE..MAX_LAYER_SIZE).contains(&value) {
            return Err(BrickError::DimensionRange(
                ErrorInfo::new(
                    "dimension-range",
                    format!(
                        "rows and columns must be even numbers from {MIN_LAYER_SIZE} up to, but not including, {MAX_LAYER_SIZE}"
                    ),
                )
                .with_context("value", value)
                .with_context("min", MIN_LAYER_SIZE)
                .with_context("max", MAX_LAYER_SIZE),
            ));
        }
        *slot = value;
    }

    Ok(Dimensions::new(values[0], values[1]))
}

/// Parses a row line and checks its shape and id range against `dims`.
pub fn parse_row(input: &str, dims: Dimensions) -> Result<Vec<u32>, BrickError> {
    if !ROW_LINE.is_match(input) {
        return Err(row_format(dims));
    }
    let values = input
        .split_whitespace()
        .map(|token| token.parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| row_format(dims))?;
    if values.len() != dims.columns {
        return Err(row_format(dims));
    }

    let max = dims.target_brick_count() as u32;
    if let Some((col, value)) = values
        .iter()
        .enumerate()
        .find(|(_, value)| !(MIN_BRICK_ID..=max).contains(*value))
    {
        return Err(BrickError::RowRange(
            row_bounds_info(
                "row-range",
                format!("brick ids must lie between {MIN_BRICK_ID} and {max}"),
                dims,
            )
            .with_context("value", value)
            .with_context("col", col),
        ));
    }

    Ok(values)
}

/// Checks every id of a parsed row against the bricks recorded so far.
///
/// Returns the tracker as it would be after accepting the row; the input
/// tracker is left untouched so a rejected row changes nothing.
pub(crate) fn check_bricks(
    values: &[u32],
    row: usize,
    state: &Grid,
    tracker: &BrickTracker,
) -> Result<BrickTracker, BrickError> {
    let mut staged = tracker.clone();
    let above_row = row.checked_sub(1).and_then(|above| state.get(above));

    for (col, raw) in values.iter().copied().enumerate() {
        let id = BrickId::from_raw(raw);
        let position = Point::new(row, col);

        if let Some(brick) = staged.get(id) {
            if brick.is_complete() {
                return Err(BrickError::BrickFull(
                    position_info(
                        "brick-full",
                        format!("brick {id} already has both parts, it cannot reappear at {position}"),
                        id,
                        position,
                    )
                    .with_hint("every brick id must appear exactly twice"),
                ));
            }
        }

        if let Some(above) = above_row.and_then(|cells| cells.get(col)).copied() {
            let above_id = BrickId::from_raw(above);
            let unfinished = staged.get(above_id).is_some_and(|brick| !brick.is_complete());
            if unfinished && above_id != id {
                return Err(BrickError::BrickPosition(
                    position_info(
                        "brick-above-mismatch",
                        format!("brick {above_id} above {position} must continue downward, found {id}"),
                        id,
                        position,
                    )
                    .with_context("expected", above_id),
                ));
            }
        }

        if let Some(brick) = staged.get(id) {
            if brick.continuation(position).is_none() {
                let first = brick.parts()[0];
                return Err(BrickError::BrickPosition(
                    position_info(
                        "brick-position",
                        format!("brick {id} at {position} is not next to its other part at {first}"),
                        id,
                        position,
                    )
                    .with_context("first_row", first.row)
                    .with_context("first_col", first.col),
                ));
            }
        }

        staged.record(id, position);
    }

    Ok(staged)
}

/// Ensures every brick of a finished layer received both parts.
pub(crate) fn check_complete(tracker: &BrickTracker, dims: Dimensions) -> Result<(), BrickError> {
    let incomplete = tracker.incomplete_ids();
    if incomplete.is_empty() {
        return Ok(());
    }
    let listed = incomplete
        .iter()
        .map(BrickId::to_string)
        .collect::<Vec<_>>()
        .join(",");
    Err(BrickError::IncompleteBrick(
        ErrorInfo::new(
            "incomplete-brick",
            format!("the layer is full but bricks [{listed}] have a single part"),
        )
        .with_context("ids", listed)
        .with_context("rows", dims.rows),
    ))
}

pub(crate) fn layer_full(dims: Dimensions) -> BrickError {
    BrickError::LayerFull(
        ErrorInfo::new(
            "layer-full",
            format!("the layer already has all {} rows", dims.rows),
        )
        .with_context("rows", dims.rows),
    )
}

fn dimension_format(input: &str) -> BrickError {
    BrickError::DimensionFormat(
        ErrorInfo::new(
            "dimension-format",
            "write rows and columns as two even whole numbers, e.g. \"2 4\"",
        )
        .with_context("input", input.trim())
        .with_context("max", MAX_LAYER_SIZE),
    )
}

fn row_format(dims: Dimensions) -> BrickError {
    let max = dims.target_brick_count();
    BrickError::RowFormat(row_bounds_info(
        "row-format",
        format!(
            "write {} numbers between {MIN_BRICK_ID} and {max}, separated by spaces",
            dims.columns
        ),
        dims,
    ))
}

fn row_bounds_info(code: &str, message: String, dims: Dimensions) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("columns", dims.columns)
        .with_context("min", MIN_BRICK_ID)
        .with_context("max", dims.target_brick_count())
}

fn position_info(code: &str, message: String, id: BrickId, position: Point) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("id", id)
        .with_context("row", position.row)
        .with_context("col", position.col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_accept_separators() {
        assert_eq!(parse_dimensions("2 4").unwrap(), Dimensions::new(2, 4));
        assert_eq!(parse_dimensions("  98   2 ").unwrap(), Dimensions::new(98, 2));
    }

    #[test]
    fn dimensions_need_two_whitespace_tokens() {
        for input in ["2", "2 4 6", "2,4", "a b", "", "2 x"] {
            let err = parse_dimensions(input).unwrap_err();
            assert!(matches!(err, BrickError::DimensionFormat(_)), "{input}: {err}");
        }
    }

    #[test]
    fn odd_dimension_is_a_format_error() {
        assert!(matches!(
            parse_dimensions("1 4"),
            Err(BrickError::DimensionFormat(_))
        ));
        assert!(matches!(
            parse_dimensions("3 200"),
            Err(BrickError::DimensionFormat(_))
        ));
    }

    #[test]
    fn dimension_bounds_are_half_open() {
        assert!(matches!(
            parse_dimensions("0 4"),
            Err(BrickError::DimensionRange(_))
        ));
        let err = parse_dimensions("200 4").unwrap_err();
        assert_eq!(err.info().context_usize("value"), Some(200));
        assert!(matches!(
            parse_dimensions("100 2"),
            Err(BrickError::DimensionRange(_))
        ));
    }

    #[test]
    fn row_shape_is_checked_before_range() {
        let dims = Dimensions::new(2, 4);
        assert_eq!(parse_row("1 1 2 2", dims).unwrap(), vec![1, 1, 2, 2]);
        assert!(matches!(
            parse_row("1 1 2 T", dims),
            Err(BrickError::RowFormat(_))
        ));
        assert!(matches!(parse_row("3 3 4", dims), Err(BrickError::RowFormat(_))));
        assert!(matches!(
            parse_row("3 3 4 4 5", dims),
            Err(BrickError::RowFormat(_))
        ));
        assert!(matches!(
            parse_row("1 1 2 100", dims),
            Err(BrickError::RowFormat(_))
        ));
        let err = parse_row("3 3 4 10", dims).unwrap_err();
        match err {
            BrickError::RowRange(info) => {
                assert_eq!(info.context_usize("columns"), Some(4));
                assert_eq!(info.context_usize("min"), Some(1));
                assert_eq!(info.context_usize("max"), Some(4));
                assert_eq!(info.context_usize("col"), Some(3));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn zero_id_is_out_of_range() {
        let dims = Dimensions::new(2, 2);
        assert!(matches!(parse_row("0 1", dims), Err(BrickError::RowRange(_))));
    }

    #[test]
    fn complete_check_lists_single_part_bricks() {
        let mut tracker = BrickTracker::with_capacity(3);
        tracker.record(BrickId::from_raw(1), Point::new(1, 0));
        tracker.record(BrickId::from_raw(3), Point::new(1, 1));
        tracker.record(BrickId::from_raw(3), Point::new(1, 2));
        let err = check_complete(&tracker, Dimensions::new(2, 3)).unwrap_err();
        match err {
            BrickError::IncompleteBrick(info) => {
                assert_eq!(info.context.get("ids"), Some(&"1".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
