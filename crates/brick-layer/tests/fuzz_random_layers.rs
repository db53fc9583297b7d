use brick_core::errors::BrickError;
use brick_core::Dimensions;
use brick_layer::{
    audit_tiling, gen_block_layer, gen_flip_layer, layer_from_json, layer_to_json, LayerSession,
    RowState,
};
use proptest::prelude::*;

fn replay(dims: Dimensions, grid: &[Vec<u32>]) -> Result<LayerSession, BrickError> {
    let mut session = LayerSession::new(dims);
    for row in grid {
        let line = row
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join("  ");
        session = session.ingest_row(&line)?;
    }
    Ok(session)
}

proptest! {
    #[test]
    fn generated_layers_ingest_and_audit(seed in any::<u64>(), half_rows in 1usize..5, half_cols in 1usize..5) {
        let dims = Dimensions::new(half_rows * 2, half_cols * 2);
        let layer = gen_block_layer(dims, seed).unwrap();

        let session = replay(dims, layer.state()).unwrap();
        prop_assert_eq!(session.row_state(), RowState::Full);
        prop_assert!(matches!(session.ingest_row("1"), Err(BrickError::LayerFull(_))));

        let audit = audit_tiling(session.state());
        prop_assert!(audit.is_valid());
        prop_assert_eq!(audit.bricks, dims.target_brick_count());
        prop_assert!(session.tracker().bricks().all(|brick| brick.is_domino()));

        let json = layer_to_json(&layer).unwrap();
        prop_assert_eq!(layer_from_json(&json).unwrap(), layer);
    }

    #[test]
    fn flipped_tilings_ingest_and_audit(seed in any::<u64>(), half_rows in 1usize..6, half_cols in 1usize..6, flips in 0usize..300) {
        let dims = Dimensions::new(half_rows * 2, half_cols * 2);
        let layer = gen_flip_layer(dims, seed, flips).unwrap();

        let session = replay(dims, layer.state()).unwrap();
        prop_assert!(session.is_full());
        prop_assert_eq!(session.state(), layer.state());
        prop_assert_eq!(session.tracker().complete_count(), dims.target_brick_count());

        let audit = audit_tiling(layer.state());
        prop_assert!(audit.is_valid());
        prop_assert_eq!(audit.bricks, dims.target_brick_count());
    }

    #[test]
    fn rejected_rows_of_flipped_tilings_leave_no_trace(seed in any::<u64>(), flips in 0usize..300, col in 0usize..5) {
        let dims = Dimensions::new(6, 6);
        let layer = gen_flip_layer(dims, seed, flips).unwrap();
        let session = replay(dims, &layer.state()[..2]).unwrap();

        let mut row = layer.state()[2].clone();
        row.swap(col, col + 1);
        let line = row.iter().map(u32::to_string).collect::<Vec<_>>().join(" ");
        let before = session.clone();
        match session.ingest_row(&line) {
            Ok(next) => prop_assert_eq!(next.state().len(), 3),
            Err(_) => prop_assert_eq!(session, before),
        }
    }

    #[test]
    fn swapping_two_ids_in_a_row_never_corrupts_state(seed in any::<u64>(), col in 0usize..3) {
        let dims = Dimensions::new(4, 4);
        let layer = gen_block_layer(dims, seed).unwrap();
        let session = replay(dims, &layer.state()[..1]).unwrap();

        let mut row = layer.state()[1].clone();
        row.swap(col, col + 1);
        let line = row.iter().map(u32::to_string).collect::<Vec<_>>().join(" ");
        let before = session.clone();
        match session.ingest_row(&line) {
            Ok(next) => prop_assert_eq!(next.state().len(), 2),
            Err(_) => prop_assert_eq!(session, before),
        }
    }
}
