#![deny(missing_docs)]

//! Row-by-row ingestion and validation of brick layers.
//!
//! A [`LayerSession`] is opened from a dimension line with [`create_layer`] and
//! grows one validated row at a time through [`LayerSession::ingest_row`].
//! Every transition is pure: rejected rows leave the previous session intact.

mod audit;
mod generators;
mod layer;
mod serialization;
mod session;
mod tracker;
mod validate;

pub use audit::{audit_tiling, brick_cells, AuditViolation, TilingAudit};
pub use generators::{gen_block_layer, gen_block_layer_text, gen_flip_layer};
pub use layer::Layer;
pub use session::{create_layer, LayerSession, RowState};
pub use tracker::{Brick, BrickTracker, Continuation};
pub use validate::{parse_dimensions, parse_row};

/// Re-export layer file helpers for downstream crates.
pub use serialization::{
    layer_from_json, layer_from_text, layer_to_json, layer_to_text, session_from_json,
    session_from_text, LayerFile,
};
