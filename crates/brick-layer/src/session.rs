use brick_core::errors::BrickError;
use brick_core::{Dimensions, Grid};
use tracing::{debug, info};

use crate::layer::Layer;
use crate::tracker::BrickTracker;
use crate::validate::{check_bricks, check_complete, layer_full, parse_dimensions, parse_row};

/// Position of a session in the row ingestion state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    /// Waiting for the row with this zero based index.
    AwaitingRow(usize),
    /// Every row has been accepted.
    Full,
}

/// A layer being entered row by row together with its brick tracker.
///
/// Ingestion is a pure transition: [`LayerSession::ingest_row`] leaves `self`
/// untouched and returns the next session, so a rejected row cannot corrupt
/// the accepted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerSession {
    layer: Layer,
    tracker: BrickTracker,
}

/// Parses a dimension line and opens an empty session for it.
pub fn create_layer(dimensions: &str) -> Result<LayerSession, BrickError> {
    let dims = parse_dimensions(dimensions)?;
    debug!(rows = dims.rows, columns = dims.columns, "layer created");
    Ok(LayerSession::new(dims))
}

impl LayerSession {
    /// Opens an empty session for already validated dimensions.
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            layer: Layer::new(dimensions),
            tracker: BrickTracker::with_capacity(dimensions.target_brick_count()),
        }
    }

    /// Validates `row` and returns the session with the row appended.
    pub fn ingest_row(&self, row: &str) -> Result<LayerSession, BrickError> {
        let dims = self.layer.dimensions();
        let index = match self.row_state() {
            RowState::Full => return Err(layer_full(dims)),
            RowState::AwaitingRow(index) => index,
        };

        let values = parse_row(row, dims)?;
        let tracker = check_bricks(&values, index, self.layer.state(), &self.tracker)?;
        if index + 1 == dims.rows {
            check_complete(&tracker, dims)?;
        }

        let mut next = LayerSession {
            layer: self.layer.clone(),
            tracker,
        };
        next.layer.push_row(values);
        debug!(row = index, "row accepted");
        if next.is_full() {
            info!(
                rows = dims.rows,
                columns = dims.columns,
                bricks = next.tracker.complete_count(),
                "layer complete"
            );
        }
        Ok(next)
    }

    /// Current state of the ingestion state machine.
    pub fn row_state(&self) -> RowState {
        if self.layer.is_full() {
            RowState::Full
        } else {
            RowState::AwaitingRow(self.layer.filled_rows())
        }
    }

    /// Whether every row has been accepted.
    pub fn is_full(&self) -> bool {
        self.layer.is_full()
    }

    /// Number of bricks the finished layer contains.
    pub fn target_brick_count(&self) -> usize {
        self.layer.target_brick_count()
    }

    /// Number of rows of the layer.
    pub fn rows(&self) -> usize {
        self.layer.rows()
    }

    /// Number of ids per row.
    pub fn columns(&self) -> usize {
        self.layer.columns()
    }

    /// Layer size.
    pub fn dimensions(&self) -> Dimensions {
        self.layer.dimensions()
    }

    /// Rows accepted so far.
    pub fn state(&self) -> &Grid {
        self.layer.state()
    }

    /// The layer built so far.
    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    /// Bricks recorded so far.
    pub fn tracker(&self) -> &BrickTracker {
        &self.tracker
    }

    /// Consumes a full session and returns its layer, or `None` while rows are missing.
    pub fn into_layer(self) -> Option<Layer> {
        self.layer.is_full().then_some(self.layer)
    }

    /// Same dimensions, no rows: what the `repeat` command starts from.
    pub fn restarted(&self) -> LayerSession {
        LayerSession::new(self.dimensions())
    }
}
