use brick_core::errors::{BrickError, ErrorInfo};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layer::Layer;
use crate::session::{create_layer, LayerSession};

const COMMENT_PREFIX: char = '#';

/// On-disk representation of a layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerFile {
    /// Number of rows.
    pub rows: usize,
    /// Number of ids per row.
    pub columns: usize,
    /// Row-major brick ids.
    pub state: Vec<Vec<u32>>,
}

impl From<&Layer> for LayerFile {
    fn from(layer: &Layer) -> Self {
        Self {
            rows: layer.rows(),
            columns: layer.columns(),
            state: layer.state().clone(),
        }
    }
}

/// Replays a text layer (dimension line, then one line per row) through a session.
///
/// Blank lines and lines starting with `#` are ignored. The returned session
/// may be partial if the text stops early.
pub fn session_from_text(text: &str) -> Result<LayerSession, BrickError> {
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_PREFIX));
    let Some(header) = lines.next() else {
        return Err(serde_error("empty-layer", "the layer text has no dimension line"));
    };
    let mut session = create_layer(header)?;
    for line in lines {
        session = session.ingest_row(line)?;
    }
    Ok(session)
}

/// Replays a JSON [`LayerFile`] through a session so it gets full validation.
pub fn session_from_json(json: &str) -> Result<LayerSession, BrickError> {
    let file: LayerFile = serde_json::from_str(json)
        .map_err(|err| serde_error("deserialize-json", err.to_string()))?;
    let mut session = create_layer(&format!("{} {}", file.rows, file.columns))?;
    for row in &file.state {
        let line = row
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        session = session.ingest_row(&line)?;
    }
    Ok(session)
}

/// Loads a complete layer from text, failing if rows are missing.
pub fn layer_from_text(text: &str) -> Result<Layer, BrickError> {
    require_full(session_from_text(text)?)
}

/// Loads a complete layer from JSON, failing if rows are missing.
pub fn layer_from_json(json: &str) -> Result<Layer, BrickError> {
    require_full(session_from_json(json)?)
}

/// Serializes a layer to pretty JSON.
pub fn layer_to_json(layer: &Layer) -> Result<String, BrickError> {
    serde_json::to_string_pretty(&LayerFile::from(layer))
        .map_err(|err| serde_error("serialize-json", err.to_string()))
}

/// Formats a layer back into the text format accepted by [`layer_from_text`].
pub fn layer_to_text(layer: &Layer) -> String {
    let mut out = format!("{} {}\n", layer.rows(), layer.columns());
    for row in layer.state() {
        let line = row
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn require_full(session: LayerSession) -> Result<Layer, BrickError> {
    let filled = session.state().len();
    let rows = session.rows();
    match session.into_layer() {
        Some(layer) => {
            debug!(rows, "layer loaded");
            Ok(layer)
        }
        None => Err(BrickError::Serde(
            ErrorInfo::new(
                "missing-rows",
                format!("the layer declares {rows} rows but only {filled} were given"),
            )
            .with_context("rows", rows)
            .with_context("filled", filled),
        )),
    }
}

fn serde_error(code: &str, message: impl Into<String>) -> BrickError {
    BrickError::Serde(ErrorInfo::new(code, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_BY_FOUR: &str = "# sample\n2 4\n\n1 1 2 2\n3 3 4 4\n";

    #[test]
    fn text_and_json_agree() {
        let layer = layer_from_text(TWO_BY_FOUR).unwrap();
        let json = layer_to_json(&layer).unwrap();
        assert_eq!(layer_from_json(&json).unwrap(), layer);
        assert_eq!(layer_to_text(&layer), "2 4\n1 1 2 2\n3 3 4 4\n");
    }

    #[test]
    fn short_text_reports_missing_rows() {
        let err = layer_from_text("2 4\n1 1 2 2\n").unwrap_err();
        assert_eq!(err.info().code, "missing-rows");
        assert_eq!(err.info().context_usize("filled"), Some(1));
    }

    #[test]
    fn json_rows_get_full_validation() {
        let json = r#"{"rows":2,"columns":4,"state":[[1,1,2,2],[1,1,2,2]]}"#;
        assert!(matches!(
            layer_from_json(json),
            Err(BrickError::BrickFull(_))
        ));
        let json = r#"{"rows":3,"columns":4,"state":[]}"#;
        assert!(matches!(
            layer_from_json(json),
            Err(BrickError::DimensionFormat(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_serde_error() {
        let err = layer_from_json("{").unwrap_err();
        assert!(matches!(err, BrickError::Serde(_)));
        assert_eq!(err.info().code, "deserialize-json");
    }

    #[test]
    fn empty_text_has_no_header() {
        let err = session_from_text("\n# nothing\n").unwrap_err();
        assert_eq!(err.info().code, "empty-layer");
    }
}
