//! Structured error types shared across brickwork crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`BrickError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (ids, positions, bounds).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Looks up a context entry and parses it back into a number.
    pub fn context_usize(&self, key: &str) -> Option<usize> {
        self.context.get(key).and_then(|value| value.parse().ok())
    }
}

/// Canonical error type for layer validation and file handling.
///
/// Every variant is a non-retryable validation failure: callers are expected to
/// report it and ask for new input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", content = "detail")]
pub enum BrickError {
    /// The dimension line is malformed, has the wrong token count or an odd value.
    #[error("dimension format error: {0}")]
    DimensionFormat(ErrorInfo),
    /// A dimension value is outside `[2, 100)`.
    #[error("dimension range error: {0}")]
    DimensionRange(ErrorInfo),
    /// A row line is malformed or has the wrong number of ids.
    #[error("row format error: {0}")]
    RowFormat(ErrorInfo),
    /// A row contains an id outside `[1, target brick count]`.
    #[error("row range error: {0}")]
    RowRange(ErrorInfo),
    /// A brick part is not adjacent to its other part or breaks the brick above.
    #[error("brick position error: {0}")]
    BrickPosition(ErrorInfo),
    /// A brick id already has both of its parts.
    #[error("brick full error: {0}")]
    BrickFull(ErrorInfo),
    /// A row was submitted after the layer received all of its rows.
    #[error("layer full error: {0}")]
    LayerFull(ErrorInfo),
    /// The layer is complete but some bricks never received their second part.
    #[error("incomplete brick error: {0}")]
    IncompleteBrick(ErrorInfo),
    /// Layer file encoding or decoding failed.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl BrickError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            BrickError::DimensionFormat(info)
            | BrickError::DimensionRange(info)
            | BrickError::RowFormat(info)
            | BrickError::RowRange(info)
            | BrickError::BrickPosition(info)
            | BrickError::BrickFull(info)
            | BrickError::LayerFull(info)
            | BrickError::IncompleteBrick(info)
            | BrickError::Serde(info) => info,
        }
    }
}
