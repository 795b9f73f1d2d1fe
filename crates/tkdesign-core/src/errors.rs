//! Error types for design-node access.

use thiserror::Error;

/// Result type alias for design-node operations.
pub type Result<T> = std::result::Result<T, DesignError>;

/// Errors raised while reading fields from a design node.
#[derive(Debug, Error)]
pub enum DesignError {
    /// A field the caller requires is absent (or empty, for lists).
    #[error("Missing required field '{field}' on node '{node}'")]
    MissingField { node: String, field: String },

    /// A field is present but does not have the expected shape.
    #[error("Invalid field '{field}' on node '{node}': {message}")]
    InvalidField {
        node: String,
        field: String,
        message: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DesignError {
    pub fn missing(node: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            node: node.into(),
            field: field.into(),
        }
    }

    pub fn invalid(
        node: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            node: node.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}
