//! Error types for code generation.

use thiserror::Error;
use tkdesign_core::DesignError;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// A required field is missing or malformed on a node.
    #[error(transparent)]
    Design(#[from] DesignError),

    /// The classifier has no element variant for this node.
    #[error("Unrecognized node kind '{kind}' for node '{node}'")]
    UnrecognizedKind { node: String, kind: String },

    /// A text-entry node whose prefix has no configured widget.
    #[error("No input widget configured for prefix '{prefix}' on node '{node}'")]
    Configuration { node: String, prefix: String },

    /// A classifier marker in the options is not a valid regex.
    #[error("Invalid pattern for option '{option}': {source}")]
    InvalidPattern {
        option: String,
        #[source]
        source: regex::Error,
    },

    /// Invalid design-file structure.
    #[error("Invalid document structure: {0}")]
    InvalidDocument(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodegenError {
    /// Whether traversal may skip the node instead of failing the pass.
    pub fn is_skippable(&self) -> bool {
        matches!(self, Self::UnrecognizedKind { .. })
    }
}
