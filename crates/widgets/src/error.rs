//! Error types for widget catalogs and descriptors.

use thiserror::Error;

/// Main error type for widget handling.
#[derive(Error, Debug)]
pub enum WidgetError {
    /// Two widgets share a tool id.
    #[error("Duplicate widget id: {0}")]
    DuplicateId(String),

    /// Two widgets share a template URI.
    #[error("Duplicate widget template URI: {0}")]
    DuplicateUri(String),

    /// A descriptor could not be encoded into its MCP model type.
    #[error("Descriptor error: {0}")]
    Descriptor(#[from] serde_json::Error),
}

/// Result type alias for widget operations.
pub type Result<T> = std::result::Result<T, WidgetError>;
