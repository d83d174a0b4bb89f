//! Error types for sketchsnap.

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum SnapError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors during content-bounds computation and arrangement.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Maximum view nesting depth ({depth}) exceeded")]
    MaxDepthExceeded { depth: usize },
}

/// Errors while assembling or serializing a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors while loading session configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
