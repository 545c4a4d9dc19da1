//! Error types for the schema layer.

use std::path::PathBuf;

/// Returned when a type identifier is not part of the [`CType`](crate::CType) registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type identifier '{identifier}'")]
pub struct UnknownTypeError {
    pub identifier: String,
}

impl UnknownTypeError {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

/// Error returned while loading or validating a [`FrameConfig`](crate::FrameConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read frame config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is not valid JSON or does not match the schema layout.
    #[error("failed to parse frame config: {0}")]
    Json(#[from] serde_json::Error),

    /// `length` was set on a numeric field, or set to zero.
    #[error("invalid length {length} on field '{field}' of type {ty}")]
    InvalidLength {
        field: String,
        ty: String,
        length: usize,
    },

    /// A sensor was requested by name but is not defined.
    #[error("sensor '{name}' is not defined in the frame config")]
    UnknownSensor { name: String },
}
