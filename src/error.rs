//! Error type shared by the loader, the expander and the writer.

use std::path::PathBuf;

/// Errors that can occur while generating a neighbour topology
#[derive(Debug, thiserror::Error)]
pub enum TopogenError {
    #[error("Missing field in topology: {path}")]
    MissingField { path: String },

    #[error("Unexpected type at {path}: expected {expected}")]
    UnexpectedType { path: String, expected: &'static str },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse topology {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl TopogenError {
    pub(crate) fn missing(path: impl Into<String>) -> Self {
        Self::MissingField { path: path.into() }
    }

    pub(crate) fn not_an_object(path: impl Into<String>) -> Self {
        Self::UnexpectedType {
            path: path.into(),
            expected: "object",
        }
    }
}
