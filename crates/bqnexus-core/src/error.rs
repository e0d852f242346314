//! Catalog load error types.
//!
//! Loading the question bank is the only fallible operation in bqnexus.
//! Every failure is a flavor of the same thing: the catalog could not be
//! obtained, and the engine stays not ready.

use thiserror::Error;

/// Errors that can occur while loading the question catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("transport error fetching {location}: {message}")]
    Transport { location: String, message: String },

    /// The server answered with a non-success status.
    #[error("HTTP {status} fetching {location}")]
    HttpStatus { location: String, status: u16 },

    /// A local catalog file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not a valid question list.
    #[error("invalid question data: {0}")]
    Decode(String),
}

impl LoadError {
    /// Returns `true` if the failure happened before any payload was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, LoadError::Transport { .. } | LoadError::Io { .. })
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Decode(e.to_string())
    }
}
