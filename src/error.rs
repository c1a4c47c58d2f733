//! Error types for the Cinerank library.
//!
//! All errors are represented by the [`CinerankError`] enum. Missing or
//! alternately-named record fields are never errors; they are handled by the
//! resolver returning `None`. Errors here cover the things that genuinely
//! cannot be ranked: a failed transport, an undecodable payload, a payload
//! shaped as an error object instead of a record list, or a search that was
//! superseded by a newer one before its response arrived.

use anyhow;
use thiserror::Error;

/// The main error type for Cinerank operations.
#[derive(Error, Debug)]
pub enum CinerankError {
    /// The backend fetch failed (network, HTTP status, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The payload is not a record list (e.g. carries an error field).
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A newer search started before this one's response arrived.
    #[error("request superseded: {0}")]
    Superseded(String),

    /// Generic error for other cases
    #[error("error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with CinerankError.
pub type Result<T> = std::result::Result<T, CinerankError>;

impl CinerankError {
    /// Create a new transport error.
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        CinerankError::Transport(msg.into())
    }

    /// Create a new invalid-response error.
    pub fn invalid_response<S: Into<String>>(msg: S) -> Self {
        CinerankError::InvalidResponse(msg.into())
    }

    /// Create a new superseded-request error.
    pub fn superseded<S: Into<String>>(msg: S) -> Self {
        CinerankError::Superseded(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        CinerankError::Other(msg.into())
    }
}
