//! Error types for the todo cache.
//!
//! # Design
//! Every non-2xx response lands in `Transport` with the status code and
//! reason phrase, which is exactly what the host surfaces to the user as
//! "HTTP 500 Internal Server Error". The JSON edges get their own variants
//! for debugging; they indicate a schema mismatch rather than a server
//! failure.

use std::fmt;

/// Errors surfaced by `TodoClient` and `TodoCache`.
#[derive(Debug)]
pub enum ApiError {
    /// The server responded outside the 2xx range.
    Transport { status: u16, status_text: String },

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport {
                status,
                status_text,
            } => {
                write!(f, "HTTP {status} {status_text}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
