//! Unified error types for the backend client.

use thiserror::Error;

/// Unified error type for backend API calls.
///
/// Environment resolution has no error path, so every failure in this crate
/// originates from a request. Errors are surfaced to the caller unchanged;
/// the client performs no retries and no silent recovery.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Server responded with a non-success status. The body is not read on
    /// this path.
    #[error("server returned HTTP {status}")]
    Http {
        /// The non-2xx status code.
        status: u16,
    },

    /// Transport-level failure: DNS, refused connection, aborted request.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A success response carried a body that did not decode as the expected
    /// JSON shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// GraphQL envelope carried errors and no data (HTTP 200 path).
    #[error("graphql error: {message}")]
    Graphql {
        /// Joined server-reported error messages.
        message: String,
    },
}

impl ApiError {
    /// Status code for HTTP errors, `None` for every other variant.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ApiError>;
