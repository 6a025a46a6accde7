//! Closed failure taxonomy for the request pipeline.
//!
//! Every failure a caller can observe is one of the [`NetworkError`]
//! variants, so matches stay exhaustive and each variant renders a
//! human-readable message through `Display`.

use thiserror::Error;

/// Boxed lower-level error carried as a transport cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by request building, execution, and response decoding.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Transport-level failure (DNS, connection refused, timeout) before
    /// any HTTP response arrived. The message is the cause's own message.
    #[error("{0}")]
    Transport(#[source] BoxError),

    /// The transport produced a response, but a caller-enforced status
    /// cutoff rejected it. Never raised by the executor itself.
    #[error("HTTP status code: {0}")]
    Status(u16),

    /// A payload could not be encoded to JSON, or response bytes did not
    /// decode as the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response bytes are structurally unusable, e.g. empty where content
    /// was required.
    #[error("Invalid data received from server")]
    InvalidData,

    /// The transport resolved with something that is not an HTTP response.
    #[error("Transport did not produce an HTTP response")]
    NonHttpResponse,
}

impl NetworkError {
    /// Wrap any lower-level error as a transport failure.
    pub fn transport(cause: impl Into<BoxError>) -> Self {
        Self::Transport(cause.into())
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}

/// Result type for jsonfetch operations.
pub type Result<T> = std::result::Result<T, NetworkError>;
