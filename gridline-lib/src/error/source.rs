//! Source error types

use std::time::Duration;

/// Errors reported by a page source.
///
/// The grid never interprets these beyond surfacing them; the retry policy
/// uses [`is_transient`](SourceError::is_transient) to decide whether a
/// failed fetch is worth repeating.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    /// HTTP error response from the backend.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Network error while reaching the backend.
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    /// The backend rejected the request for rate limiting.
    #[error("Rate limited by the backend")]
    RateLimited {
        /// Suggested wait before retrying, if the backend reported one.
        retry_after: Option<Duration>,
    },

    /// The response body could not be decoded.
    #[error("Response decode error: {message}")]
    Decode {
        /// Description of the decode failure.
        message: String,
    },
}

impl SourceError {
    /// Creates a new HTTP error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a new network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a new decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this error is potentially transient.
    ///
    /// Transient errors are candidates for retry under a
    /// [`RetryPolicy`](crate::source::RetryPolicy).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http { status, .. } => matches!(status, 500 | 502 | 503 | 504),
            Self::Network(_) => true,
            Self::Timeout(_) => true,
            Self::RateLimited { .. } => true,
            Self::Decode { .. } => false,
        }
    }
}
