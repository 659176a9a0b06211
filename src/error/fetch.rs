//! Errors surfaced by the page fetcher.
//!
//! A failed fetch is fatal to that request only: the caller surfaces it and
//! leaves the selection state and the currently displayed page untouched.

use thiserror::Error;

/// Failure modes of a page fetch.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// Connection to the remote source failed.
    #[error("connection failed: {message}")]
    ConnectionFailed { message: String },

    /// The request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// The server answered with a non-2xx status.
    #[error("server returned HTTP {status}")]
    HttpStatus { status: u16 },

    /// The response body could not be decoded as a page of artworks.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// Anything else.
    #[error("fetch failed: {message}")]
    Other { message: String },
}

impl FetchError {
    /// Check if this error is likely transient and worth a retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::ConnectionFailed { .. } => true,
            FetchError::Timeout { .. } => true,
            FetchError::HttpStatus { status } => *status >= 500 || *status == 429 || *status == 408,
            FetchError::InvalidResponse { .. } => false,
            FetchError::Other { .. } => false,
        }
    }

    /// User-facing message for the error screen.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::ConnectionFailed { .. } => {
                "Unable to reach the Art Institute of Chicago API. Please check your internet connection.".to_string()
            }
            FetchError::Timeout { .. } => {
                "The request timed out. The server may be slow or unreachable.".to_string()
            }
            FetchError::HttpStatus { status } => match *status {
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                500..=599 => {
                    "The server is experiencing issues. Please try again later.".to_string()
                }
                _ => format!("The server returned an error (HTTP {}).", status),
            },
            FetchError::InvalidResponse { .. } => {
                "The server response could not be understood.".to_string()
            }
            FetchError::Other { .. } => "Failed to fetch artworks. Please try again.".to_string(),
        }
    }
}

/// Classify a reqwest error into a [`FetchError`].
pub fn classify_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            message: err.to_string(),
        }
    } else if err.is_connect() {
        FetchError::ConnectionFailed {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        FetchError::InvalidResponse {
            message: err.to_string(),
        }
    } else {
        FetchError::Other {
            message: err.to_string(),
        }
    }
}
