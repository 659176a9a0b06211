//! Error types for gallerist.
//!
//! Two failure domains exist: the page fetcher ([`FetchError`], surfaced to
//! the user with a retry prompt) and the bulk-select entry point
//! ([`BulkSelectError`], reported inline and leaving the selection state
//! unchanged). A stale page response is neither: it is detected by sequence
//! number in the app layer and silently discarded.

mod fetch;

pub use fetch::{classify_reqwest_error, FetchError};

use thiserror::Error;

/// Rejection of a bulk-select request before it touches the selection state.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BulkSelectError {
    /// The requested count must be at least 1.
    #[error("bulk select count must be at least 1")]
    InvalidCount,
}
