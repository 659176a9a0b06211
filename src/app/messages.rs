//! AppMessage enum for async communication within the application.

use crate::error::FetchError;
use crate::models::ArtworkPage;

/// Messages received from async fetch tasks.
///
/// Every message carries the fetch sequence number it was spawned with; the
/// handler discards any message whose sequence is no longer current, so a
/// stale response can never touch the selection store or the table.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A page fetch resolved successfully
    PageLoaded {
        /// Fetch sequence this result belongs to
        seq: u64,
        /// One-based page number that was requested
        page: u32,
        /// The fetched records and collection totals
        data: ArtworkPage,
    },
    /// A page fetch failed
    PageFailed {
        /// Fetch sequence this result belongs to
        seq: u64,
        /// One-based page number that was requested
        page: u32,
        /// Why the fetch failed
        error: FetchError,
    },
}
