//! Page fetcher trait abstraction.
//!
//! The core never talks to the network directly: it asks a [`PageFetcher`]
//! for a page of artworks plus collection totals. The production
//! implementation wraps reqwest; tests inject a scripted mock.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::ArtworkPage;

/// Trait for fetching pages of artworks from the remote source.
///
/// One page number + page size in, one page of records plus totals out. Any
/// transport or decode failure is a [`FetchError`]; partial results are never
/// returned.
///
/// # Example
///
/// ```ignore
/// use gallerist::traits::PageFetcher;
///
/// async fn first_page<F: PageFetcher>(fetcher: &F) -> Result<Vec<u64>, FetchError> {
///     let page = fetcher.fetch_page(1, 12).await?;
///     Ok(page.ids())
/// }
/// ```
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one page of artworks.
    ///
    /// # Arguments
    /// * `page` - One-based page number
    /// * `page_size` - Records per page
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<ArtworkPage, FetchError>;
}
