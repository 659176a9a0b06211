//! Mock page fetcher for testing.
//!
//! Serves scripted pages (or errors) and records every request so tests can
//! verify fetch behavior without network access.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::FetchError;
use crate::models::{Artwork, ArtworkId, ArtworkPage, Pagination};
use crate::traits::PageFetcher;

/// A recorded fetch request for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFetch {
    /// One-based page number requested
    pub page: u32,
    /// Page size requested
    pub page_size: u32,
}

/// Mock [`PageFetcher`] for testing.
///
/// Pages are scripted per page number; unscripted pages return a connection
/// failure. A whole-collection helper builds consistent pages from a total
/// record count.
///
/// # Example
///
/// ```ignore
/// use gallerist::adapters::mock::MockFetcher;
///
/// let fetcher = MockFetcher::with_collection(100, 12);
/// let page = fetcher.fetch_page(2, 12).await?;
/// assert_eq!(page.data[0].id, MockFetcher::id_for_index(13));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockFetcher {
    pages: Arc<Mutex<HashMap<u32, Result<ArtworkPage, FetchError>>>>,
    requests: Arc<Mutex<Vec<RecordedFetch>>>,
}

impl MockFetcher {
    /// Create an empty mock; every fetch fails until pages are scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock serving a consistent collection of `total` records at
    /// the given page size. Record ids are derived from the global row index
    /// via [`MockFetcher::id_for_index`].
    pub fn with_collection(total: u64, page_size: u32) -> Self {
        let mock = Self::new();
        let total_pages = if total == 0 {
            1
        } else {
            ((total + page_size as u64 - 1) / page_size as u64) as u32
        };

        for page in 1..=total_pages {
            let start = (page as u64 - 1) * page_size as u64;
            let end = (start + page_size as u64).min(total);
            let data: Vec<Artwork> = (start..end)
                .map(|i| Self::artwork_for_index(i + 1))
                .collect();
            mock.set_page(
                page,
                Ok(ArtworkPage {
                    data,
                    pagination: Pagination {
                        total,
                        limit: page_size,
                        offset: start,
                        total_pages,
                        current_page: page,
                    },
                }),
            );
        }
        mock
    }

    /// Script the response for a page number.
    pub fn set_page(&self, page: u32, response: Result<ArtworkPage, FetchError>) {
        self.pages.lock().unwrap().insert(page, response);
    }

    /// Script an error for a page number.
    pub fn set_error(&self, page: u32, error: FetchError) {
        self.set_page(page, Err(error));
    }

    /// All recorded requests, in order.
    pub fn requests(&self) -> Vec<RecordedFetch> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of fetches served so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Deterministic record id for a 1-based global row index.
    ///
    /// Offset so tests cannot accidentally conflate ids with row indices.
    pub fn id_for_index(global_index: u64) -> ArtworkId {
        10_000 + global_index
    }

    fn artwork_for_index(global_index: u64) -> Artwork {
        Artwork {
            id: Self::id_for_index(global_index),
            title: Some(format!("Artwork #{}", global_index)),
            place_of_origin: Some("Chicago".to_string()),
            artist_display: None,
            inscriptions: None,
            date_start: Some(1900),
            date_end: Some(1950),
        }
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<ArtworkPage, FetchError> {
        self.requests
            .lock()
            .unwrap()
            .push(RecordedFetch { page, page_size });

        match self.pages.lock().unwrap().get(&page) {
            Some(response) => response.clone(),
            None => Err(FetchError::ConnectionFailed {
                message: format!("no scripted response for page {}", page),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_collection_pages_are_consistent() {
        let fetcher = MockFetcher::with_collection(30, 12);

        let page1 = fetcher.fetch_page(1, 12).await.unwrap();
        assert_eq!(page1.data.len(), 12);
        assert_eq!(page1.pagination.total, 30);
        assert_eq!(page1.pagination.total_pages, 3);
        assert_eq!(page1.data[0].id, MockFetcher::id_for_index(1));

        let page3 = fetcher.fetch_page(3, 12).await.unwrap();
        assert_eq!(page3.data.len(), 6);
        assert_eq!(page3.data[0].id, MockFetcher::id_for_index(25));
    }

    #[tokio::test]
    async fn test_unscripted_page_fails() {
        let fetcher = MockFetcher::new();
        assert!(fetcher.fetch_page(1, 12).await.is_err());
    }

    #[tokio::test]
    async fn test_requests_are_recorded() {
        let fetcher = MockFetcher::with_collection(5, 12);
        let _ = fetcher.fetch_page(1, 12).await;
        let _ = fetcher.fetch_page(2, 12).await;

        let requests = fetcher.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(
            requests[0],
            RecordedFetch {
                page: 1,
                page_size: 12
            }
        );
        assert_eq!(requests[1].page, 2);
    }

    #[tokio::test]
    async fn test_scripted_error() {
        let fetcher = MockFetcher::with_collection(5, 12);
        fetcher.set_error(1, FetchError::HttpStatus { status: 503 });
        assert_eq!(
            fetcher.fetch_page(1, 12).await,
            Err(FetchError::HttpStatus { status: 503 })
        );
    }
}
