//! Reqwest-based page fetcher for the Art Institute of Chicago API.
//!
//! Implements [`PageFetcher`] against `GET /artworks?page=N&limit=M`,
//! narrowing the payload to the fields the table displays.

use async_trait::async_trait;
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::{classify_reqwest_error, FetchError};
use crate::models::ArtworkPage;
use crate::traits::PageFetcher;

/// Fields requested from the API; keeps responses small.
const ARTWORK_FIELDS: &str = "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

/// Production [`PageFetcher`] backed by reqwest.
///
/// # Example
///
/// ```ignore
/// use gallerist::adapters::ArticClient;
/// use gallerist::traits::PageFetcher;
///
/// let client = ArticClient::new("https://api.artic.edu/api/v1");
/// let page = client.fetch_page(1, 12).await?;
/// println!("{} artworks total", page.pagination.total);
/// ```
#[derive(Debug, Clone)]
pub struct ArticClient {
    client: reqwest::Client,
    base_url: String,
}

impl ArticClient {
    /// Create a client for the given API base URL with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client from an [`AppConfig`], honoring its timeout.
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(classify_reqwest_error)?;
        Ok(Self::with_client(client, config.api_base_url.clone()))
    }

    /// Create a client with a custom reqwest::Client.
    ///
    /// This allows for advanced configuration like custom timeouts or
    /// connection pools.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// The configured API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn artworks_url(&self, page: u32, page_size: u32) -> String {
        format!(
            "{}/artworks?page={}&limit={}&fields={}",
            self.base_url, page, page_size, ARTWORK_FIELDS
        )
    }
}

#[async_trait]
impl PageFetcher for ArticClient {
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<ArtworkPage, FetchError> {
        let url = self.artworks_url(page, page_size);
        tracing::debug!(page, page_size, "fetching artworks page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let page: ArtworkPage = response.json().await.map_err(|e| {
            if e.is_decode() {
                FetchError::InvalidResponse {
                    message: e.to_string(),
                }
            } else {
                classify_reqwest_error(e)
            }
        })?;

        tracing::debug!(
            records = page.data.len(),
            total = page.pagination.total,
            "page fetched"
        );
        Ok(page)
    }
}
