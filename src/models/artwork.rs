//! Wire model for the artworks endpoint.
//!
//! The remote source returns fixed-size pages of artworks together with a
//! pagination block describing the whole collection. Field names match the
//! JSON payload exactly.

use serde::Deserialize;

/// Stable identifier of an artwork across the whole collection.
///
/// Positive, assigned by the remote source, and never reused. This is the
/// opaque record id the selection model is keyed on.
pub type ArtworkId = u64;

/// A single artwork record.
///
/// Everything except `id` and `title` may be missing from the payload; the
/// UI substitutes placeholders for absent values.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Artwork {
    /// Unique artwork id
    pub id: ArtworkId,
    /// Artwork title
    #[serde(default)]
    pub title: Option<String>,
    /// Where the artwork was created
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Artist attribution as displayed by the museum
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Inscriptions present on the artwork
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Earliest year of creation
    #[serde(default)]
    pub date_start: Option<i32>,
    /// Latest year of creation
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Title with a placeholder for untitled works.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Artist attribution with a placeholder for unknown artists.
    pub fn display_artist(&self) -> &str {
        self.artist_display.as_deref().unwrap_or("Unknown")
    }
}

/// Pagination block sent alongside every page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Pagination {
    /// Total number of records in the collection
    pub total: u64,
    /// Page size used by the server for this response
    pub limit: u32,
    /// Zero-based offset of the first record on this page
    #[serde(default)]
    pub offset: u64,
    /// Total number of pages at this page size
    pub total_pages: u32,
    /// One-based number of this page
    pub current_page: u32,
}

/// One fetched page of artworks plus collection totals.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ArtworkPage {
    /// Records on this page, in collection order
    pub data: Vec<Artwork>,
    /// Collection totals and page position
    pub pagination: Pagination,
}

impl ArtworkPage {
    /// Ids of the records on this page, in page order.
    pub fn ids(&self) -> Vec<ArtworkId> {
        self.data.iter().map(|a| a.id).collect()
    }
}
