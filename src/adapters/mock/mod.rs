//! Mock adapters for testing.

mod fetcher;

pub use fetcher::{MockFetcher, RecordedFetch};
