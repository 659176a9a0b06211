//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`BulkSelectOverlay`] - State of the bulk-select dialog
//! - [`AppMessage`] - Messages for async communication
//!
//! The app is event-driven: key events and fetch results are handled to
//! completion one at a time, so selection-store transitions never interleave.

mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{BulkSelectOverlay, Screen};

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::models::{Artwork, ArtworkId};
use crate::selection::{page_selection, total_selected, SelectionStore};
use crate::traits::PageFetcher;

/// Main application state.
pub struct App {
    /// Runtime configuration
    pub config: AppConfig,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Current screen being displayed
    pub screen: Screen,
    /// One-based number of the page currently displayed
    pub current_page: u32,
    /// Records of the displayed page
    pub artworks: Vec<Artwork>,
    /// Total records in the collection (0 until the first page lands)
    pub total_records: u64,
    /// Total pages in the collection (0 until the first page lands)
    pub total_pages: u32,
    /// Cursor row within the displayed page
    pub cursor: usize,
    /// Cross-page selection state
    pub selection: SelectionStore,
    /// Bulk-select dialog, when open
    pub overlay: Option<BulkSelectOverlay>,
    /// Transient status line shown in the footer
    pub status_line: Option<String>,
    /// User-facing message for the FetchFailed screen
    pub error_message: Option<String>,
    /// True while a page fetch is in flight
    pub fetch_in_flight: bool,
    /// Tick counter for the fetch spinner
    pub tick_count: u64,
    /// Redraw flag; set by anything that changes visible state
    pub needs_redraw: bool,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (cloned into fetch tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Page fetcher collaborator (shared with fetch tasks)
    fetcher: Arc<dyn PageFetcher>,
    /// Sequence number of the latest fetch; older results are stale
    fetch_seq: u64,
    /// Page number of the latest fetch, used for retry
    requested_page: u32,
}

impl App {
    /// Create a new App around a page fetcher.
    pub fn new(config: AppConfig, fetcher: Arc<dyn PageFetcher>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let selection = SelectionStore::new(config.page_size);
        Self {
            config,
            should_quit: false,
            screen: Screen::Loading,
            current_page: 1,
            artworks: Vec::new(),
            total_records: 0,
            total_pages: 0,
            cursor: 0,
            selection,
            overlay: None,
            status_line: None,
            error_message: None,
            fetch_in_flight: false,
            tick_count: 0,
            needs_redraw: true,
            message_rx: Some(message_rx),
            message_tx,
            fetcher,
            fetch_seq: 0,
            requested_page: 1,
        }
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations; called by the event loop tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.fetch_in_flight {
            // Keep the spinner moving
            self.mark_dirty();
        }
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // ========================================================================
    // Fetch lifecycle
    // ========================================================================

    /// Start fetching a page.
    ///
    /// Bumps the fetch sequence so any earlier in-flight result becomes
    /// stale, then spawns the fetch task. While records are already on
    /// screen the old page stays visible behind a spinner; only the very
    /// first fetch shows the loading screen.
    pub fn request_page(&mut self, page: u32) {
        self.fetch_seq += 1;
        self.requested_page = page;
        self.fetch_in_flight = true;
        if self.artworks.is_empty() {
            self.screen = Screen::Loading;
        }
        self.mark_dirty();

        let seq = self.fetch_seq;
        let page_size = self.config.page_size;
        let fetcher = self.fetcher.clone();
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            match fetcher.fetch_page(page, page_size).await {
                Ok(data) => {
                    let _ = tx.send(AppMessage::PageLoaded { seq, page, data });
                }
                Err(error) => {
                    let _ = tx.send(AppMessage::PageFailed { seq, page, error });
                }
            }
        });
    }

    /// Handle a message from a fetch task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::PageLoaded { seq, page, data } => {
                if seq != self.fetch_seq {
                    tracing::debug!(seq, page, "discarding stale page response");
                    return;
                }
                self.apply_page(page, data);
            }
            AppMessage::PageFailed { seq, page, error } => {
                if seq != self.fetch_seq {
                    tracing::debug!(seq, page, "discarding stale fetch failure");
                    return;
                }
                tracing::warn!(page, %error, "page fetch failed");
                self.fetch_in_flight = false;
                self.error_message = Some(error.user_message());
                self.screen = Screen::FetchFailed;
                self.mark_dirty();
            }
        }
    }

    fn apply_page(&mut self, page: u32, data: crate::models::ArtworkPage) {
        self.fetch_in_flight = false;
        self.current_page = page;
        self.total_records = data.pagination.total;
        self.total_pages = data.pagination.total_pages.max(1);
        self.artworks = data.data;
        self.cursor = self.cursor.min(self.artworks.len().saturating_sub(1));
        self.error_message = None;
        self.screen = Screen::Browse;

        // Page-became-visible bookkeeping, separate from checkbox rendering
        let ids = self.current_page_ids();
        self.selection.observe_page(page, &ids);
        self.mark_dirty();
    }

    /// Retry the page whose fetch failed.
    pub fn retry_failed_page(&mut self) {
        self.error_message = None;
        self.request_page(self.requested_page);
    }

    /// Leave the error screen and return to the last good page, if any.
    pub fn dismiss_error(&mut self) {
        if !self.artworks.is_empty() {
            self.error_message = None;
            self.screen = Screen::Browse;
            self.mark_dirty();
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Move to the next page, bounded by the collection size.
    pub fn next_page(&mut self) {
        if self.total_pages > 0 && self.current_page < self.total_pages {
            self.request_page(self.current_page + 1);
        }
    }

    /// Move to the previous page.
    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.request_page(self.current_page - 1);
        }
    }

    /// Move the cursor down one row.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.artworks.len() {
            self.cursor += 1;
            self.mark_dirty();
        }
    }

    /// Move the cursor up one row.
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.mark_dirty();
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Ids of the displayed page, in page order.
    pub fn current_page_ids(&self) -> Vec<ArtworkId> {
        self.artworks.iter().map(|a| a.id).collect()
    }

    /// Ids of the displayed page that render checked.
    pub fn checked_ids(&self) -> HashSet<ArtworkId> {
        page_selection(&self.selection, self.current_page, &self.current_page_ids())
    }

    /// Total selected count across all pages.
    pub fn total_selected_count(&self) -> u64 {
        total_selected(&self.selection)
    }

    /// Toggle the checkbox of the cursor row.
    ///
    /// The store receives the complete new selected-id set for the page,
    /// never a single-row diff.
    pub fn toggle_cursor_row(&mut self) {
        let Some(artwork) = self.artworks.get(self.cursor) else {
            return;
        };
        let id = artwork.id;
        let ids = self.current_page_ids();
        let mut checked = self.checked_ids();
        if !checked.remove(&id) {
            checked.insert(id);
        }
        self.selection.reconcile_page(self.current_page, &ids, &checked);
        self.status_line = None;
        self.mark_dirty();
    }

    /// Toggle the whole page: all checked if any row is unchecked, all
    /// unchecked otherwise (the header checkbox).
    pub fn toggle_page(&mut self) {
        if self.artworks.is_empty() {
            return;
        }
        let ids = self.current_page_ids();
        let checked = self.checked_ids();
        let new_checked: HashSet<ArtworkId> = if checked.len() == ids.len() {
            HashSet::new()
        } else {
            ids.iter().copied().collect()
        };
        self.selection.reconcile_page(self.current_page, &ids, &new_checked);
        self.status_line = None;
        self.mark_dirty();
    }

    /// Open the bulk-select dialog.
    pub fn open_bulk_overlay(&mut self) {
        self.overlay = Some(BulkSelectOverlay::new());
        self.mark_dirty();
    }

    /// Close the bulk-select dialog without applying.
    pub fn close_bulk_overlay(&mut self) {
        self.overlay = None;
        self.mark_dirty();
    }

    /// Submit the bulk-select dialog.
    ///
    /// Invalid input never reaches the store: the overlay keeps itself open
    /// with an inline message instead.
    pub fn submit_bulk_overlay(&mut self) {
        let Some(count) = self.overlay.as_mut().and_then(|o| o.parse_count()) else {
            self.mark_dirty();
            return;
        };

        let ids = self.current_page_ids();
        match self
            .selection
            .apply_bulk_select(count, self.current_page, &ids)
        {
            Ok(()) => {
                self.overlay = None;
                self.status_line = Some(format!(
                    "First {} rows will be selected as you navigate pages",
                    count
                ));
            }
            Err(err) => {
                // Unreachable through parse_count, but keep the dialog honest
                if let Some(ref mut overlay) = self.overlay {
                    overlay.error = Some(err.to_string());
                }
            }
        }
        self.mark_dirty();
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        self.selection.clear_all();
        self.status_line = None;
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockFetcher;

    fn test_app(total: u64) -> App {
        let config = AppConfig::default();
        let fetcher = Arc::new(MockFetcher::with_collection(total, config.page_size));
        App::new(config, fetcher)
    }

    fn load_page(app: &mut App, page: u32, total: u64) {
        let fetcher = MockFetcher::with_collection(total, app.config.page_size);
        let data = futures::executor::block_on(async {
            use crate::traits::PageFetcher;
            fetcher.fetch_page(page, app.config.page_size).await.unwrap()
        });
        app.fetch_seq += 1;
        app.handle_message(AppMessage::PageLoaded {
            seq: app.fetch_seq,
            page,
            data,
        });
    }

    #[test]
    fn test_new_app_starts_loading() {
        let app = test_app(100);
        assert_eq!(app.screen, Screen::Loading);
        assert!(!app.should_quit);
        assert_eq!(app.total_selected_count(), 0);
    }

    #[test]
    fn test_page_load_populates_table_and_observes() {
        let mut app = test_app(100);
        load_page(&mut app, 1, 100);

        assert_eq!(app.screen, Screen::Browse);
        assert_eq!(app.artworks.len(), 12);
        assert_eq!(app.total_records, 100);
        assert_eq!(app.total_pages, 9);
    }

    #[test]
    fn test_stale_page_response_is_discarded() {
        let mut app = test_app(100);
        load_page(&mut app, 1, 100);
        let before = app.artworks.clone();

        // A result from a superseded fetch arrives late
        let fetcher = MockFetcher::with_collection(100, app.config.page_size);
        let data = futures::executor::block_on(async {
            use crate::traits::PageFetcher;
            fetcher.fetch_page(2, app.config.page_size).await.unwrap()
        });
        app.handle_message(AppMessage::PageLoaded {
            seq: app.fetch_seq - 1,
            page: 2,
            data,
        });

        assert_eq!(app.current_page, 1);
        assert_eq!(app.artworks, before);
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut app = test_app(100);
        load_page(&mut app, 1, 100);

        app.handle_message(AppMessage::PageFailed {
            seq: app.fetch_seq - 1,
            page: 2,
            error: crate::error::FetchError::HttpStatus { status: 500 },
        });

        assert_eq!(app.screen, Screen::Browse);
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_fetch_failure_keeps_store_and_page() {
        let mut app = test_app(100);
        load_page(&mut app, 1, 100);
        app.toggle_cursor_row();
        let selected_before = app.total_selected_count();

        app.fetch_seq += 1;
        app.handle_message(AppMessage::PageFailed {
            seq: app.fetch_seq,
            page: 2,
            error: crate::error::FetchError::HttpStatus { status: 503 },
        });

        assert_eq!(app.screen, Screen::FetchFailed);
        assert!(app.error_message.is_some());
        assert_eq!(app.total_selected_count(), selected_before);
        assert_eq!(app.artworks.len(), 12);

        app.dismiss_error();
        assert_eq!(app.screen, Screen::Browse);
    }

    #[test]
    fn test_toggle_cursor_row_roundtrip() {
        let mut app = test_app(100);
        load_page(&mut app, 1, 100);

        app.toggle_cursor_row();
        assert_eq!(app.total_selected_count(), 1);
        assert!(app.checked_ids().contains(&app.artworks[0].id));

        app.toggle_cursor_row();
        assert_eq!(app.total_selected_count(), 0);
    }

    #[test]
    fn test_toggle_page_checks_then_unchecks_all() {
        let mut app = test_app(100);
        load_page(&mut app, 1, 100);

        app.toggle_page();
        assert_eq!(app.checked_ids().len(), 12);
        assert_eq!(app.total_selected_count(), 12);

        app.toggle_page();
        assert_eq!(app.total_selected_count(), 0);
    }

    #[test]
    fn test_bulk_overlay_flow() {
        let mut app = test_app(100);
        load_page(&mut app, 1, 100);

        app.open_bulk_overlay();
        for d in ['2', '0'] {
            app.overlay.as_mut().unwrap().push_digit(d);
        }
        app.submit_bulk_overlay();

        assert!(app.overlay.is_none());
        assert_eq!(app.total_selected_count(), 20);
        assert!(app
            .status_line
            .as_deref()
            .unwrap()
            .contains("First 20 rows"));
    }

    #[test]
    fn test_bulk_overlay_rejects_zero_without_touching_store() {
        let mut app = test_app(100);
        load_page(&mut app, 1, 100);

        app.open_bulk_overlay();
        app.overlay.as_mut().unwrap().push_digit('0');
        app.submit_bulk_overlay();

        assert!(app.overlay.is_some());
        assert!(app.overlay.as_ref().unwrap().error.is_some());
        assert_eq!(app.total_selected_count(), 0);
        assert_eq!(app.selection.bulk_threshold(), 0);
    }

    #[test]
    fn test_cursor_is_clamped_on_short_page() {
        let mut app = test_app(100);
        load_page(&mut app, 1, 100);
        for _ in 0..11 {
            app.cursor_down();
        }
        assert_eq!(app.cursor, 11);

        // Last page has 100 - 8*12 = 4 records
        load_page(&mut app, 9, 100);
        assert_eq!(app.cursor, 3);
    }

    #[test]
    fn test_clear_selection() {
        let mut app = test_app(100);
        load_page(&mut app, 1, 100);
        app.open_bulk_overlay();
        app.overlay.as_mut().unwrap().push_digit('9');
        app.submit_bulk_overlay();
        assert_eq!(app.total_selected_count(), 9);

        app.clear_selection();
        assert_eq!(app.total_selected_count(), 0);
        assert!(app.checked_ids().is_empty());
    }
}
