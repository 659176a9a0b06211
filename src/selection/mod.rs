//! Cross-page selection for the paginated artwork table.
//!
//! Selection state must survive page navigation without ever holding more
//! than the pages actually visited. Three kinds of user intent compose here:
//!
//! - **Explicit toggles**: checking or unchecking a single row.
//! - **Bulk range selection**: "select the first N rows across all pages",
//!   applied lazily as pages are visited.
//! - **Overrides**: unchecking a row that the bulk rule would select.
//!
//! # Architecture
//!
//! The `store` module holds the state machine ([`SelectionStore`]): the
//! explicit set, the bulk threshold, the override set, and a grow-only cache
//! of bulk-range ids observed so far. The `projector` module derives what the
//! UI needs from it: the checked ids for the visible page and the total
//! selected count, which is computed in closed form rather than by visiting
//! pages.
//!
//! # Usage
//!
//! ```ignore
//! use gallerist::selection::{page_selection, total_selected, SelectionStore};
//!
//! let mut store = SelectionStore::new(12);
//!
//! // A page of records arrives
//! store.observe_page(1, &ids);
//!
//! // Render checkboxes
//! let checked = page_selection(&store, 1, &ids);
//!
//! // The user changes the page's checkboxes
//! store.reconcile_page(1, &ids, &new_checked);
//!
//! // "Select the first 50 rows"
//! store.apply_bulk_select(50, 1, &ids)?;
//! assert_eq!(total_selected(&store), 50);
//! ```

mod index;
mod projector;
mod store;

pub use index::global_row_index;
pub use projector::{page_selection, total_selected};
pub use store::SelectionStore;
