//! Selection state management.
//!
//! [`SelectionStore`] holds every fact about what the user has selected
//! across the paginated collection:
//!
//! - ids selected one by one (`explicit`)
//! - the active bulk rule "every record with global row index ≤ N"
//!   (`bulk_threshold`, 0 when no rule is active)
//! - per-record overrides unchecking rows inside the bulk range
//!   (`bulk_excluded`)
//! - the ids observed so far that fall inside the bulk range (`bulk_seen`)
//!
//! The store is pure data plus transition functions; it performs no I/O and
//! none of its transitions can fail over their documented domains. Memory
//! stays bounded because `bulk_excluded` and `bulk_seen` only ever contain
//! ids from pages that were actually fetched.

use std::collections::HashSet;

use crate::error::BulkSelectError;
use crate::models::ArtworkId;

use super::index::global_row_index;

/// All selection facts for one browsing session.
///
/// The page size is fixed at construction: global row index arithmetic is
/// only meaningful relative to a single page size, so a store never mixes
/// pages of different sizes.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    page_size: u32,
    /// Ids the user selected one-by-one (outside or overriding the bulk rule)
    pub(super) explicit: HashSet<ArtworkId>,
    /// Select every record whose global row index is ≤ this; 0 = no rule
    pub(super) bulk_threshold: u64,
    /// Ids inside the bulk range the user individually unchecked
    pub(super) bulk_excluded: HashSet<ArtworkId>,
    /// Ids observed so far whose global row index is ≤ the threshold.
    /// A grow-only cache over observed pages, never a source of truth.
    pub(super) bulk_seen: HashSet<ArtworkId>,
}

impl SelectionStore {
    /// Create an empty store for the given page size.
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            explicit: HashSet::new(),
            bulk_threshold: 0,
            bulk_excluded: HashSet::new(),
            bulk_seen: HashSet::new(),
        }
    }

    /// The fixed page size this store computes global row indices with.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// The active bulk threshold (0 when no bulk rule is active).
    pub fn bulk_threshold(&self) -> u64 {
        self.bulk_threshold
    }

    /// Record the ids of a newly rendered page.
    ///
    /// Every id whose global row index falls inside the active bulk range is
    /// added to the observed-membership cache. Side effect only; never
    /// removes ids. Call this once whenever a page lands, so later queries
    /// can answer "has this bulk-range id been seen".
    ///
    /// # Arguments
    /// * `page` - One-based page number the ids came from
    /// * `ids` - Record ids in page order
    pub fn observe_page(&mut self, page: u32, ids: &[ArtworkId]) {
        if self.bulk_threshold == 0 {
            return;
        }
        for (position, &id) in ids.iter().enumerate() {
            if global_row_index(page, self.page_size, position) <= self.bulk_threshold {
                self.bulk_seen.insert(id);
            }
        }
    }

    /// Selection predicate for a single record.
    ///
    /// A record is selected when it was explicitly selected, or when it falls
    /// inside the bulk range and was not individually unchecked.
    pub fn is_selected(&self, id: ArtworkId, global_index: u64) -> bool {
        let in_bulk_range = self.bulk_threshold > 0 && global_index <= self.bulk_threshold;
        self.explicit.contains(&id) || (in_bulk_range && !self.bulk_excluded.contains(&id))
    }

    /// Reconcile the visible page's checkbox state with the store.
    ///
    /// `selected` is the complete new selected-id set for the page, not a
    /// diff. Checking a row makes it explicit and clears any override;
    /// unchecking removes it from the explicit set and, when the row sits
    /// inside the bulk range, records an override. Idempotent per id; record
    /// order does not matter.
    ///
    /// # Arguments
    /// * `page` - One-based page number being reconciled
    /// * `ids` - Record ids of the page, in page order
    /// * `selected` - The complete new selected-id set for that page
    pub fn reconcile_page(
        &mut self,
        page: u32,
        ids: &[ArtworkId],
        selected: &HashSet<ArtworkId>,
    ) {
        for (position, &id) in ids.iter().enumerate() {
            let global_index = global_row_index(page, self.page_size, position);
            let in_bulk_range = self.bulk_threshold > 0 && global_index <= self.bulk_threshold;

            if selected.contains(&id) {
                self.explicit.insert(id);
                self.bulk_excluded.remove(&id);
            } else {
                self.explicit.remove(&id);
                if in_bulk_range {
                    self.bulk_excluded.insert(id);
                }
            }
        }
    }

    /// Activate the bulk rule "select the first `count` records".
    ///
    /// Rejects `count == 0` with no state change. A fresh rule supersedes the
    /// previous one: overrides and observed membership are reset, while
    /// explicit selections are kept. Records of the visible page that fall
    /// inside the new range become explicit immediately; records on unfetched
    /// pages stay implicitly selected through the threshold until their page
    /// is observed.
    ///
    /// # Arguments
    /// * `count` - The bulk threshold, must be ≥ 1
    /// * `page` - One-based number of the currently visible page
    /// * `ids` - Record ids of the visible page, in page order
    pub fn apply_bulk_select(
        &mut self,
        count: u64,
        page: u32,
        ids: &[ArtworkId],
    ) -> Result<(), BulkSelectError> {
        if count == 0 {
            return Err(BulkSelectError::InvalidCount);
        }

        self.bulk_threshold = count;
        self.bulk_excluded.clear();
        self.bulk_seen.clear();

        for (position, &id) in ids.iter().enumerate() {
            if global_row_index(page, self.page_size, position) <= count {
                self.explicit.insert(id);
                self.bulk_seen.insert(id);
            }
        }

        Ok(())
    }

    /// Reset every field to its empty state.
    pub fn clear_all(&mut self) {
        self.explicit.clear();
        self.bulk_threshold = 0;
        self.bulk_excluded.clear();
        self.bulk_seen.clear();
    }
}
