//! Pure selection queries over the store and the visible page.
//!
//! Two read-only projections: which rows of the visible page are checked,
//! and how many records are selected across the whole collection. Neither
//! mutates the store, and the total never requires fetching a page.

use std::collections::HashSet;

use crate::models::ArtworkId;

use super::index::global_row_index;
use super::store::SelectionStore;

/// Ids of the visible page that should render checked.
///
/// Pure query; the caller is responsible for calling
/// [`SelectionStore::observe_page`] when the page lands, keeping "page became
/// visible" bookkeeping apart from checkbox computation.
///
/// # Arguments
/// * `store` - The selection store
/// * `page` - One-based page number of the visible page
/// * `ids` - Record ids of the visible page, in page order
pub fn page_selection(
    store: &SelectionStore,
    page: u32,
    ids: &[ArtworkId],
) -> HashSet<ArtworkId> {
    ids.iter()
        .enumerate()
        .filter(|(position, &id)| {
            store.is_selected(id, global_row_index(page, store.page_size(), *position))
        })
        .map(|(_, &id)| id)
        .collect()
}

/// Total number of selected records across all pages.
///
/// Every global row index in `[1, threshold]` counts unless individually
/// overridden; explicit selections count only when not already inside the
/// observed bulk membership (which would double count). Overrides can only
/// exist for observed ids, so the formula is exact without materializing a
/// single unfetched page. With no bulk rule this is just the explicit count.
pub fn total_selected(store: &SelectionStore) -> u64 {
    let explicit_outside_bulk = store
        .explicit
        .iter()
        .filter(|id| !store.bulk_seen.contains(id))
        .count() as u64;

    if store.bulk_threshold == 0 {
        return explicit_outside_bulk;
    }

    store.bulk_threshold - store.bulk_excluded.len() as u64 + explicit_outside_bulk
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_SIZE: u32 = 12;

    fn page_ids(page: u32, len: usize) -> Vec<ArtworkId> {
        let start = (page as u64 - 1) * PAGE_SIZE as u64;
        (0..len as u64).map(|i| 100 + start + i).collect()
    }

    #[test]
    fn test_page_selection_empty_store() {
        let store = SelectionStore::new(PAGE_SIZE);
        assert!(page_selection(&store, 1, &page_ids(1, 12)).is_empty());
    }

    #[test]
    fn test_page_selection_mixes_bulk_and_explicit() {
        let mut store = SelectionStore::new(PAGE_SIZE);
        let page1 = page_ids(1, 12);
        let page2 = page_ids(2, 12);

        store.apply_bulk_select(14, 1, &page1).unwrap();
        // Explicitly select one row deep into page 2
        store.observe_page(2, &page2);
        let mut sel = page_selection(&store, 2, &page2);
        sel.insert(page2[10]);
        store.reconcile_page(2, &page2, &sel);

        let checked = page_selection(&store, 2, &page2);
        // gi 13, 14 from the bulk range plus the explicit row
        assert!(checked.contains(&page2[0]));
        assert!(checked.contains(&page2[1]));
        assert!(checked.contains(&page2[10]));
        assert_eq!(checked.len(), 3);
    }

    #[test]
    fn test_total_without_bulk_rule_counts_explicit() {
        let mut store = SelectionStore::new(PAGE_SIZE);
        let ids = page_ids(1, 12);
        let sel: HashSet<ArtworkId> = [ids[0], ids[3], ids[7]].into_iter().collect();
        store.reconcile_page(1, &ids, &sel);

        assert_eq!(total_selected(&store), 3);
    }

    #[test]
    fn test_total_does_not_double_count_bulk_explicit() {
        let mut store = SelectionStore::new(PAGE_SIZE);
        let ids = page_ids(1, 12);
        // Visible in-range rows become explicit AND observed members
        store.apply_bulk_select(20, 1, &ids).unwrap();

        assert_eq!(total_selected(&store), 20);
    }

    #[test]
    fn test_total_threshold_may_exceed_collection() {
        // Count is computable before any page beyond the first is fetched,
        // even when the threshold exceeds the collection size.
        let mut store = SelectionStore::new(PAGE_SIZE);
        store.apply_bulk_select(1000, 1, &page_ids(1, 12)).unwrap();
        assert_eq!(total_selected(&store), 1000);
    }
}
