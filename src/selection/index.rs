//! Global row index arithmetic.
//!
//! A record's global row index is its 1-based rank in the page-concatenated
//! collection. It is only meaningful relative to a fixed page size and is
//! always recomputed from page number + position, never stored per record.

/// Compute the 1-based global row index of a record.
///
/// # Arguments
/// * `page` - One-based page number (must be ≥ 1)
/// * `page_size` - Records per page
/// * `position` - Zero-based position of the record within its page
pub fn global_row_index(page: u32, page_size: u32, position: usize) -> u64 {
    debug_assert!(page >= 1, "page numbers are one-based");
    (page as u64 - 1) * page_size as u64 + position as u64 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_record_of_first_page() {
        assert_eq!(global_row_index(1, 12, 0), 1);
    }

    #[test]
    fn test_last_record_of_first_page() {
        assert_eq!(global_row_index(1, 12, 11), 12);
    }

    #[test]
    fn test_first_record_of_later_page() {
        assert_eq!(global_row_index(2, 12, 0), 13);
        assert_eq!(global_row_index(5, 12, 0), 49);
    }

    #[test]
    fn test_depends_on_page_size() {
        assert_eq!(global_row_index(3, 10, 4), 25);
        assert_eq!(global_row_index(3, 12, 4), 29);
    }
}
