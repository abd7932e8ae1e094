//! Page metadata reported to API clients via the `X-Pagination` header.

use serde::Serialize;

/// Page size applied when the client does not request one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
/// Upper bound for client-requested page sizes. Larger requests are
/// clamped, not rejected.
pub const MAX_ITEMS_PER_PAGE: usize = 50;

/// Summary of a paginated result set, computed fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Number of records matching the filters, across all pages.
    pub total_count: usize,
    pub page_size: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageMetadata {
    pub fn new(total_count: usize, current_page: usize, page_size: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };
        let total_pages = total_count.div_ceil(page_size);

        Self {
            total_count,
            page_size,
            current_page,
            total_pages,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        }
    }
}

/// One page of items together with its metadata.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: PageMetadata,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, meta: PageMetadata) -> Self {
        Self { items, meta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_for_a_full_middle_page() {
        let meta = PageMetadata::new(25, 2, 10);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_previous);
        assert!(meta.has_next);
    }

    #[test]
    fn metadata_for_the_last_partial_page() {
        let meta = PageMetadata::new(25, 3, 10);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_previous);
        assert!(!meta.has_next);
    }

    #[test]
    fn metadata_for_an_empty_set() {
        let meta = PageMetadata::new(0, 1, 10);
        assert_eq!(meta.total_count, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_previous);
        assert!(!meta.has_next);
    }

    #[test]
    fn metadata_past_the_last_page() {
        let meta = PageMetadata::new(2, 5, 10);
        assert_eq!(meta.total_pages, 1);
        assert!(meta.has_previous);
        assert!(!meta.has_next);
    }

    #[test]
    fn page_zero_is_treated_as_the_first_page() {
        let meta = PageMetadata::new(12, 0, 10);
        assert_eq!(meta.current_page, 1);
        assert!(!meta.has_previous);
        assert!(meta.has_next);
    }

    #[test]
    fn total_pages_when_count_divides_evenly() {
        let meta = PageMetadata::new(30, 1, 10);
        assert_eq!(meta.total_pages, 3);
    }
}
