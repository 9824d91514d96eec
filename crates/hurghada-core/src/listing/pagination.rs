//! Page arithmetic for trip listings.

use serde::Serialize;

/// Resolved position within a paginated listing.
///
/// Requested pages outside `1..=total_pages` are clamped, so a stale page
/// number (for example after a filter shrank the list) still lands on a real
/// page. An empty listing has a single, empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl PageInfo {
    /// Computes page info; a `per_page` of zero is treated as one.
    pub fn new(total_items: usize, per_page: usize, requested_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages =
            (total_items / per_page + usize::from(total_items % per_page != 0)).max(1);
        let page = requested_page.clamp(1, total_pages);
        Self {
            page,
            per_page,
            total_items,
            total_pages,
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Index range of the items on this page.
    pub fn item_range(&self) -> std::ops::Range<usize> {
        let start = self.offset().min(self.total_items);
        let end = start.saturating_add(self.per_page).min(self.total_items);
        start..end
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Up to `max_links` consecutive page numbers around the current page.
    ///
    /// The window is centred on the current page where possible and shifted
    /// at either end so it always holds `min(max_links, total_pages)` pages.
    pub fn window(&self, max_links: usize) -> Vec<usize> {
        let len = max_links.min(self.total_pages);
        if len == 0 {
            return Vec::new();
        }

        let start = self.page.saturating_sub(len / 2).max(1);
        let start = start.min(self.total_pages - len + 1);
        (start..start + len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(PageInfo::new(10, 3, 1).total_pages, 4);
        assert_eq!(PageInfo::new(9, 3, 1).total_pages, 3);
        assert_eq!(PageInfo::new(0, 3, 1).total_pages, 1);
    }

    #[test]
    fn test_requested_page_is_clamped() {
        assert_eq!(PageInfo::new(10, 3, 0).page, 1);
        assert_eq!(PageInfo::new(10, 3, 99).page, 4);
    }

    #[test]
    fn test_item_range() {
        assert_eq!(PageInfo::new(10, 3, 4).item_range(), 9..10);
        assert_eq!(PageInfo::new(10, 3, 2).item_range(), 3..6);
        assert_eq!(PageInfo::new(0, 3, 1).item_range(), 0..0);
    }

    #[test]
    fn test_previous_and_next() {
        let first = PageInfo::new(10, 3, 1);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = PageInfo::new(10, 3, 4);
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn test_window_is_centred_and_shifted_at_edges() {
        assert_eq!(PageInfo::new(100, 10, 5).window(5), vec![3, 4, 5, 6, 7]);
        assert_eq!(PageInfo::new(100, 10, 1).window(5), vec![1, 2, 3, 4, 5]);
        assert_eq!(PageInfo::new(100, 10, 10).window(5), vec![6, 7, 8, 9, 10]);
        assert_eq!(PageInfo::new(100, 10, 5).window(4), vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_window_smaller_than_limit() {
        assert_eq!(PageInfo::new(20, 10, 2).window(5), vec![1, 2]);
        assert!(PageInfo::new(20, 10, 2).window(0).is_empty());
    }

    #[test]
    fn test_zero_per_page_treated_as_one() {
        let info = PageInfo::new(3, 0, 2);
        assert_eq!(info.per_page, 1);
        assert_eq!(info.total_pages, 3);
    }

    #[test]
    fn test_huge_per_page_does_not_overflow() {
        let info = PageInfo::new(2, usize::MAX, 1);
        assert_eq!(info.total_pages, 1);
        assert_eq!(info.item_range(), 0..2);
        assert!(!info.has_next());
    }
}
