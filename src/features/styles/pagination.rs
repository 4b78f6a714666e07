//! Page planning over the catalog's style list

use std::ops::Range;

/// Default page size, also the Discord select menu option cap
pub const DEFAULT_STYLES_PER_PAGE: usize = 25;

/// Which items are on a page and whether navigation exists around it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    pub start: usize,
    pub end: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PagePlan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Plan page `page` of `total` items split into pages of `page_size`.
///
/// Callers are expected to pass a page inside [`page_count`]; anything past the
/// end yields an empty plan rather than an out-of-bounds range.
pub fn plan(total: usize, page_size: usize, page: usize) -> PagePlan {
    debug_assert!(page_size > 0, "page size must be positive");

    let start = page.saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);

    PagePlan {
        start,
        end,
        has_previous: page > 0,
        has_next: end < total,
    }
}

/// Number of pages needed for `total` items; an empty list still has one page
pub fn page_count(total: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0, "page size must be positive");
    total.div_ceil(page_size).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_of_two() {
        assert_eq!(
            plan(30, 25, 0),
            PagePlan {
                start: 0,
                end: 25,
                has_previous: false,
                has_next: true
            }
        );
    }

    #[test]
    fn test_last_partial_page() {
        assert_eq!(
            plan(30, 25, 1),
            PagePlan {
                start: 25,
                end: 30,
                has_previous: true,
                has_next: false
            }
        );
    }

    #[test]
    fn test_exact_fit_has_no_next() {
        let p = plan(25, 25, 0);
        assert_eq!(p.range(), 0..25);
        assert!(!p.has_next);
        assert!(!p.has_previous);
    }

    #[test]
    fn test_middle_page() {
        let p = plan(12, 5, 1);
        assert_eq!(p.range(), 5..10);
        assert!(p.has_previous);
        assert!(p.has_next);
    }

    #[test]
    fn test_empty_list() {
        let p = plan(0, 25, 0);
        assert!(p.is_empty());
        assert!(!p.has_previous);
        assert!(!p.has_next);
    }

    #[test]
    fn test_start_equal_to_total() {
        let p = plan(50, 25, 2);
        assert_eq!(p.range(), 50..50);
        assert!(p.has_previous);
        assert!(!p.has_next);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let p = plan(30, 25, 7);
        assert!(p.is_empty());
        assert!(!p.has_next);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 25), 1);
        assert_eq!(page_count(25, 25), 1);
        assert_eq!(page_count(26, 25), 2);
        assert_eq!(page_count(31, 25), 2);
        assert_eq!(page_count(51, 25), 3);
    }

    #[test]
    fn test_pages_cover_every_item_once() {
        let total = 31;
        let mut seen = Vec::new();
        for page in 0..page_count(total, 25) {
            seen.extend(plan(total, 25, page).range());
        }
        assert_eq!(seen, (0..total).collect::<Vec<_>>());
    }
}
