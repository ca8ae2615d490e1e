//! Pagination arithmetic.
//!
//! Pure functions for page counts and bounds. Pages are 1-based
//! throughout; an empty data set still has one (empty) page so the
//! current page never drops below 1.

/// Number of pages needed for `total` records at `per_page` each.
/// Never less than 1.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 1;
    }
    std::cmp::max(1, total.div_ceil(per_page))
}

pub fn can_prev(page: u64) -> bool {
    page > 1
}

pub fn can_next(page: u64, total: u64, per_page: u64) -> bool {
    page < total_pages(total, per_page)
}

/// Clamp a page into the valid range for `total` records. Used after a
/// refetch: deleting the last rows of the last page can leave the
/// current page past the end.
pub fn clamp_page(page: u64, total: u64, per_page: u64) -> u64 {
    page.clamp(1, total_pages(total, per_page))
}

/// Number of rows the server will return for this page.
pub fn rows_on_page(total: u64, page: u64, per_page: u64) -> u64 {
    let skipped = (page.saturating_sub(1)).saturating_mul(per_page);
    std::cmp::min(per_page, total.saturating_sub(skipped))
}

/// 1-based inclusive (first, last) record positions shown on this page,
/// or None when there is nothing to show.
pub fn shown_range(total: u64, page: u64, per_page: u64) -> Option<(u64, u64)> {
    let rows = rows_on_page(total, page, per_page);
    if rows == 0 {
        return None;
    }
    let first = (page - 1) * per_page + 1;
    Some((first, first + rows - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(100, 25), 4);
        assert_eq!(total_pages(101, 25), 5);
    }

    #[test]
    fn total_pages_survives_zero_per_page() {
        assert_eq!(total_pages(50, 0), 1);
    }

    #[test]
    fn bounds_block_navigation_at_edges() {
        // 42 records, 10 per page -> 5 pages
        assert!(!can_prev(1));
        assert!(can_prev(2));
        assert!(can_next(4, 42, 10));
        assert!(!can_next(5, 42, 10));
        // Empty data set: single empty page, both directions blocked
        assert!(!can_prev(1));
        assert!(!can_next(1, 0, 10));
    }

    #[test]
    fn clamp_pulls_overflow_page_back_into_range() {
        // Was on page 5 of 5; enough rows deleted that only 3 remain
        assert_eq!(clamp_page(5, 25, 10), 3);
        assert_eq!(clamp_page(2, 0, 10), 1);
        assert_eq!(clamp_page(0, 25, 10), 1);
        assert_eq!(clamp_page(2, 25, 10), 2);
    }

    #[test]
    fn rows_on_page_matches_server_slicing() {
        assert_eq!(rows_on_page(42, 1, 10), 10);
        assert_eq!(rows_on_page(42, 5, 10), 2);
        assert_eq!(rows_on_page(42, 6, 10), 0);
        assert_eq!(rows_on_page(0, 1, 10), 0);
        assert_eq!(rows_on_page(10, 1, 25), 10);
    }

    #[test]
    fn shown_range_is_one_based_inclusive() {
        assert_eq!(shown_range(42, 1, 10), Some((1, 10)));
        assert_eq!(shown_range(42, 5, 10), Some((41, 42)));
        assert_eq!(shown_range(0, 1, 10), None);
    }
}
