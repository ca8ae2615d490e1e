//! Pagination bound behavior.
//!
//! Navigation must be a no-op at the edges: previous on page 1 and
//! next on the last page change nothing (and therefore trigger no
//! fetch — the app layer only refetches when the transition reports a
//! change). Result-set-shape changes (page size, filters) reset the
//! page to 1, and a page left beyond the end after deletions clamps
//! back into range.

use admintui::logic::paging;
use admintui::model::{FilterColumn, ViewModel};

#[test]
fn prev_on_first_page_is_a_no_op() {
    let mut view = ViewModel::new(1, 10);
    assert!(!view.prev_page());
    assert_eq!(view.page, 1);
}

#[test]
fn next_on_last_page_is_a_no_op() {
    // 42 records at 10/page -> 5 pages
    let mut view = ViewModel::new(5, 10);
    assert!(!view.next_page(42));
    assert_eq!(view.page, 5);
}

#[test]
fn next_walks_to_the_last_page_and_stops() {
    let mut view = ViewModel::new(1, 10);
    let mut moves = 0;
    while view.next_page(42) {
        moves += 1;
    }
    assert_eq!(moves, 4);
    assert_eq!(view.page, 5);
}

#[test]
fn next_is_blocked_on_an_empty_data_set() {
    let mut view = ViewModel::new(1, 10);
    assert!(!view.next_page(0));
    assert_eq!(view.page, 1);
}

#[test]
fn per_page_change_resets_to_page_one() {
    let mut view = ViewModel::new(4, 10);
    view.cycle_per_page();
    assert_eq!(view.page, 1);
    assert_eq!(view.per_page, 25);
}

#[test]
fn filter_edit_resets_to_page_one() {
    let mut view = ViewModel::new(4, 10);
    view.set_filter(FilterColumn::Email, "@example.com".to_string());
    assert_eq!(view.page, 1);
}

#[test]
fn overflowed_page_clamps_to_new_last_page() {
    // User was on page 5 of 5; deletions shrank the set to 23 records,
    // so only 3 pages remain.
    assert_eq!(paging::clamp_page(5, 23, 10), 3);
}

#[test]
fn shown_row_count_matches_the_envelope_slicing() {
    // For all valid pages, the server returns
    // min(per_page, total - (page-1)*per_page) rows.
    let total = 42;
    let per_page = 10;
    for page in 1..=paging::total_pages(total, per_page) {
        let expected = std::cmp::min(per_page, total - (page - 1) * per_page);
        assert_eq!(paging::rows_on_page(total, page, per_page), expected);
    }
}
