//! Stale fetch responses must not win.
//!
//! Scenario: the user flips pages quickly. The fetch for page 2 is
//! still in flight when the fetch for page 3 is issued. If the page 2
//! response arrives last, applying it would render stale rows over the
//! newer page. There is no request cancellation; instead every fetch
//! gets a monotonically increasing sequence number and only the
//! response carrying the latest one is applied.

use admintui::api::{PageEnvelope, Record};
use admintui::model::{OpsModel, RecordsModel};

fn envelope(ids: &[i64]) -> PageEnvelope {
    PageEnvelope {
        data: ids
            .iter()
            .map(|&id| Record {
                id,
                name: format!("user-{}", id),
                email: format!("user-{}@example.com", id),
            })
            .collect(),
        page: 1,
        per_page: 10,
        total: 30,
    }
}

#[test]
fn older_response_is_recognized_as_stale() {
    let mut ops = OpsModel::new();

    let page2_seq = ops.next_fetch_seq();
    let page3_seq = ops.next_fetch_seq();

    assert!(!ops.is_current_fetch(page2_seq));
    assert!(ops.is_current_fetch(page3_seq));
}

#[test]
fn applying_only_current_responses_keeps_the_newest_page() {
    let mut ops = OpsModel::new();
    let mut records = RecordsModel::new();

    let page2_seq = ops.next_fetch_seq();
    let page3_seq = ops.next_fetch_seq();

    // Page 3 response arrives first and is current
    if ops.is_current_fetch(page3_seq) {
        records.apply_page(envelope(&[21, 22, 23]));
    }

    // Page 2 response arrives late and must be discarded
    if ops.is_current_fetch(page2_seq) {
        records.apply_page(envelope(&[11, 12, 13]));
    }

    let ids: Vec<i64> = records.rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![21, 22, 23]);
}

#[test]
fn a_new_fetch_supersedes_even_an_unanswered_one() {
    let mut ops = OpsModel::new();

    let first = ops.next_fetch_seq();
    assert!(ops.is_current_fetch(first));

    // Refresh issued before the first response came back
    let second = ops.next_fetch_seq();
    assert!(!ops.is_current_fetch(first));
    assert!(ops.is_current_fetch(second));
}
