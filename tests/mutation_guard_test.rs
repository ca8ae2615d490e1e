//! Duplicate-submission guard.
//!
//! The UI never disables keys while a request is in flight, so a
//! double-pressed update (or delete, or import) would submit twice
//! without a guard. Every mutating action claims an action key before
//! sending; a second claim of the same key fails until the response
//! releases it.

use admintui::model::{ActionKey, OpsModel};

#[test]
fn double_press_cannot_claim_the_same_action_twice() {
    let mut ops = OpsModel::new();

    assert!(ops.begin(ActionKey::Update(7)));
    assert!(!ops.begin(ActionKey::Update(7)));
}

#[test]
fn response_releases_the_action_for_a_retry() {
    let mut ops = OpsModel::new();

    assert!(ops.begin(ActionKey::Delete(3)));
    ops.finish(&ActionKey::Delete(3));
    assert!(ops.begin(ActionKey::Delete(3)));
}

#[test]
fn guards_are_per_record_not_global() {
    let mut ops = OpsModel::new();

    assert!(ops.begin(ActionKey::Update(1)));
    // A different record can be updated concurrently
    assert!(ops.begin(ActionKey::Update(2)));
    // And unrelated actions are unaffected
    assert!(ops.begin(ActionKey::Add));
    assert!(ops.begin(ActionKey::BatchDelete));
    assert!(ops.begin(ActionKey::Import));

    assert!(ops.is_in_flight(&ActionKey::Update(1)));
    assert!(ops.is_in_flight(&ActionKey::Update(2)));
    assert!(ops.any_in_flight());
}

#[test]
fn failure_also_releases_the_guard() {
    // The response handler calls finish() on both the success and the
    // failure paths; this is the model-level contract it relies on.
    let mut ops = OpsModel::new();

    assert!(ops.begin(ActionKey::Import));
    ops.finish(&ActionKey::Import);
    assert!(!ops.is_in_flight(&ActionKey::Import));
    assert!(!ops.any_in_flight());
}
