//! App impl modules
//!
//! The `App` struct lives in main.rs; its behavior is split here by
//! concern:
//! - mutations: validated, guarded submit paths for every mutating
//!   action, plus the export hand-off
//! - refresh: fetch triggering, page/per-page transitions, filter
//!   debouncing, view persistence

pub mod mutations;
pub mod refresh;
