//! Pure business logic
//!
//! Side-effect-free helpers shared by the handlers and the UI:
//! - errors: transport error classification and formatting
//! - paging: page counts, bounds, and clamping
//! - query: listing/export query parameter composition
//! - ui: toast timing and display-width text helpers
//! - validate: local input validation (the checks that block a request
//!   before any network call)

pub mod errors;
pub mod paging;
pub mod query;
pub mod ui;
pub mod validate;
