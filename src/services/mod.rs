//! External Services
//!
//! Services that talk to the outside world:
//! - api: background request queue for the records backend

pub mod api;

// Re-export commonly used types for convenience
pub use api::{ApiRequest, ApiResponse, Priority};
