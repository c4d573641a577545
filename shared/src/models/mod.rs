//! Data models
//!
//! Shared between the catalog service and its API consumers.
//! Entities are keyed by their human-assigned `code` string.

pub mod permission;
pub mod role;

// Re-exports
pub use permission::*;
pub use role::*;
