//! Shared types for the authorization catalog service
//!
//! Common types used across crates: data models for the permission and role
//! catalogs, the unified error system, and API response structures.

pub mod error;
pub mod models;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::{
    Permission, PermissionCreate, PermissionUpdate, Role, RoleCreate, RoleUpdate, Status,
};
