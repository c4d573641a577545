//! Catalog Module
//!
//! Owns the permission catalog, the role catalog, and the assignment
//! relation between them:
//!
//! - [`PermissionCatalog`] / [`RoleCatalog`] — per-entity read/write logic
//!   over the injected stores
//! - [`CatalogService`] — the assignment/consistency engine; the single
//!   mutation entry point enforcing cross-catalog invariants
//! - [`query`] — read-only façade for presentation layers
//! - [`seed`] — the built-in permission/role catalog
//!
//! All validation failures are typed results; the catalog never panics on
//! bad input and never formats user-facing prose beyond the error messages
//! carried here.

pub mod modules;
pub mod permissions;
pub mod query;
pub mod roles;
pub mod seed;
pub mod service;

pub use permissions::{PermissionCatalog, PermissionFilter, PermissionGroup};
pub use query::{ModuleSummary, PermissionGrant, RolePermissionMatrix};
pub use roles::{RoleCatalog, RoleFilter};
pub use service::CatalogService;

use crate::store::StoreError;
use thiserror::Error;

/// Catalog error types
///
/// One variant per consistency rule; the API layer maps these onto
/// [`shared::ErrorCode`] values.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Code '{0}' already exists")]
    DuplicateCode(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Unknown permission code '{0}'")]
    UnknownPermission(String),

    #[error("Permission '{0}' is a system permission and cannot be deleted")]
    SystemPermissionProtected(String),

    #[error("Role '{0}' is a system role and cannot be deleted or stripped of permissions")]
    SystemRoleProtected(String),

    #[error("Permission '{code}' is still referenced by {} role(s)", .roles.len())]
    PermissionInUse { code: String, roles: Vec<String> },

    #[error("Role '{code}' is still assigned to {user_count} user(s)")]
    RoleInUse { code: String, user_count: u32 },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
