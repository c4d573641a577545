//! Store Module
//!
//! The catalog does not own persistence: it talks to injected
//! [`PermissionStore`]/[`RoleStore`] collaborators. The in-memory
//! implementation in [`memory`] is the default backing; a real database
//! plugs in behind the same traits.

pub mod memory;

pub use memory::{MemoryPermissionStore, MemoryRoleStore};

use async_trait::async_trait;
use shared::models::{Permission, Role};
use thiserror::Error;

/// Store error types
///
/// Stores report only transport/backend failures; domain rules (uniqueness,
/// referential integrity, protection flags) live in the catalog layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence seam for the permission catalog
///
/// `list` must return permissions in stable insertion order; `put` upserts
/// by `code` and keeps the original position on replace.
#[async_trait]
pub trait PermissionStore: Send + Sync {
    async fn get(&self, code: &str) -> StoreResult<Option<Permission>>;
    async fn list(&self) -> StoreResult<Vec<Permission>>;
    async fn put(&self, permission: Permission) -> StoreResult<()>;
    /// Returns true if an entry was removed
    async fn delete(&self, code: &str) -> StoreResult<bool>;
}

/// Persistence seam for the role catalog, same shape as [`PermissionStore`]
#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn get(&self, code: &str) -> StoreResult<Option<Role>>;
    async fn list(&self) -> StoreResult<Vec<Role>>;
    async fn put(&self, role: Role) -> StoreResult<()>;
    /// Returns true if an entry was removed
    async fn delete(&self, code: &str) -> StoreResult<bool>;
}
