//! Catalog Service — the assignment/consistency engine
//!
//! Unified entry point for every catalog mutation. Owns both catalogs and
//! serializes mutations through a single async mutex so cross-catalog
//! check-then-act sequences ("does permission X exist" then "attach X to
//! role Y") never interleave; of two racing deletes, the loser observes
//! `NotFound`. Reads go straight through without the lock — mutations leave
//! the catalogs consistent at every release point.

use std::sync::Arc;

use tokio::sync::Mutex;

use super::permissions::{PermissionCatalog, PermissionFilter, PermissionGroup};
use super::roles::{RoleCatalog, RoleFilter};
use super::{CatalogError, CatalogResult};
use crate::store::{PermissionStore, RoleStore};
use shared::models::{Permission, PermissionCreate, PermissionUpdate, Role, RoleCreate, RoleUpdate};

/// Unified permission/role catalog service
#[derive(Clone)]
pub struct CatalogService {
    permissions: PermissionCatalog,
    roles: RoleCatalog,
    role_store: Arc<dyn RoleStore>,
    /// Serializes all mutations (see module docs)
    write_lock: Arc<Mutex<()>>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService").finish_non_exhaustive()
    }
}

impl CatalogService {
    /// Create a new CatalogService over injected stores
    pub fn new(
        permission_store: Arc<dyn PermissionStore>,
        role_store: Arc<dyn RoleStore>,
    ) -> Self {
        Self {
            permissions: PermissionCatalog::new(permission_store),
            roles: RoleCatalog::new(role_store.clone()),
            role_store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// The permission catalog (read paths)
    pub fn permissions(&self) -> &PermissionCatalog {
        &self.permissions
    }

    /// The role catalog (read paths)
    pub fn roles(&self) -> &RoleCatalog {
        &self.roles
    }

    // =========================================================================
    // Permission operations
    // =========================================================================

    pub async fn get_permission(&self, code: &str) -> CatalogResult<Permission> {
        self.permissions.get(code).await
    }

    pub async fn list_permissions(
        &self,
        filter: &PermissionFilter,
    ) -> CatalogResult<Vec<Permission>> {
        self.permissions.list(filter).await
    }

    pub async fn group_permissions(&self) -> CatalogResult<Vec<PermissionGroup>> {
        self.permissions.group_by_module().await
    }

    pub async fn create_permission(&self, data: PermissionCreate) -> CatalogResult<Permission> {
        let _guard = self.write_lock.lock().await;
        self.permissions.create(data).await
    }

    pub async fn update_permission(
        &self,
        code: &str,
        patch: PermissionUpdate,
    ) -> CatalogResult<Permission> {
        let _guard = self.write_lock.lock().await;
        self.permissions.update(code, patch).await
    }

    /// Delete a permission
    ///
    /// Checks run in order: existence, system protection, then referential
    /// integrity — a permission referenced by any role is never deleted
    /// (resolve with [`Self::remove_permission_everywhere`] first).
    pub async fn delete_permission(&self, code: &str) -> CatalogResult<()> {
        let _guard = self.write_lock.lock().await;

        let permission = self.permissions.get(code).await?;
        if permission.is_system {
            return Err(CatalogError::SystemPermissionProtected(code.to_string()));
        }

        let referencing = self.referencing_roles(code).await?;
        if !referencing.is_empty() {
            return Err(CatalogError::PermissionInUse {
                code: code.to_string(),
                roles: referencing,
            });
        }

        self.permissions.delete(code).await
    }

    /// Maintenance cascade: strip a custom permission from every role that
    /// references it, then delete it. Never invoked implicitly.
    ///
    /// Returns the number of roles the permission was removed from. System
    /// permissions stay protected; system roles cannot hold custom
    /// permissions (grants on them are refused), so they are never touched.
    pub async fn remove_permission_everywhere(&self, code: &str) -> CatalogResult<usize> {
        let _guard = self.write_lock.lock().await;

        let permission = self.permissions.get(code).await?;
        if permission.is_system {
            return Err(CatalogError::SystemPermissionProtected(code.to_string()));
        }

        let mut stripped = 0;
        for mut role in self.role_store.list().await? {
            if !role.is_system && role.revoke(code) {
                self.role_store.put(role).await?;
                stripped += 1;
            }
        }

        self.permissions.delete(code).await?;

        tracing::info!(code = %code, roles = stripped, "Permission removed everywhere");
        Ok(stripped)
    }

    // =========================================================================
    // Role operations
    // =========================================================================

    pub async fn get_role(&self, code: &str) -> CatalogResult<Role> {
        self.roles.get(code).await
    }

    pub async fn list_roles(&self, filter: &RoleFilter) -> CatalogResult<Vec<Role>> {
        self.roles.list(filter).await
    }

    /// Create a role after validating that every referenced permission code
    /// exists in the permission catalog
    pub async fn create_role(&self, data: RoleCreate) -> CatalogResult<Role> {
        let _guard = self.write_lock.lock().await;

        self.check_permissions_exist(data.permissions.iter()).await?;
        self.roles.create(data).await
    }

    /// Patch a role; a replacement permission set is re-validated
    pub async fn update_role(&self, code: &str, patch: RoleUpdate) -> CatalogResult<Role> {
        let _guard = self.write_lock.lock().await;

        if let Some(permissions) = &patch.permissions {
            self.check_permissions_exist(permissions.iter()).await?;
        }
        self.roles.update(code, patch).await
    }

    pub async fn delete_role(&self, code: &str) -> CatalogResult<()> {
        let _guard = self.write_lock.lock().await;
        self.roles.delete(code).await
    }

    pub async fn has_permission(
        &self,
        role_code: &str,
        permission_code: &str,
    ) -> CatalogResult<bool> {
        self.roles.has_permission(role_code, permission_code).await
    }

    // =========================================================================
    // Assignment operations
    // =========================================================================

    /// Grant a permission to a role
    ///
    /// Idempotent: granting an already-granted permission succeeds without
    /// changing state. The permission must exist; the role must not be a
    /// system role.
    pub async fn grant_permission(
        &self,
        role_code: &str,
        permission_code: &str,
    ) -> CatalogResult<Role> {
        let _guard = self.write_lock.lock().await;

        if !self.permissions.exists(permission_code).await? {
            return Err(CatalogError::UnknownPermission(permission_code.to_string()));
        }

        let mut role = self.roles.get(role_code).await?;
        if role.is_system {
            return Err(CatalogError::SystemRoleProtected(role_code.to_string()));
        }

        if role.grant(permission_code) {
            self.role_store.put(role.clone()).await?;
            tracing::info!(role = %role_code, permission = %permission_code, "Permission granted");
        }
        Ok(role)
    }

    /// Revoke a permission from a role
    ///
    /// Idempotent: revoking a non-granted permission is a no-op returning
    /// the unchanged role.
    pub async fn revoke_permission(
        &self,
        role_code: &str,
        permission_code: &str,
    ) -> CatalogResult<Role> {
        let _guard = self.write_lock.lock().await;

        let mut role = self.roles.get(role_code).await?;
        if role.is_system {
            return Err(CatalogError::SystemRoleProtected(role_code.to_string()));
        }

        if role.revoke(permission_code) {
            self.role_store.put(role.clone()).await?;
            tracing::info!(role = %role_code, permission = %permission_code, "Permission revoked");
        }
        Ok(role)
    }

    // =========================================================================
    // User-count cache maintenance
    // =========================================================================

    /// Record that a user was assigned this role (bumps the derived
    /// `user_count` cache)
    pub async fn attach_user(&self, role_code: &str) -> CatalogResult<Role> {
        let _guard = self.write_lock.lock().await;

        let mut role = self.roles.get(role_code).await?;
        role.user_count += 1;
        self.role_store.put(role.clone()).await?;
        Ok(role)
    }

    /// Record that a user released this role; saturates at zero
    pub async fn detach_user(&self, role_code: &str) -> CatalogResult<Role> {
        let _guard = self.write_lock.lock().await;

        let mut role = self.roles.get(role_code).await?;
        role.user_count = role.user_count.saturating_sub(1);
        self.role_store.put(role.clone()).await?;
        Ok(role)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Roles whose permission set references the given code
    async fn referencing_roles(&self, permission_code: &str) -> CatalogResult<Vec<String>> {
        Ok(self
            .role_store
            .list()
            .await?
            .into_iter()
            .filter(|r| r.has_permission(permission_code))
            .map(|r| r.code)
            .collect())
    }

    /// Fail with `UnknownPermission` on the first code missing from the
    /// permission catalog
    async fn check_permissions_exist(
        &self,
        codes: impl Iterator<Item = &String>,
    ) -> CatalogResult<()> {
        for code in codes {
            if !self.permissions.exists(code).await? {
                return Err(CatalogError::UnknownPermission(code.clone()));
            }
        }
        Ok(())
    }

    /// Write seed entities directly through the stores (built-in catalog
    /// bootstrap; bypasses the `is_system = false` creation defaults)
    pub(crate) async fn apply_seed(
        &self,
        permissions: Vec<Permission>,
        roles: Vec<Role>,
    ) -> CatalogResult<()> {
        let _guard = self.write_lock.lock().await;

        for permission in permissions {
            self.permissions().store_put(permission).await?;
        }
        for role in roles {
            self.role_store.put(role).await?;
        }
        Ok(())
    }
}
