//! Role Catalog
//!
//! Read/write logic for the role side of the catalog. Creation and
//! permission-set updates are routed through [`super::CatalogService`],
//! which validates permission codes against the permission catalog first.

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use super::{CatalogError, CatalogResult};
use crate::store::RoleStore;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, validate_optional_text, validate_required_text,
    validate_role_code,
};
use shared::models::{Role, RoleCreate, RoleUpdate, Status};

/// Filter for role listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleFilter {
    /// Case-insensitive substring over name/code/description
    pub text_query: Option<String>,
}

/// Role catalog over an injected store
#[derive(Clone)]
pub struct RoleCatalog {
    store: Arc<dyn RoleStore>,
}

impl RoleCatalog {
    pub fn new(store: Arc<dyn RoleStore>) -> Self {
        Self { store }
    }

    /// Fetch a role, failing with `NotFound` if the code is absent
    pub async fn get(&self, code: &str) -> CatalogResult<Role> {
        self.store
            .get(code)
            .await?
            .ok_or_else(|| CatalogError::NotFound(format!("Role '{code}'")))
    }

    /// Whether a role code exists in the catalog
    pub async fn exists(&self, code: &str) -> CatalogResult<bool> {
        Ok(self.store.get(code).await?.is_some())
    }

    /// Create a custom role
    ///
    /// New roles are `is_system = false`, `user_count = 0`, active. The
    /// caller (the service) has already validated the permission codes
    /// against the permission catalog.
    pub(crate) async fn create(&self, data: RoleCreate) -> CatalogResult<Role> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(
            &Some(data.description.clone()),
            "description",
            MAX_DESCRIPTION_LEN,
        )?;
        validate_role_code(&data.code)?;

        if self.exists(&data.code).await? {
            return Err(CatalogError::DuplicateCode(data.code));
        }

        let role = Role {
            code: data.code,
            name: data.name,
            description: data.description,
            permissions: data.permissions,
            user_count: 0,
            is_system: false,
            status: Status::Active,
            created_at: Utc::now(),
        };
        self.store.put(role.clone()).await?;

        tracing::info!(code = %role.code, permissions = role.permissions.len(), "Role created");
        Ok(role)
    }

    /// Apply a patch to a role
    ///
    /// `code`, `user_count` and `is_system` are never mutated here. A patch
    /// that replaces the permission set of a system role is refused.
    pub(crate) async fn update(&self, code: &str, patch: RoleUpdate) -> CatalogResult<Role> {
        let mut existing = self.get(code).await?;

        if existing.is_system && patch.permissions.is_some() {
            return Err(CatalogError::SystemRoleProtected(code.to_string()));
        }

        validate_optional_text(&patch.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&patch.description, "description", MAX_DESCRIPTION_LEN)?;

        existing.apply(patch);
        self.store.put(existing.clone()).await?;

        tracing::info!(code = %code, "Role updated");
        Ok(existing)
    }

    /// Delete a role, refusing system roles and roles still held by users
    pub(crate) async fn delete(&self, code: &str) -> CatalogResult<()> {
        let existing = self.get(code).await?;
        if existing.is_system {
            return Err(CatalogError::SystemRoleProtected(code.to_string()));
        }
        if existing.user_count > 0 {
            return Err(CatalogError::RoleInUse {
                code: code.to_string(),
                user_count: existing.user_count,
            });
        }
        self.store.delete(code).await?;

        tracing::info!(code = %code, "Role deleted");
        Ok(())
    }

    /// Set-membership check; fails `NotFound` for an unknown role
    pub async fn has_permission(&self, role_code: &str, permission_code: &str) -> CatalogResult<bool> {
        let role = self.get(role_code).await?;
        Ok(role.has_permission(permission_code))
    }

    /// List roles in stable insertion order, optionally filtered
    pub async fn list(&self, filter: &RoleFilter) -> CatalogResult<Vec<Role>> {
        let all = self.store.list().await?;
        let query = filter.text_query.as_deref().map(str::to_lowercase);

        Ok(all
            .into_iter()
            .filter(|r| {
                query.as_deref().is_none_or(|q| {
                    r.name.to_lowercase().contains(q)
                        || r.code.to_lowercase().contains(q)
                        || r.description.to_lowercase().contains(q)
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryRoleStore;
    use std::collections::BTreeSet;

    fn catalog() -> RoleCatalog {
        RoleCatalog::new(Arc::new(MemoryRoleStore::new()))
    }

    fn viewer_input() -> RoleCreate {
        RoleCreate {
            name: "Viewer".to_string(),
            code: "VIEWER".to_string(),
            description: "Read-only access".to_string(),
            permissions: ["employee.read".to_string()].into_iter().collect(),
        }
    }

    #[tokio::test]
    async fn test_create_defaults() {
        let catalog = catalog();
        let role = catalog.create(viewer_input()).await.unwrap();

        assert_eq!(role.user_count, 0);
        assert!(!role.is_system);
        assert_eq!(role.status, Status::Active);
        assert!(role.has_permission("employee.read"));
    }

    #[tokio::test]
    async fn test_duplicate_role_code() {
        let catalog = catalog();
        catalog.create(viewer_input()).await.unwrap();
        let err = catalog.create(viewer_input()).await.unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCode(c) if c == "VIEWER"));
    }

    #[tokio::test]
    async fn test_system_role_permission_patch_refused() {
        let catalog = catalog();
        let mut admin = catalog.create(viewer_input()).await.unwrap();
        admin.is_system = true;
        catalog.store.put(admin).await.unwrap();

        // name/description patches are fine
        catalog
            .update(
                "VIEWER",
                RoleUpdate {
                    name: Some("Audit Viewer".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        // replacing the permission set is not
        let err = catalog
            .update(
                "VIEWER",
                RoleUpdate {
                    permissions: Some(BTreeSet::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::SystemRoleProtected(_)));
    }

    #[tokio::test]
    async fn test_delete_checks_in_order() {
        let catalog = catalog();
        let mut role = catalog.create(viewer_input()).await.unwrap();
        role.user_count = 2;
        catalog.store.put(role).await.unwrap();

        let err = catalog.delete("VIEWER").await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::RoleInUse { user_count: 2, .. }
        ));

        // role untouched by the failed delete
        assert!(catalog.exists("VIEWER").await.unwrap());
    }

    #[tokio::test]
    async fn test_has_permission_unknown_role() {
        let catalog = catalog();
        let err = catalog
            .has_permission("GHOST", "employee.read")
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_text_filter() {
        let catalog = catalog();
        catalog.create(viewer_input()).await.unwrap();
        catalog
            .create(RoleCreate {
                name: "HR Manager".to_string(),
                code: "HR_MGR".to_string(),
                description: "Human resources".to_string(),
                permissions: BTreeSet::new(),
            })
            .await
            .unwrap();

        let hits = catalog
            .list(&RoleFilter {
                text_query: Some("resources".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "HR_MGR");

        let all = catalog.list(&RoleFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
