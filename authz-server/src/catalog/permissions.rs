//! Permission Catalog
//!
//! Read/write logic for the permission side of the catalog. Deletion is
//! routed through [`super::CatalogService`], which adds the cross-catalog
//! referential check before delegating here.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{CatalogError, CatalogResult, modules};
use crate::store::PermissionStore;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, validate_optional_text, validate_permission_code,
    validate_required_text,
};
use shared::models::{Permission, PermissionCreate, PermissionUpdate, Status};

/// Filter for permission listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PermissionFilter {
    /// Case-insensitive substring over name/code/module/description
    pub text_query: Option<String>,
    /// Exact module name match
    pub module: Option<String>,
}

/// Permissions of one module, annotated with the module description
#[derive(Debug, Clone, Serialize)]
pub struct PermissionGroup {
    pub module: String,
    pub description: String,
    pub permissions: Vec<Permission>,
}

/// Permission catalog over an injected store
#[derive(Clone)]
pub struct PermissionCatalog {
    store: Arc<dyn PermissionStore>,
}

impl PermissionCatalog {
    pub fn new(store: Arc<dyn PermissionStore>) -> Self {
        Self { store }
    }

    /// Fetch a permission, failing with `NotFound` if the code is absent
    pub async fn get(&self, code: &str) -> CatalogResult<Permission> {
        self.store
            .get(code)
            .await?
            .ok_or_else(|| CatalogError::NotFound(format!("Permission '{code}'")))
    }

    /// Whether a permission code exists in the catalog
    pub async fn exists(&self, code: &str) -> CatalogResult<bool> {
        Ok(self.store.get(code).await?.is_some())
    }

    /// Create a custom permission
    ///
    /// New permissions are always `is_system = false` and active. Fails with
    /// `DuplicateCode` if the code is taken, and with `Validation` if the
    /// code shape or the module/namespace pairing is off.
    pub async fn create(&self, data: PermissionCreate) -> CatalogResult<Permission> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&data.module, "module", MAX_NAME_LEN)?;
        validate_required_text(&data.action, "action", MAX_NAME_LEN)?;
        // description may be empty, only the length is capped
        validate_optional_text(
            &Some(data.description.clone()),
            "description",
            MAX_DESCRIPTION_LEN,
        )?;
        validate_permission_code(&data.code)?;
        check_module_pairing(&data.code, &data.module)?;

        if self.exists(&data.code).await? {
            return Err(CatalogError::DuplicateCode(data.code));
        }

        let permission = Permission {
            code: data.code,
            name: data.name,
            module: data.module,
            action: data.action,
            description: data.description,
            is_system: false,
            status: Status::Active,
            created_at: Utc::now(),
        };
        self.store.put(permission.clone()).await?;

        tracing::info!(code = %permission.code, module = %permission.module, "Permission created");
        Ok(permission)
    }

    /// Apply a patch to a permission
    ///
    /// `code` and `is_system` are immutable. A module change is re-checked
    /// against the code's namespace prefix.
    pub async fn update(&self, code: &str, patch: PermissionUpdate) -> CatalogResult<Permission> {
        let mut existing = self.get(code).await?;

        validate_optional_text(&patch.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&patch.module, "module", MAX_NAME_LEN)?;
        validate_optional_text(&patch.action, "action", MAX_NAME_LEN)?;
        validate_optional_text(&patch.description, "description", MAX_DESCRIPTION_LEN)?;
        if let Some(module) = &patch.module {
            validate_required_text(module, "module", MAX_NAME_LEN)?;
            check_module_pairing(code, module)?;
        }

        existing.apply(patch);
        self.store.put(existing.clone()).await?;

        tracing::info!(code = %code, "Permission updated");
        Ok(existing)
    }

    /// Delete a permission, refusing system entries
    ///
    /// The `PermissionInUse` referential check happens in the service layer;
    /// this only enforces the system-protection rule.
    pub(crate) async fn delete(&self, code: &str) -> CatalogResult<()> {
        let existing = self.get(code).await?;
        if existing.is_system {
            return Err(CatalogError::SystemPermissionProtected(code.to_string()));
        }
        self.store.delete(code).await?;

        tracing::info!(code = %code, "Permission deleted");
        Ok(())
    }

    /// Raw store write used by the seed bootstrap (system permissions are
    /// constructed directly, not through [`Self::create`])
    pub(crate) async fn store_put(&self, permission: Permission) -> CatalogResult<()> {
        self.store.put(permission).await?;
        Ok(())
    }

    /// List permissions in stable insertion order, optionally filtered
    pub async fn list(&self, filter: &PermissionFilter) -> CatalogResult<Vec<Permission>> {
        let all = self.store.list().await?;
        let query = filter.text_query.as_deref().map(str::to_lowercase);

        Ok(all
            .into_iter()
            .filter(|p| {
                let matches_query = query.as_deref().is_none_or(|q| {
                    p.name.to_lowercase().contains(q)
                        || p.code.to_lowercase().contains(q)
                        || p.module.to_lowercase().contains(q)
                        || p.description.to_lowercase().contains(q)
                });
                let matches_module = filter.module.as_deref().is_none_or(|m| p.module == m);
                matches_query && matches_module
            })
            .collect())
    }

    /// Group all permissions by module, in order of first appearance, each
    /// group annotated with its registry description (generic fallback for
    /// unknown modules)
    pub async fn group_by_module(&self) -> CatalogResult<Vec<PermissionGroup>> {
        let all = self.store.list().await?;

        let mut groups: Vec<PermissionGroup> = Vec::new();
        for permission in all {
            match groups.iter_mut().find(|g| g.module == permission.module) {
                Some(group) => group.permissions.push(permission),
                None => groups.push(PermissionGroup {
                    description: modules::module_description(&permission.module).to_string(),
                    module: permission.module.clone(),
                    permissions: vec![permission],
                }),
            }
        }
        Ok(groups)
    }
}

/// The soft module/namespace invariant: a code prefix registered to a
/// built-in module must be paired with that module, and a built-in module
/// only accepts its own keys. Unknown prefix + unknown module introduces a
/// new module implicitly.
fn check_module_pairing(code: &str, module: &str) -> CatalogResult<()> {
    let prefix = code.split('.').next().unwrap_or(code);

    match modules::module_for_key(prefix) {
        Some(registered) if registered != module => Err(CatalogError::Validation(format!(
            "code prefix '{prefix}' belongs to module '{registered}', not '{module}'"
        ))),
        None if modules::is_builtin_module(module) => Err(CatalogError::Validation(format!(
            "module '{module}' does not own the code prefix '{prefix}'"
        ))),
        _ => Ok(()),
    }
}
