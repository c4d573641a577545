//! Read-only query façade
//!
//! Presentation-shaped views over the two catalogs: the per-role permission
//! matrix an admin UI renders as a checklist, and per-module summary rows.
//! These are pure projections; nothing here mutates.

use serde::Serialize;

use super::service::CatalogService;
use super::CatalogResult;

/// One checkbox cell in the role permission matrix
#[derive(Debug, Clone, Serialize)]
pub struct PermissionGrant {
    pub code: String,
    pub name: String,
    pub action: String,
    pub granted: bool,
}

/// One module row of the matrix
#[derive(Debug, Clone, Serialize)]
pub struct MatrixModule {
    pub module: String,
    pub description: String,
    pub permissions: Vec<PermissionGrant>,
}

/// Every catalog permission grouped by module, each flagged with whether
/// the given role holds it
#[derive(Debug, Clone, Serialize)]
pub struct RolePermissionMatrix {
    pub role: String,
    pub role_name: String,
    pub modules: Vec<MatrixModule>,
    /// Count of granted cells across all modules
    pub granted: usize,
    /// Total cell count
    pub total: usize,
}

/// Aggregate row for one module
#[derive(Debug, Clone, Serialize)]
pub struct ModuleSummary {
    pub module: String,
    pub description: String,
    pub permissions: usize,
    pub system: usize,
}

impl CatalogService {
    /// Build the full permission matrix for one role
    ///
    /// Modules appear in order of first appearance in the permission
    /// catalog; every permission appears exactly once.
    pub async fn role_permission_matrix(&self, role_code: &str) -> CatalogResult<RolePermissionMatrix> {
        let role = self.get_role(role_code).await?;
        let groups = self.group_permissions().await?;

        let mut granted = 0;
        let mut total = 0;
        let modules = groups
            .into_iter()
            .map(|group| MatrixModule {
                module: group.module,
                description: group.description,
                permissions: group
                    .permissions
                    .into_iter()
                    .map(|p| {
                        let held = role.has_permission(&p.code);
                        granted += usize::from(held);
                        total += 1;
                        PermissionGrant {
                            code: p.code,
                            name: p.name,
                            action: p.action,
                            granted: held,
                        }
                    })
                    .collect(),
            })
            .collect();

        Ok(RolePermissionMatrix {
            role: role.code,
            role_name: role.name,
            modules,
            granted,
            total,
        })
    }

    /// Per-module aggregate counts over the permission catalog
    pub async fn module_summaries(&self) -> CatalogResult<Vec<ModuleSummary>> {
        let groups = self.group_permissions().await?;
        Ok(groups
            .into_iter()
            .map(|group| {
                let system = group.permissions.iter().filter(|p| p.is_system).count();
                ModuleSummary {
                    description: group.description,
                    permissions: group.permissions.len(),
                    system,
                    module: group.module,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::seed;
    use crate::store::{MemoryPermissionStore, MemoryRoleStore};
    use shared::models::PermissionCreate;

    async fn seeded_service() -> CatalogService {
        let service = CatalogService::new(
            Arc::new(MemoryPermissionStore::new()),
            Arc::new(MemoryRoleStore::new()),
        );
        seed::seed_builtin_catalog(&service).await.unwrap();
        service
    }

    #[tokio::test]
    async fn test_admin_matrix_is_fully_granted() {
        let service = seeded_service().await;
        let matrix = service.role_permission_matrix("ADMIN").await.unwrap();

        assert_eq!(matrix.role, "ADMIN");
        assert_eq!(matrix.granted, matrix.total);
        assert_eq!(matrix.total, 28);
        assert!(matrix
            .modules
            .iter()
            .flat_map(|m| &m.permissions)
            .all(|p| p.granted));
    }

    #[tokio::test]
    async fn test_viewer_matrix_marks_only_read_grants() {
        let service = seeded_service().await;
        let matrix = service.role_permission_matrix("VIEWER").await.unwrap();

        assert!(matrix.granted < matrix.total);
        for module in &matrix.modules {
            for cell in &module.permissions {
                if cell.granted {
                    assert_eq!(cell.action, "read", "VIEWER holds non-read {}", cell.code);
                }
            }
        }
    }

    #[tokio::test]
    async fn test_matrix_covers_custom_permissions() {
        let service = seeded_service().await;
        service
            .create_permission(PermissionCreate {
                name: "Export Employees".to_string(),
                code: "employee.export".to_string(),
                module: "Employee Management".to_string(),
                action: "export".to_string(),
                description: String::new(),
            })
            .await
            .unwrap();

        let matrix = service.role_permission_matrix("VIEWER").await.unwrap();
        assert_eq!(matrix.total, 29);
        let cell = matrix
            .modules
            .iter()
            .flat_map(|m| &m.permissions)
            .find(|p| p.code == "employee.export")
            .unwrap();
        assert!(!cell.granted);
    }

    #[tokio::test]
    async fn test_module_summaries_count_seeded_catalog() {
        let service = seeded_service().await;
        let summaries = service.module_summaries().await.unwrap();

        let total: usize = summaries.iter().map(|s| s.permissions).sum();
        assert_eq!(total, 28);
        // seeded catalog is all system entries
        assert!(summaries.iter().all(|s| s.system == s.permissions));
        assert!(!summaries.iter().any(|s| s.description.is_empty()));
    }
}
