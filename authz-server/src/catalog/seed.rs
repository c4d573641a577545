//! Built-in catalog bootstrap
//!
//! The system permissions and roles every deployment starts with. Seed
//! entities are written straight through the stores so they carry
//! `is_system = true` and pre-filled user counts, which the public create
//! paths never produce.

use chrono::Utc;
use shared::models::{Permission, Role, Status};

use super::service::CatalogService;
use super::CatalogResult;

/// (name, code, module, action, description)
const SYSTEM_PERMISSIONS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Create User",
        "user.create",
        "User Management",
        "create",
        "Create new user accounts",
    ),
    (
        "View Users",
        "user.read",
        "User Management",
        "read",
        "View user information",
    ),
    (
        "Update User",
        "user.update",
        "User Management",
        "update",
        "Update user information",
    ),
    (
        "Delete User",
        "user.delete",
        "User Management",
        "delete",
        "Delete user accounts",
    ),
    (
        "Create Employee",
        "employee.create",
        "Employee Management",
        "create",
        "Create new employee records",
    ),
    (
        "View Employees",
        "employee.read",
        "Employee Management",
        "read",
        "View employee information",
    ),
    (
        "Update Employee",
        "employee.update",
        "Employee Management",
        "update",
        "Update employee information",
    ),
    (
        "Delete Employee",
        "employee.delete",
        "Employee Management",
        "delete",
        "Delete employee records",
    ),
    (
        "Create Department",
        "department.create",
        "Department Management",
        "create",
        "Create new departments",
    ),
    (
        "View Departments",
        "department.read",
        "Department Management",
        "read",
        "View department information",
    ),
    (
        "Update Department",
        "department.update",
        "Department Management",
        "update",
        "Update department information",
    ),
    (
        "Delete Department",
        "department.delete",
        "Department Management",
        "delete",
        "Delete departments",
    ),
    (
        "Create Office",
        "office.create",
        "Office Management",
        "create",
        "Create new offices",
    ),
    (
        "View Offices",
        "office.read",
        "Office Management",
        "read",
        "View office information",
    ),
    (
        "Update Office",
        "office.update",
        "Office Management",
        "update",
        "Update office information",
    ),
    (
        "Delete Office",
        "office.delete",
        "Office Management",
        "delete",
        "Delete offices",
    ),
    (
        "Create Role",
        "role.create",
        "Role Management",
        "create",
        "Create new roles",
    ),
    (
        "View Roles",
        "role.read",
        "Role Management",
        "read",
        "View role information",
    ),
    (
        "Update Role",
        "role.update",
        "Role Management",
        "update",
        "Update role information",
    ),
    (
        "Delete Role",
        "role.delete",
        "Role Management",
        "delete",
        "Delete roles",
    ),
    (
        "Create ID Card",
        "id_card.create",
        "ID Card Management",
        "create",
        "Create new ID cards",
    ),
    (
        "View ID Cards",
        "id_card.read",
        "ID Card Management",
        "read",
        "View ID card information",
    ),
    (
        "Update ID Card",
        "id_card.update",
        "ID Card Management",
        "update",
        "Update ID card information",
    ),
    (
        "Delete ID Card",
        "id_card.delete",
        "ID Card Management",
        "delete",
        "Delete ID cards",
    ),
    (
        "Generate Reports",
        "report.generate",
        "Reports & System",
        "generate",
        "Generate system reports",
    ),
    (
        "Export Reports",
        "report.export",
        "Reports & System",
        "export",
        "Export reports to various formats",
    ),
    (
        "System Configuration",
        "system.configure",
        "Reports & System",
        "configure",
        "Configure system settings",
    ),
    (
        "System Backup",
        "system.backup",
        "Reports & System",
        "backup",
        "Perform system backups",
    ),
];

/// (name, code, description, permissions, user_count, is_system)
const BUILT_IN_ROLES: &[(&str, &str, &str, &[&str], u32, bool)] = &[
    (
        "Administrator",
        "ADMIN",
        "Full system access with all permissions",
        &[], // filled with every system permission below
        1,
        true,
    ),
    (
        "HR Manager",
        "HR_MGR",
        "Human resources management with employee access",
        &[
            "employee.create",
            "employee.read",
            "employee.update",
            "employee.delete",
            "department.read",
            "office.read",
            "id_card.create",
            "id_card.read",
            "report.generate",
            "report.export",
        ],
        1,
        false,
    ),
    (
        "Department Head",
        "DEPT_HEAD",
        "Department level management access",
        &[
            "employee.read",
            "employee.update",
            "department.read",
            "office.read",
            "id_card.read",
            "report.generate",
        ],
        1,
        false,
    ),
    (
        "Operator",
        "OPERATOR",
        "Basic operational access for data entry",
        &[
            "employee.create",
            "employee.read",
            "employee.update",
            "department.read",
            "office.read",
            "id_card.create",
            "id_card.read",
        ],
        1,
        false,
    ),
    (
        "Viewer",
        "VIEWER",
        "Read-only access to system data",
        &["employee.read", "department.read", "office.read", "id_card.read"],
        0,
        false,
    ),
];

/// All seed permissions, flagged as system entries
pub fn built_in_permissions() -> Vec<Permission> {
    SYSTEM_PERMISSIONS
        .iter()
        .map(|&(name, code, module, action, description)| Permission {
            name: name.to_string(),
            code: code.to_string(),
            module: module.to_string(),
            action: action.to_string(),
            description: description.to_string(),
            is_system: true,
            status: Status::Active,
            created_at: Utc::now(),
        })
        .collect()
}

/// All seed roles; ADMIN holds every system permission
pub fn built_in_roles() -> Vec<Role> {
    BUILT_IN_ROLES
        .iter()
        .map(|&(name, code, description, permissions, user_count, is_system)| {
            let permissions = if code == "ADMIN" {
                SYSTEM_PERMISSIONS
                    .iter()
                    .map(|&(_, code, ..)| code.to_string())
                    .collect()
            } else {
                permissions.iter().map(|p| p.to_string()).collect()
            };
            Role {
                name: name.to_string(),
                code: code.to_string(),
                description: description.to_string(),
                permissions,
                user_count,
                is_system,
                status: Status::Active,
                created_at: Utc::now(),
            }
        })
        .collect()
}

/// Load the built-in catalog into a fresh service
pub async fn seed_builtin_catalog(service: &CatalogService) -> CatalogResult<()> {
    let permissions = built_in_permissions();
    let roles = built_in_roles();
    let (permission_count, role_count) = (permissions.len(), roles.len());

    service.apply_seed(permissions, roles).await?;

    tracing::info!(
        permissions = permission_count,
        roles = role_count,
        "Built-in catalog seeded"
    );
    Ok(())
}
