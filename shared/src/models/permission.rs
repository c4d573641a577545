//! Permission Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entity status shared by permissions and roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

/// Permission entity — an atomic capability grantable to a role
///
/// `code` is globally unique and dot-namespaced as `<module_key>.<action>`
/// (e.g. `employee.create`). Many permissions share a `module` grouping label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub code: String,
    pub name: String,
    /// Grouping label, e.g. "Employee Management"
    pub module: String,
    /// Action kind: create, read, update, delete, export, generate,
    /// configure, backup — open to extension
    pub action: String,
    #[serde(default)]
    pub description: String,
    /// Built-in permissions may not be deleted
    pub is_system: bool,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

/// Create permission payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionCreate {
    pub name: String,
    pub code: String,
    pub module: String,
    pub action: String,
    #[serde(default)]
    pub description: String,
}

/// Update permission payload
///
/// `code` and `is_system` are immutable; absent fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionUpdate {
    pub name: Option<String>,
    pub module: Option<String>,
    pub action: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
}

impl Permission {
    /// The namespace prefix of the code (`employee` for `employee.create`)
    pub fn module_key(&self) -> &str {
        self.code.split('.').next().unwrap_or(&self.code)
    }

    /// Apply an update patch, leaving `code` and `is_system` untouched
    pub fn apply(&mut self, patch: PermissionUpdate) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(module) = patch.module {
            self.module = module;
        }
        if let Some(action) = patch.action {
            self.action = action;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Permission {
        Permission {
            code: "employee.read".to_string(),
            name: "View Employees".to_string(),
            module: "Employee Management".to_string(),
            action: "read".to_string(),
            description: "View employee information".to_string(),
            is_system: true,
            status: Status::Active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_module_key() {
        assert_eq!(sample().module_key(), "employee");
    }

    #[test]
    fn test_apply_preserves_immutable_fields() {
        let mut p = sample();
        p.apply(PermissionUpdate {
            name: Some("View Staff".to_string()),
            status: Some(Status::Inactive),
            ..Default::default()
        });
        assert_eq!(p.name, "View Staff");
        assert_eq!(p.status, Status::Inactive);
        // untouched by the patch
        assert_eq!(p.code, "employee.read");
        assert!(p.is_system);
        assert_eq!(p.module, "Employee Management");
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&Status::Active).unwrap(), "\"active\"");
        let s: Status = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(s, Status::Inactive);
    }
}
