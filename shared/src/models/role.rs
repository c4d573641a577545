//! Role Model

use super::permission::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Role entity — a named, reusable bundle of permissions
///
/// `permissions` holds permission codes as a set: duplicates are meaningless
/// and insertion order is irrelevant. Every code must exist in the permission
/// catalog at the time of assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Set of permission codes (e.g. {"employee.read", "id_card.create"})
    pub permissions: BTreeSet<String>,
    /// Derived cache of how many users reference this role; never
    /// caller-settable
    pub user_count: u32,
    /// Built-in roles may not be deleted or stripped of permissions
    pub is_system: bool,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

/// Create role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCreate {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub permissions: BTreeSet<String>,
}

/// Update role payload
///
/// `user_count` and `is_system` are never mutated through update; a present
/// `permissions` field fully replaces the set (re-validated by the catalog).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<BTreeSet<String>>,
    pub status: Option<Status>,
}

impl Role {
    /// Set-membership check
    pub fn has_permission(&self, code: &str) -> bool {
        self.permissions.contains(code)
    }

    /// Add a permission code; returns false if it was already granted
    pub fn grant(&mut self, code: impl Into<String>) -> bool {
        self.permissions.insert(code.into())
    }

    /// Remove a permission code; returns false if it was not granted
    pub fn revoke(&mut self, code: &str) -> bool {
        self.permissions.remove(code)
    }

    /// Apply an update patch, leaving `code`, `user_count` and `is_system`
    /// untouched
    pub fn apply(&mut self, patch: RoleUpdate) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(permissions) = patch.permissions {
            self.permissions = permissions;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Role {
        Role {
            code: "VIEWER".to_string(),
            name: "Viewer".to_string(),
            description: "Read-only access to system data".to_string(),
            permissions: ["employee.read", "department.read"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            user_count: 0,
            is_system: false,
            status: Status::Active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_membership() {
        let role = sample();
        assert!(role.has_permission("employee.read"));
        assert!(!role.has_permission("employee.delete"));
    }

    #[test]
    fn test_grant_is_idempotent() {
        let mut role = sample();
        assert!(role.grant("office.read"));
        assert!(!role.grant("office.read"));
        assert_eq!(
            role.permissions.iter().filter(|p| *p == "office.read").count(),
            1
        );
    }

    #[test]
    fn test_revoke_absent_is_noop() {
        let mut role = sample();
        assert!(!role.revoke("ghost.permission"));
        assert_eq!(role.permissions.len(), 2);
    }

    #[test]
    fn test_apply_preserves_user_count_and_system_flag() {
        let mut role = sample();
        role.user_count = 3;
        role.apply(RoleUpdate {
            name: Some("Auditor".to_string()),
            permissions: Some(["report.generate".to_string()].into_iter().collect()),
            ..Default::default()
        });
        assert_eq!(role.name, "Auditor");
        assert_eq!(role.permissions.len(), 1);
        assert_eq!(role.user_count, 3);
        assert!(!role.is_system);
    }

    #[test]
    fn test_permissions_serialize_as_array() {
        let role = sample();
        let json = serde_json::to_value(&role).unwrap();
        assert!(json["permissions"].is_array());
        assert_eq!(json["permissions"].as_array().unwrap().len(), 2);
    }
}
