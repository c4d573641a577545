//! In-memory store implementation
//!
//! Entries live in a `Vec` behind an async `RwLock`: catalogs are small
//! (tens of entries) and `list` must preserve insertion order, so a linear
//! scan beats a map plus a separate order index.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{PermissionStore, RoleStore, StoreResult};
use shared::models::{Permission, Role};

/// In-memory permission store
#[derive(Debug, Default)]
pub struct MemoryPermissionStore {
    entries: RwLock<Vec<Permission>>,
}

impl MemoryPermissionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PermissionStore for MemoryPermissionStore {
    async fn get(&self, code: &str) -> StoreResult<Option<Permission>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().find(|p| p.code == code).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<Permission>> {
        Ok(self.entries.read().await.clone())
    }

    async fn put(&self, permission: Permission) -> StoreResult<()> {
        let mut entries = self.entries.write().await;
        match entries.iter_mut().find(|p| p.code == permission.code) {
            Some(slot) => *slot = permission,
            None => entries.push(permission),
        }
        Ok(())
    }

    async fn delete(&self, code: &str) -> StoreResult<bool> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|p| p.code != code);
        Ok(entries.len() < before)
    }
}

/// In-memory role store
#[derive(Debug, Default)]
pub struct MemoryRoleStore {
    entries: RwLock<Vec<Role>>,
}

impl MemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleStore for MemoryRoleStore {
    async fn get(&self, code: &str) -> StoreResult<Option<Role>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().find(|r| r.code == code).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<Role>> {
        Ok(self.entries.read().await.clone())
    }

    async fn put(&self, role: Role) -> StoreResult<()> {
        let mut entries = self.entries.write().await;
        match entries.iter_mut().find(|r| r.code == role.code) {
            Some(slot) => *slot = role,
            None => entries.push(role),
        }
        Ok(())
    }

    async fn delete(&self, code: &str) -> StoreResult<bool> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|r| r.code != code);
        Ok(entries.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::Status;

    fn perm(code: &str) -> Permission {
        Permission {
            code: code.to_string(),
            name: code.to_string(),
            module: "Test".to_string(),
            action: "read".to_string(),
            description: String::new(),
            is_system: false,
            status: Status::Active,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_put_upserts_in_place() {
        let store = MemoryPermissionStore::new();
        store.put(perm("a.read")).await.unwrap();
        store.put(perm("b.read")).await.unwrap();

        let mut updated = perm("a.read");
        updated.name = "renamed".to_string();
        store.put(updated).await.unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        // replaced entry keeps its position
        assert_eq!(listed[0].code, "a.read");
        assert_eq!(listed[0].name, "renamed");
    }

    #[tokio::test]
    async fn test_delete_reports_removal() {
        let store = MemoryPermissionStore::new();
        store.put(perm("a.read")).await.unwrap();

        assert!(store.delete("a.read").await.unwrap());
        assert!(!store.delete("a.read").await.unwrap());
        assert!(store.get("a.read").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = MemoryPermissionStore::new();
        for code in ["z.read", "a.read", "m.read"] {
            store.put(perm(code)).await.unwrap();
        }
        let codes: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.code)
            .collect();
        assert_eq!(codes, vec!["z.read", "a.read", "m.read"]);
    }
}
