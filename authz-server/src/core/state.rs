//! Server state
//!
//! Holds the catalog service shared by all request handlers. Cloning is
//! cheap; everything inside is reference counted.

use std::sync::Arc;

use crate::catalog::{CatalogService, seed};
use crate::core::Config;
use crate::store::{MemoryPermissionStore, MemoryRoleStore};

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Permission/role catalog service
    pub catalog: CatalogService,
    /// Runtime environment label (development | staging | production)
    pub environment: String,
}

impl ServerState {
    /// Initialize state with in-memory stores, seeding the built-in catalog
    /// unless disabled in the configuration.
    pub async fn initialize(config: &Config) -> crate::core::Result<Self> {
        let catalog = CatalogService::new(
            Arc::new(MemoryPermissionStore::new()),
            Arc::new(MemoryRoleStore::new()),
        );

        if config.seed_builtin {
            seed::seed_builtin_catalog(&catalog).await?;
        }

        Ok(Self {
            catalog,
            environment: config.environment.clone(),
        })
    }
}
