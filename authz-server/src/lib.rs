//! Authorization Catalog Server
//!
//! Backend service owning the permission catalog, the role catalog, and the
//! assignment relation between them for the employee-information and ID-card
//! administration system.
//!
//! # Module structure
//!
//! ```text
//! authz-server/src/
//! ├── core/          # Config, state, HTTP server, startup errors
//! ├── catalog/       # Permission/role catalogs, assignment engine, seed data
//! ├── store/         # Injected store traits + in-memory implementation
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # Error mapping, validation, logging
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod store;
pub mod utils;

// Re-export public types
pub use catalog::{CatalogError, CatalogResult, CatalogService};
pub use core::{Config, Server, ServerState};
pub use store::{MemoryPermissionStore, MemoryRoleStore, PermissionStore, RoleStore};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Set up the process environment: dotenv, then logging.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}
