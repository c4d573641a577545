//! Startup and runtime errors for the server itself
//!
//! API-level errors are handled by [`crate::utils::AppError`]; this type
//! covers failures outside a request context (bind, seed, shutdown).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Seed error: {0}")]
    Seed(#[from] crate::catalog::CatalogError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;
