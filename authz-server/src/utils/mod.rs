//! Utility module
//!
//! - [`error`] — shared error re-exports plus the catalog error bridge
//! - [`logger`] — tracing subscriber setup
//! - [`validation`] — field validation helpers used by the catalogs

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use logger::{init_logger, init_logger_with_file};
