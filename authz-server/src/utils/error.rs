//! Error bridging
//!
//! Re-exports the shared error types and maps [`CatalogError`] variants
//! onto their wire-level [`ErrorCode`] values. The catalog layer stays free
//! of HTTP concerns; everything crossing the API boundary goes through this
//! conversion.

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};

use crate::catalog::CatalogError;

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        match err {
            CatalogError::DuplicateCode(code) => {
                AppError::with_message(ErrorCode::DuplicateCode, message).with_detail("code", code)
            }
            CatalogError::NotFound(_) => AppError::with_message(ErrorCode::NotFound, message),
            CatalogError::UnknownPermission(code) => {
                AppError::with_message(ErrorCode::UnknownPermission, message)
                    .with_detail("permission", code)
            }
            CatalogError::SystemPermissionProtected(code) => {
                AppError::with_message(ErrorCode::SystemPermissionProtected, message)
                    .with_detail("permission", code)
            }
            CatalogError::SystemRoleProtected(code) => {
                AppError::with_message(ErrorCode::SystemRoleProtected, message)
                    .with_detail("role", code)
            }
            CatalogError::PermissionInUse { code, roles } => {
                AppError::with_message(ErrorCode::PermissionInUse, message)
                    .with_detail("permission", code)
                    .with_detail("roles", roles)
            }
            CatalogError::RoleInUse { code, user_count } => {
                AppError::with_message(ErrorCode::RoleInUse, message)
                    .with_detail("role", code)
                    .with_detail("user_count", user_count)
            }
            CatalogError::Validation(_) => {
                AppError::with_message(ErrorCode::ValidationFailed, message)
            }
            CatalogError::Store(_) => AppError::with_message(ErrorCode::StorageError, message),
        }
    }
}
