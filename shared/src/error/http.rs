//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use super::types::{ApiResponse, AppError};
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound => StatusCode::NOT_FOUND,

            // 409 Conflict (duplicate codes, blocked deletes)
            Self::DuplicateCode | Self::PermissionInUse | Self::RoleInUse => StatusCode::CONFLICT,

            // 403 Forbidden (system-entity protection)
            Self::SystemPermissionProtected | Self::SystemRoleProtected => StatusCode::FORBIDDEN,

            // 422 Unprocessable Entity (dangling reference in payload)
            Self::UnknownPermission => StatusCode::UNPROCESSABLE_ENTITY,

            // 500 Internal Server Error
            Self::Unknown | Self::InternalError | Self::StorageError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.http_status();

        if status.is_server_error() {
            tracing::error!(code = %self.code, message = %self.message, "request failed");
        }

        let body = ApiResponse::<()>::error(&self);
        (status, axum::Json(body)).into_response()
    }
}
