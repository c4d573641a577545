//! Unified error codes for the authorization catalog
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 2xxx: Catalog consistency errors (referential integrity, protection rules)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// A permission or role with the same code already exists
    DuplicateCode = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 2xxx: Catalog consistency ====================
    /// Role references a permission code absent from the catalog
    UnknownPermission = 2001,
    /// Delete or immutable-field mutation attempted on a system permission
    SystemPermissionProtected = 2002,
    /// Delete or permission-set mutation attempted on a system role
    SystemRoleProtected = 2003,
    /// Permission delete blocked: at least one role still references it
    PermissionInUse = 2004,
    /// Role delete blocked: at least one user still holds it
    RoleInUse = 2005,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Backing store error
    StorageError = 9002,
}

impl ErrorCode {
    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::DuplicateCode => "Code already exists",
            Self::InvalidRequest => "Invalid request",
            Self::UnknownPermission => "Unknown permission code",
            Self::SystemPermissionProtected => "System permissions cannot be deleted",
            Self::SystemRoleProtected => "System roles cannot be deleted or stripped",
            Self::PermissionInUse => "Permission is still referenced by a role",
            Self::RoleInUse => "Role is still assigned to users",
            Self::InternalError => "Internal error",
            Self::StorageError => "Storage error",
        }
    }

    /// Numeric value of the code
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", *self as u16)
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code as u16
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::DuplicateCode,
            5 => Self::InvalidRequest,
            2001 => Self::UnknownPermission,
            2002 => Self::SystemPermissionProtected,
            2003 => Self::SystemRoleProtected,
            2004 => Self::PermissionInUse,
            2005 => Self::RoleInUse,
            9001 => Self::InternalError,
            9002 => Self::StorageError,
            _ => return Err(InvalidErrorCode(value)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u16_round_trip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::DuplicateCode,
            ErrorCode::UnknownPermission,
            ErrorCode::SystemPermissionProtected,
            ErrorCode::SystemRoleProtected,
            ErrorCode::PermissionInUse,
            ErrorCode::RoleInUse,
            ErrorCode::StorageError,
        ];
        for code in codes {
            let value: u16 = code.into();
            assert_eq!(ErrorCode::try_from(value).unwrap(), code);
        }
    }

    #[test]
    fn test_unknown_value_rejected() {
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
    }

    #[test]
    fn test_serde_as_u16() {
        let json = serde_json::to_string(&ErrorCode::PermissionInUse).unwrap();
        assert_eq!(json, "2004");
        let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ErrorCode::PermissionInUse);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(ErrorCode::NotFound.to_string(), "E0003");
        assert_eq!(ErrorCode::RoleInUse.to_string(), "E2005");
    }
}
