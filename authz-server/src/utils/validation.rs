//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! catalog CRUD paths.

use crate::catalog::{CatalogError, CatalogResult};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: permission, role, module
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Codes: permission codes, role codes
pub const MAX_CODE_LEN: usize = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> CatalogResult<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::Validation(format!(
            "{field} must not be empty"
        )));
    }
    if value.len() > max_len {
        return Err(CatalogError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> CatalogResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(CatalogError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate a permission code: exactly `<module_key>.<action>`, both
/// segments non-empty and limited to `[a-z0-9_]`.
pub fn validate_permission_code(code: &str) -> CatalogResult<()> {
    validate_required_text(code, "code", MAX_CODE_LEN)?;

    let segment_ok =
        |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

    match code.split_once('.') {
        Some((prefix, action)) if segment_ok(prefix) && segment_ok(action) && !action.contains('.') => {
            Ok(())
        }
        _ => Err(CatalogError::Validation(format!(
            "code '{code}' must match <module_key>.<action> with [a-z0-9_] segments"
        ))),
    }
}

/// Validate a role code: non-empty, `[A-Za-z0-9_-]` only.
pub fn validate_role_code(code: &str) -> CatalogResult<()> {
    validate_required_text(code, "code", MAX_CODE_LEN)?;

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(CatalogError::Validation(format!(
            "role code '{code}' may only contain letters, digits, '_' and '-'"
        )));
    }
    Ok(())
}
