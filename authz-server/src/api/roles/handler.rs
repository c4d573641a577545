//! Role API Handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::api::AppResult;
use crate::catalog::{RoleFilter, RolePermissionMatrix};
use crate::core::ServerState;
use shared::models::{Role, RoleCreate, RoleUpdate};

/// GET /api/roles - List roles, optionally filtered by free-text query
pub async fn list(
    State(state): State<ServerState>,
    Query(filter): Query<RoleFilter>,
) -> AppResult<Json<Vec<Role>>> {
    let roles = state.catalog.list_roles(&filter).await?;
    Ok(Json(roles))
}

/// GET /api/roles/{code}
pub async fn get_by_code(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<Json<Role>> {
    let role = state.catalog.get_role(&code).await?;
    Ok(Json(role))
}

/// POST /api/roles - Create a custom role
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RoleCreate>,
) -> AppResult<(StatusCode, Json<Role>)> {
    tracing::info!(code = %payload.code, "Creating role");
    let role = state.catalog.create_role(payload).await?;
    Ok((StatusCode::CREATED, Json(role)))
}

/// PUT /api/roles/{code} - Patch editable fields; a replacement permission
/// set is validated against the permission catalog
pub async fn update(
    State(state): State<ServerState>,
    Path(code): Path<String>,
    Json(payload): Json<RoleUpdate>,
) -> AppResult<Json<Role>> {
    let role = state.catalog.update_role(&code, payload).await?;
    Ok(Json(role))
}

/// DELETE /api/roles/{code} - Delete a custom role with no assigned users
pub async fn delete(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<StatusCode> {
    state.catalog.delete_role(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/roles/{code}/matrix - Full permission matrix for the role
pub async fn matrix(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<Json<RolePermissionMatrix>> {
    let matrix = state.catalog.role_permission_matrix(&code).await?;
    Ok(Json(matrix))
}

/// GET /api/roles/{code}/permissions - The role's granted permission codes
pub async fn list_permissions(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<Json<BTreeSet<String>>> {
    let role = state.catalog.get_role(&code).await?;
    Ok(Json(role.permissions))
}

/// PUT /api/roles/{code}/permissions - Replace the permission set, with the
/// same validation as a role update
pub async fn replace_permissions(
    State(state): State<ServerState>,
    Path(code): Path<String>,
    Json(permissions): Json<BTreeSet<String>>,
) -> AppResult<Json<Role>> {
    let patch = RoleUpdate {
        permissions: Some(permissions),
        ..Default::default()
    };
    let role = state.catalog.update_role(&code, patch).await?;
    Ok(Json(role))
}

#[derive(Serialize)]
pub struct PermissionCheck {
    pub role: String,
    pub permission: String,
    pub granted: bool,
}

/// GET /api/roles/{code}/permissions/{permission} - Single permission check
pub async fn check_permission(
    State(state): State<ServerState>,
    Path((code, permission)): Path<(String, String)>,
) -> AppResult<Json<PermissionCheck>> {
    let granted = state.catalog.has_permission(&code, &permission).await?;
    Ok(Json(PermissionCheck {
        role: code,
        permission,
        granted,
    }))
}

/// POST /api/roles/{code}/permissions/{permission} - Grant (idempotent)
pub async fn grant(
    State(state): State<ServerState>,
    Path((code, permission)): Path<(String, String)>,
) -> AppResult<Json<Role>> {
    let role = state.catalog.grant_permission(&code, &permission).await?;
    Ok(Json(role))
}

/// DELETE /api/roles/{code}/permissions/{permission} - Revoke (idempotent)
pub async fn revoke(
    State(state): State<ServerState>,
    Path((code, permission)): Path<(String, String)>,
) -> AppResult<Json<Role>> {
    let role = state.catalog.revoke_permission(&code, &permission).await?;
    Ok(Json(role))
}

/// POST /api/roles/{code}/users - Record a user assignment
pub async fn attach_user(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<Json<Role>> {
    let role = state.catalog.attach_user(&code).await?;
    Ok(Json(role))
}

/// DELETE /api/roles/{code}/users - Record a user release
pub async fn detach_user(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<Json<Role>> {
    let role = state.catalog.detach_user(&code).await?;
    Ok(Json(role))
}
