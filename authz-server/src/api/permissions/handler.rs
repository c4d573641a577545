//! Permission API Handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::api::AppResult;
use crate::catalog::{PermissionFilter, PermissionGroup};
use crate::core::ServerState;
use shared::models::{Permission, PermissionCreate, PermissionUpdate};

/// GET /api/permissions - List permissions, optionally filtered by module
/// and free-text query
pub async fn list(
    State(state): State<ServerState>,
    Query(filter): Query<PermissionFilter>,
) -> AppResult<Json<Vec<Permission>>> {
    let permissions = state.catalog.list_permissions(&filter).await?;
    Ok(Json(permissions))
}

/// GET /api/permissions/grouped - Permissions grouped by module
pub async fn grouped(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<PermissionGroup>>> {
    let groups = state.catalog.group_permissions().await?;
    Ok(Json(groups))
}

/// GET /api/permissions/modules - Per-module summary counts
pub async fn modules(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<crate::catalog::ModuleSummary>>> {
    let summaries = state.catalog.module_summaries().await?;
    Ok(Json(summaries))
}

/// GET /api/permissions/{code}
pub async fn get_by_code(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<Json<Permission>> {
    let permission = state.catalog.get_permission(&code).await?;
    Ok(Json(permission))
}

/// POST /api/permissions - Create a custom permission
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PermissionCreate>,
) -> AppResult<(StatusCode, Json<Permission>)> {
    tracing::info!(code = %payload.code, "Creating permission");
    let permission = state.catalog.create_permission(payload).await?;
    Ok((StatusCode::CREATED, Json(permission)))
}

/// PUT /api/permissions/{code} - Patch editable fields
pub async fn update(
    State(state): State<ServerState>,
    Path(code): Path<String>,
    Json(payload): Json<PermissionUpdate>,
) -> AppResult<Json<Permission>> {
    let permission = state.catalog.update_permission(&code, payload).await?;
    Ok(Json(permission))
}

/// DELETE /api/permissions/{code} - Delete an unreferenced custom permission
pub async fn delete(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<StatusCode> {
    state.catalog.delete_permission(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Serialize)]
pub struct PurgeResponse {
    pub code: String,
    pub stripped_roles: usize,
}

/// POST /api/permissions/{code}/purge - Strip the permission from every
/// role, then delete it
pub async fn purge(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<Json<PurgeResponse>> {
    tracing::info!(code = %code, "Purging permission everywhere");
    let stripped_roles = state.catalog.remove_permission_everywhere(&code).await?;
    Ok(Json(PurgeResponse {
        code,
        stripped_roles,
    }))
}
