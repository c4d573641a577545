//! Health check route
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /health | GET | status, version, catalog counts |

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::api::AppResult;
use crate::catalog::{PermissionFilter, RoleFilter};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    environment: String,
    permissions: usize,
    roles: usize,
}

async fn health(State(state): State<ServerState>) -> AppResult<Json<HealthResponse>> {
    let permissions = state
        .catalog
        .list_permissions(&PermissionFilter::default())
        .await?
        .len();
    let roles = state.catalog.list_roles(&RoleFilter::default()).await?.len();

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.environment.clone(),
        permissions,
        roles,
    }))
}
