//! API Route Module
//!
//! # Structure
//!
//! - [`health`] — health check endpoints
//! - [`permissions`] — permission catalog endpoints
//! - [`roles`] — role catalog and assignment endpoints

pub mod health;
pub mod permissions;
pub mod roles;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppError, AppResult};

/// HTTP access log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(permissions::router())
        .merge(roles::router())
}

/// Build the fully layered application router
pub fn router(state: ServerState) -> Router {
    build_app()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(log_request))
}
