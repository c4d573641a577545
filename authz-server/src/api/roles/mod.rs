//! Role API Module
//!
//! | Path | Methods |
//! |------|---------|
//! | /api/roles | GET, POST |
//! | /api/roles/{code} | GET, PUT, DELETE |
//! | /api/roles/{code}/matrix | GET |
//! | /api/roles/{code}/permissions | GET, PUT |
//! | /api/roles/{code}/permissions/{permission} | GET, POST, DELETE |
//! | /api/roles/{code}/users | POST, DELETE |

mod handler;

use axum::{
    routing::{get, post},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/roles", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{code}",
            get(handler::get_by_code)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{code}/matrix", get(handler::matrix))
        .route(
            "/{code}/permissions",
            get(handler::list_permissions).put(handler::replace_permissions),
        )
        .route(
            "/{code}/permissions/{permission}",
            get(handler::check_permission)
                .post(handler::grant)
                .delete(handler::revoke),
        )
        .route(
            "/{code}/users",
            post(handler::attach_user).delete(handler::detach_user),
        )
}
