//! Permission API Module
//!
//! | Path | Methods |
//! |------|---------|
//! | /api/permissions | GET, POST |
//! | /api/permissions/grouped | GET |
//! | /api/permissions/modules | GET |
//! | /api/permissions/{code} | GET, PUT, DELETE |
//! | /api/permissions/{code}/purge | POST |

mod handler;

use axum::{
    routing::{get, post},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/permissions", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/grouped", get(handler::grouped))
        .route("/modules", get(handler::modules))
        .route(
            "/{code}",
            get(handler::get_by_code)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{code}/purge", post(handler::purge))
}
