//! Cargos API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Cargo router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/cargos", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
