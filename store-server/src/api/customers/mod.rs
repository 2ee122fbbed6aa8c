//! Customer API

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/customers", post(handler::register))
        .route("/api/customers/{email}", get(handler::get_by_email))
}
