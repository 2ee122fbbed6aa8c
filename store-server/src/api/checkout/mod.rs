//! Checkout API

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub use handler::CheckoutRequest;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/checkout", post(handler::confirm))
}
