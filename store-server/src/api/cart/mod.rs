//! Cart API
//!
//! Account-bound carts, keyed by the customer's email. The anonymous
//! browser-local cart lives entirely in the client; its only server touch
//! points are checkout and the optional import into an account cart.

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/cart", cart_routes())
}

fn cart_routes() -> Router<ServerState> {
    Router::new()
        .route("/{email}", get(handler::get_cart).delete(handler::clear))
        .route("/{email}/items", post(handler::add_item))
        .route(
            "/{email}/items/{product_id}",
            delete(handler::remove_item).put(handler::set_item_quantity),
        )
        .route("/{email}/import", post(handler::import))
        .route("/{email}/events", get(handler::events))
}
