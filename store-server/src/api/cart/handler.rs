//! Cart API Handlers
//!
//! Every mutation follows the same shape: load the customer's cart, run the
//! pure list operation, write the whole cart back, publish the new badge
//! count. The write is whole-list with no version check, so two concurrent
//! mutations of the same account keep last-write-wins semantics.

use axum::{
    Json,
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures::Stream;
use serde::Deserialize;
use tokio::sync::broadcast::error::RecvError;

use crate::cart;
use crate::core::ServerState;
use crate::db::models::CartLine;
use crate::db::repository::{CustomerRepository, ProductRepository, record_id};
use crate::utils::{AppError, AppResponse, AppResult, ok};

#[derive(Debug, Deserialize)]
pub struct AddCartItem {
    pub product_id: String,
    pub selected_color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetQuantity {
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct ImportCart {
    #[serde(default)]
    pub lines: Vec<CartLine>,
}

async fn load_cart(state: &ServerState, email: &str) -> AppResult<Vec<CartLine>> {
    let repo = CustomerRepository::new(state.db.clone());
    let customer = repo
        .find_by_email(email)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Customer {}", email)))?;
    Ok(customer.cart)
}

async fn store_cart(
    state: &ServerState,
    email: &str,
    lines: Vec<CartLine>,
) -> AppResult<Vec<CartLine>> {
    let repo = CustomerRepository::new(state.db.clone());
    let customer = repo.set_cart(email, lines).await?;
    state.cart_events.publish(email, customer.cart.len());
    Ok(customer.cart)
}

/// GET /api/cart/:email
///
/// Unknown customers read as an empty cart; registration only matters once
/// something is written.
pub async fn get_cart(
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> AppResult<Json<AppResponse<Vec<CartLine>>>> {
    let repo = CustomerRepository::new(state.db.clone());
    let cart = repo
        .find_by_email(&email)
        .await?
        .map(|c| c.cart)
        .unwrap_or_default();
    Ok(ok(cart))
}

/// POST /api/cart/:email/items - variant gate + merge-by-id
pub async fn add_item(
    State(state): State<ServerState>,
    Path(email): Path<String>,
    Json(payload): Json<AddCartItem>,
) -> AppResult<Json<AppResponse<Vec<CartLine>>>> {
    let products = ProductRepository::new(state.db.clone());
    let product = products
        .find_by_id(&payload.product_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {}", payload.product_id)))?;

    let lines = load_cart(&state, &email).await?;
    let lines = cart::add_to_cart(lines, &product, payload.selected_color)?;

    let cart = store_cart(&state, &email, lines).await?;
    Ok(ok(cart))
}

/// PUT /api/cart/:email/items/:product_id
///
/// Quantities below 1 are ignored, matching the grid's behavior; the cart
/// comes back unchanged.
pub async fn set_item_quantity(
    State(state): State<ServerState>,
    Path((email, product_id)): Path<(String, String)>,
    Json(payload): Json<SetQuantity>,
) -> AppResult<Json<AppResponse<Vec<CartLine>>>> {
    let rid = record_id("product", &product_id);
    let lines = load_cart(&state, &email).await?;
    let lines = cart::set_quantity(lines, &rid, payload.quantity);

    let cart = store_cart(&state, &email, lines).await?;
    Ok(ok(cart))
}

/// DELETE /api/cart/:email/items/:product_id
pub async fn remove_item(
    State(state): State<ServerState>,
    Path((email, product_id)): Path<(String, String)>,
) -> AppResult<Json<AppResponse<Vec<CartLine>>>> {
    let rid = record_id("product", &product_id);
    let lines = load_cart(&state, &email).await?;
    let lines = cart::remove_line(lines, &rid);

    let cart = store_cart(&state, &email, lines).await?;
    Ok(ok(cart))
}

/// POST /api/cart/:email/import
///
/// Merge a browser-local cart into the account cart, summing quantities by
/// product id. Reconciliation stays explicit: nothing merges implicitly at
/// login.
pub async fn import(
    State(state): State<ServerState>,
    Path(email): Path<String>,
    Json(payload): Json<ImportCart>,
) -> AppResult<Json<AppResponse<Vec<CartLine>>>> {
    let lines = load_cart(&state, &email).await?;
    let lines = cart::merge_carts(lines, payload.lines);

    let cart = store_cart(&state, &email, lines).await?;
    Ok(ok(cart))
}

/// DELETE /api/cart/:email
pub async fn clear(
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> AppResult<Json<AppResponse<Vec<CartLine>>>> {
    let cart = store_cart(&state, &email, Vec::new()).await?;
    Ok(ok(cart))
}

/// GET /api/cart/:email/events - SSE badge stream
///
/// Replaces the old fixed-interval badge polling: the client gets a push on
/// every cart write for this owner. The initial count comes from a plain
/// GET on connect.
pub async fn events(
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let rx = state.cart_events.subscribe();

    let stream = futures::stream::unfold((rx, email), |(mut rx, email)| async move {
        loop {
            match rx.recv().await {
                Ok(badge) if badge.owner == email => {
                    let event = Event::default().event("cart").json_data(&badge);
                    return Some((event, (rx, email)));
                }
                // Updates for other owners, or dropped intermediate counts:
                // only the latest value matters
                Ok(_) | Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
