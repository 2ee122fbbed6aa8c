//! Order API Handlers
//!
//! Orders are immutable once placed; the console can only read and delete
//! them.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::Order;
use crate::db::repository::OrderRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};

/// GET /api/orders - newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<AppResponse<Vec<Order>>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.find_all().await?;
    Ok(ok(orders))
}

/// GET /api/orders/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {}", id)))?;
    Ok(ok(order))
}

/// DELETE /api/orders/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let repo = OrderRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found(format!("Order {}", id)));
    }
    tracing::info!(order = %id, "Order deleted");
    Ok(ok_with_message((), "Order deleted"))
}
