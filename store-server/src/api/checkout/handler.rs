//! Checkout handler
//!
//! Single-step confirmation: no payment integration and no order status
//! machine. On success the order row exists, per-product sales counters
//! moved, and the account cart (if any) is empty.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Deserialize;

use crate::cart::checkout_totals;
use crate::core::ServerState;
use crate::db::models::{CartLine, Order};
use crate::db::repository::{CustomerRepository, OrderRepository, ProductRepository};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResponse, AppResult, ok};

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub name: String,
    pub phone: String,
    pub address: String,
    /// Account checkout: take the cart stored for this customer
    pub email: Option<String>,
    /// Anonymous checkout: the browser-local cart lines
    #[serde(default)]
    pub lines: Vec<CartLine>,
}

/// POST /api/checkout
pub async fn confirm(
    State(state): State<ServerState>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<AppResponse<Order>>> {
    // The original form message, kept verbatim for the storefront
    if payload.name.trim().is_empty()
        || payload.phone.trim().is_empty()
        || payload.address.trim().is_empty()
    {
        return Err(AppError::validation("Tous les champs sont obligatoires."));
    }
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.address, "address", MAX_ADDRESS_LEN)?;

    let customers = CustomerRepository::new(state.db.clone());
    let items = match &payload.email {
        Some(email) => {
            let customer = customers
                .find_by_email(email)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Customer {}", email)))?;
            customer.cart
        }
        None => payload.lines,
    };

    if items.is_empty() {
        return Err(AppError::validation("Votre panier est vide."));
    }
    if items.iter().any(|l| l.quantity < 1) {
        return Err(AppError::validation("Cart quantities must be at least 1"));
    }

    let totals = checkout_totals(&items, state.config.delivery_fee);

    let orders = OrderRepository::new(state.db.clone());
    let order = orders
        .create(Order {
            id: None,
            name: payload.name,
            phone: payload.phone,
            address: payload.address,
            items: items.clone(),
            subtotal: totals.subtotal,
            delivery_fee: totals.delivery_fee,
            total_price: totals.total,
            created_at: Utc::now(),
        })
        .await?;

    // Best-effort sales bump; a product deleted mid-checkout is not worth
    // failing the order over
    let products = ProductRepository::new(state.db.clone());
    for line in &items {
        if let Err(e) = products
            .increment_sales(&line.product.to_string(), line.quantity)
            .await
        {
            tracing::warn!(product = %line.product, error = %e, "Sales counter not updated");
        }
    }

    // Account checkout clears the stored cart wholesale
    if let Some(email) = &payload.email {
        customers.set_cart(email, Vec::new()).await?;
        state.cart_events.publish(email, 0);
    }

    tracing::info!(
        order = ?order.id,
        total = order.total_price,
        items = order.items.len(),
        "Order confirmed"
    );

    Ok(ok(order))
}
