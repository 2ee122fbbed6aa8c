//! Customer API Handlers
//!
//! Registration creates the row the account-bound cart hangs off. There is
//! no password and no session: the hosted auth provider in front of the
//! storefront owns identity, this API only needs the email key.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Customer, CustomerCreate};
use crate::db::repository::CustomerRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_email, validate_required_text};
use crate::utils::{AppError, AppResponse, AppResult, ok};

/// POST /api/customers
pub async fn register(
    State(state): State<ServerState>,
    Json(data): Json<CustomerCreate>,
) -> AppResult<Json<AppResponse<Customer>>> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_email(&data.email)?;

    let repo = CustomerRepository::new(state.db.clone());
    let created = repo.create(data).await?;
    tracing::info!(email = %created.email, "Customer registered");
    Ok(ok(created))
}

/// GET /api/customers/:email
pub async fn get_by_email(
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> AppResult<Json<AppResponse<Customer>>> {
    let repo = CustomerRepository::new(state.db.clone());
    let customer = repo
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Customer {}", email)))?;
    Ok(ok(customer))
}
