//! Admin login handler

use argon2::password_hash::PasswordHash;
use argon2::{Argon2, PasswordVerifier};
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::AdminRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
}

/// POST /api/auth/login
///
/// Every failure path returns the same invalid-credentials message so the
/// endpoint cannot be used to probe which admin accounts exist.
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AppResponse<LoginResponse>>> {
    let repo = AdminRepository::new(state.db.clone());
    let admin = repo
        .find_by_email(&payload.email)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    let parsed = PasswordHash::new(&admin.password_hash)
        .map_err(|e| AppError::internal(format!("Stored password hash is corrupt: {e}")))?;

    Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed)
        .map_err(|_| AppError::invalid_credentials())?;

    let token = state
        .jwt
        .generate_token(&admin.email)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    tracing::info!(target: "security", email = %admin.email, "Admin login");

    Ok(ok(LoginResponse {
        token,
        email: admin.email,
    }))
}
