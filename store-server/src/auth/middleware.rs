//! Authentication middleware
//!
//! Applied router-wide. The storefront surface (catalog reads, carts,
//! checkout, registration) is public; everything else is the admin console
//! and requires a valid bearer token with the admin role.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::Method;

use crate::auth::{JwtError, JwtService};
use crate::core::ServerState;
use crate::utils::AppError;

/// Public surface: (method, path) pairs that skip authentication
fn is_public(method: &Method, path: &str) -> bool {
    if method == Method::GET {
        // The whole read-side of the storefront is public
        if path == "/api/health"
            || path.starts_with("/api/products")
            || path.starts_with("/api/categories")
            || path.starts_with("/api/testimonials")
        {
            return true;
        }
    }
    // Shoppers are anonymous or email-keyed, never token-holders
    path.starts_with("/api/cart/")
        || path.starts_with("/api/customers")
        || path == "/api/checkout"
        || path == "/api/auth/login"
}

/// Require an admin token on everything that is not public.
///
/// | Failure | Status |
/// |---------|--------|
/// | Missing Authorization header | 401 |
/// | Expired token | 401 |
/// | Invalid token | 401 |
/// | Valid token, non-admin role | 403 |
pub async fn require_admin(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // CORS preflight never authenticates
    if req.method() == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Let non-API paths 404 naturally
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if is_public(req.method(), path) {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            tracing::warn!(target: "security", uri = %req.uri(), "Missing authorization header");
            return Err(AppError::Unauthorized);
        }
    };

    match state.jwt.validate_token(token) {
        Ok(claims) if claims.role == "admin" => Ok(next.run(req).await),
        Ok(claims) => Err(AppError::forbidden(format!(
            "Role {} cannot access the admin console",
            claims.role
        ))),
        Err(e) => {
            tracing::warn!(target: "security", error = %e, uri = %req.uri(), "Token rejected");
            match e {
                JwtError::ExpiredToken => Err(AppError::TokenExpired),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}
