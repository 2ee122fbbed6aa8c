//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! CRUD handlers. The database does not enforce text lengths, so the API
//! boundary does.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: product title, category name, customer name, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Product descriptions and testimonial feedback
pub const MAX_TEXT_LEN: usize = 2000;

/// Short identifiers: phone numbers, color labels, subcategory names
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Image URLs
pub const MAX_URL_LEN: usize = 2048;

/// Delivery addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Minimal email shape check. Full RFC validation is out of scope; the
/// address is a lookup key here, not a delivery target.
pub fn validate_email(value: &str) -> Result<(), AppError> {
    validate_required_text(value, "email", MAX_EMAIL_LEN)?;
    if !value.contains('@') {
        return Err(AppError::validation("email is not a valid address"));
    }
    Ok(())
}

/// Prices must be finite and non-negative.
pub fn validate_price(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be a non-negative amount"
        )));
    }
    Ok(())
}

/// Testimonial ratings are 1 to 5 stars.
pub fn validate_stars(stars: u8) -> Result<(), AppError> {
    if !(1..=5).contains(&stars) {
        return Err(AppError::validation("stars must be between 1 and 5"));
    }
    Ok(())
}
