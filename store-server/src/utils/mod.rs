//! Utility module - shared helpers and types
//!
//! - [`AppError`] / [`AppResponse`] - unified error and response types
//! - [`validation`] - input length and shape checks
//! - [`logger`] - tracing setup

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResponse};
pub use error::{ok, ok_with_message};

/// Application-level Result type used in HTTP handlers
pub type AppResult<T> = Result<T, AppError>;
