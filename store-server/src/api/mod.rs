//! API route modules
//!
//! One module per resource, each exposing a `router()` that the server
//! merges. Handlers call repositories and wrap results in the unified
//! response envelope.
//!
//! - [`health`] - liveness check
//! - [`auth`] - admin console login
//! - [`products`] - catalog listing, slug lookup, admin CRUD
//! - [`categories`] - taxonomy reads and admin CRUD
//! - [`cart`] - account-bound carts and badge events
//! - [`checkout`] - order confirmation
//! - [`orders`] - admin order list
//! - [`testimonials`] - storefront quotes
//! - [`customers`] - shopper registration

pub mod auth;
pub mod cart;
pub mod categories;
pub mod checkout;
pub mod customers;
pub mod health;
pub mod orders;
pub mod products;
pub mod testimonials;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
