//! Cart composition
//!
//! The write path for carts (variant gate, merge-by-id, quantity edits) and
//! the checkout arithmetic. Everything here is pure; the HTTP handlers own
//! persistence and badge notifications.

pub mod merge;
pub mod totals;

pub use merge::{CartError, add_to_cart, check_variant, merge_carts, remove_line, set_quantity};
pub use totals::{CheckoutTotals, DEFAULT_DELIVERY_FEE, checkout_totals};
