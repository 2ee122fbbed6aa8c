//! Checkout totals
//!
//! Uses rust_decimal for the arithmetic so float drift never reaches a
//! receipt. The subtotal multiplies each line's captured base price by its
//! quantity; promo snapshots are display-only and are not re-applied here,
//! and nothing is re-fetched from the catalog.

use rust_decimal::prelude::*;
use serde::Serialize;

use crate::db::models::CartLine;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Flat delivery fee in dinars, used when none is configured
pub const DEFAULT_DELIVERY_FEE: f64 = 8.0;

/// The three numbers shown at checkout
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CheckoutTotals {
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
}

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// `subtotal = Σ quantity × price`, `total = subtotal + delivery_fee`.
pub fn checkout_totals(lines: &[CartLine], delivery_fee: f64) -> CheckoutTotals {
    let subtotal: Decimal = lines
        .iter()
        .map(|line| to_decimal(line.price) * Decimal::from(line.quantity))
        .sum();
    let fee = to_decimal(delivery_fee);

    CheckoutTotals {
        subtotal: to_f64(subtotal),
        delivery_fee: to_f64(fee),
        total: to_f64(subtotal + fee),
    }
}
