//! Cart line model
//!
//! A cart line is a snapshot of a product at the moment it was added, not a
//! live reference. The captured price is authoritative at checkout and is
//! never re-fetched from the catalog.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use super::product::Product;

/// One entry in a cart (anonymous browser cart or account-bound cart)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line snapshots
    #[serde(with = "serde_helpers::record_id")]
    pub product: RecordId,
    pub title: String,
    /// Base price captured at add time
    pub price: f64,
    /// Promo price captured at add time (display only; totals use `price`)
    pub promo: Option<f64>,
    /// Cover image captured at add time
    pub image_url: Option<String>,
    pub quantity: u32,
    /// Chosen variant, when the product carried a non-empty color set
    pub selected_color: Option<String>,
}

impl CartLine {
    /// Snapshot a catalog product into a new cart line with quantity 1.
    ///
    /// Returns `None` for a product that was never persisted (no record id);
    /// such a product cannot be matched on later merges.
    pub fn snapshot(product: &Product, selected_color: Option<String>) -> Option<Self> {
        let id = product.id.clone()?;
        Some(Self {
            product: id,
            title: product.title.clone(),
            price: product.price,
            promo: product.promo,
            image_url: product.image_urls.first().cloned(),
            quantity: 1,
            selected_color,
        })
    }
}
