//! Product Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

pub type ProductId = RecordId;

/// Catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<ProductId>,
    /// Display name; also the slug source for detail-page routing
    pub title: String,
    pub description: Option<String>,
    /// Base price in dinars
    pub price: f64,
    /// Discounted price; the item is on promotion when present and > 0
    pub promo: Option<f64>,
    /// Ordered image locations; the first is the cover image
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Selectable variant labels; non-empty means a color must be chosen
    /// before the product can be added to a cart
    #[serde(default)]
    pub colors: Vec<String>,
    /// Stock flag (true = in stock)
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub status: bool,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Units sold, maintained at checkout; drives best-selling ordering
    #[serde(default)]
    pub sales: i64,
}

fn default_true() -> bool {
    true
}

impl Product {
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            price,
            promo: None,
            image_urls: Vec::new(),
            colors: Vec::new(),
            status: true,
            category: None,
            subcategory: None,
            created_at: Utc::now(),
            sales: 0,
        }
    }

    /// Promo price when set and nonzero, otherwise the base price.
    /// Used for price-based sorting and display.
    pub fn effective_price(&self) -> f64 {
        match self.promo {
            Some(p) if p > 0.0 => p,
            _ => self.price,
        }
    }

    /// Whether the promo price applies
    pub fn on_promo(&self) -> bool {
        matches!(self.promo, Some(p) if p > 0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub promo: Option<f64>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub status: Option<bool>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
}
