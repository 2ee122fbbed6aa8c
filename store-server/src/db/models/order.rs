//! Order Model
//!
//! A finalized cart snapshot with delivery details. Orders are never mutated
//! after creation; the only later operation is admin deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::cart::CartLine;
use super::serde_helpers;

pub type OrderId = RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<OrderId>,
    pub name: String,
    pub phone: String,
    pub address: String,
    /// The cart lines as they were at confirmation
    pub items: Vec<CartLine>,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}
