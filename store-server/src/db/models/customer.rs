//! Customer Model
//!
//! A registered shopper. The account-bound cart is embedded in the customer
//! row and always read-modify-written in full; there is no per-line storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::cart::CartLine;
use super::serde_helpers;

pub type CustomerId = RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<CustomerId>,
    pub name: String,
    /// Lookup key; assumed unique
    pub email: String,
    #[serde(default)]
    pub cart: Vec<CartLine>,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            cart: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
}
