//! Testimonial Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

pub type TestimonialId = RecordId;

/// Customer quote shown on the storefront, managed from the admin console
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<TestimonialId>,
    pub name: String,
    /// 1 to 5
    pub stars: u8,
    pub feedback: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialCreate {
    pub name: String,
    pub stars: u8,
    pub feedback: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}
