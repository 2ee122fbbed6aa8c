//! Admin account model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Console operator. Passwords are stored as Argon2id hashes only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub email: String,
    pub password_hash: String,
}
