//! Repository Module
//!
//! CRUD operations over the SurrealDB tables. One repository per table; all
//! of them share [`BaseRepository`] and the [`RepoError`] taxonomy.

pub mod admin;
pub mod category;
pub mod customer;
pub mod order;
pub mod product;
pub mod testimonial;

pub use admin::AdminRepository;
pub use category::CategoryRepository;
pub use customer::CustomerRepository;
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use testimonial::TestimonialRepository;

use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// ID convention: the API speaks "table:id" strings end to end. Bare keys are
// accepted on input and normalized here.

/// Build a [`RecordId`] for `table` from either a full `"table:id"` string or
/// a bare key.
pub fn record_id(table: &str, id: &str) -> RecordId {
    if let Ok(rid) = id.parse::<RecordId>()
        && rid.table() == table
    {
        return rid;
    }
    let key = id.strip_prefix(table).and_then(|r| r.strip_prefix(':')).unwrap_or(id);
    RecordId::from_table_key(table, key)
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
