//! Database Module
//!
//! Embedded SurrealDB storage. The storefront keeps everything in one
//! namespace: products, categories, orders, customers (with their embedded
//! carts), testimonials and admin accounts.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "store";
const DATABASE: &str = "store";

/// Open the embedded database under `<work_dir>/data`.
pub async fn open(work_dir: &str) -> Result<Surreal<Db>, AppError> {
    let path = Path::new(work_dir).join("data").to_string_lossy().into_owned();
    let db = Surreal::new::<RocksDb>(path)
        .await
        .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
    select_namespace(&db).await?;
    tracing::info!("Database opened at {}/data", work_dir);
    Ok(db)
}

/// Open a throwaway in-memory database (tests).
pub async fn open_memory() -> Result<Surreal<Db>, AppError> {
    let db = Surreal::new::<Mem>(())
        .await
        .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
    select_namespace(&db).await?;
    Ok(db)
}

async fn select_namespace(db: &Surreal<Db>) -> Result<(), AppError> {
    db.use_ns(NAMESPACE)
        .use_db(DATABASE)
        .await
        .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))
}
