//! Server state

use std::sync::Arc;

use argon2::Argon2;
use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db;
use crate::db::models::Admin;
use crate::db::repository::AdminRepository;
use crate::services::CartEvents;
use crate::utils::AppError;

/// Shared handle to everything a handler needs. Cloning is shallow.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    /// Embedded database
    pub db: Surreal<Db>,
    /// Admin token service
    pub jwt: Arc<JwtService>,
    /// Cart badge broadcast
    pub cart_events: CartEvents,
}

impl ServerState {
    /// Open the database under the configured work directory and prepare
    /// the services.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.work_dir)
            .map_err(|e| AppError::internal(format!("Cannot create work dir: {e}")))?;
        let db = db::open(&config.work_dir).await?;
        Self::with_db(config, db).await
    }

    /// Same wiring on a throwaway in-memory database (tests).
    pub async fn initialize_in_memory(config: &Config) -> Result<Self, AppError> {
        let db = db::open_memory().await?;
        Self::with_db(config, db).await
    }

    async fn with_db(config: &Config, db: Surreal<Db>) -> Result<Self, AppError> {
        let state = Self {
            config: config.clone(),
            db,
            jwt: Arc::new(JwtService::with_config(config.jwt.clone())),
            cart_events: CartEvents::new(),
        };
        state.seed_admin().await?;
        Ok(state)
    }

    /// Create the configured console account when the admin table is empty.
    async fn seed_admin(&self) -> Result<(), AppError> {
        let repo = AdminRepository::new(self.db.clone());
        if !repo.is_empty().await? {
            return Ok(());
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(self.config.admin_password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?
            .to_string();

        repo.create(Admin {
            id: None,
            email: self.config.admin_email.clone(),
            password_hash: hash,
        })
        .await?;

        tracing::info!(email = %self.config.admin_email, "Seeded first admin account");
        if self.config.is_production() && self.config.admin_password == "change-me" {
            tracing::warn!("ADMIN_PASSWORD still has its default value in production");
        }
        Ok(())
    }
}
