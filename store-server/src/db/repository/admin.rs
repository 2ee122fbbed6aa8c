//! Admin Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Admin;

const ADMIN_TABLE: &str = "admin";

#[derive(Clone)]
pub struct AdminRepository {
    base: BaseRepository,
}

impl AdminRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Admin>> {
        let admins: Vec<Admin> = self
            .base
            .db()
            .query("SELECT * FROM admin WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?
            .take(0)?;
        Ok(admins.into_iter().next())
    }

    pub async fn is_empty(&self) -> RepoResult<bool> {
        let admins: Vec<Admin> = self.base.db().select(ADMIN_TABLE).await?;
        Ok(admins.is_empty())
    }

    pub async fn create(&self, admin: Admin) -> RepoResult<Admin> {
        let created: Option<Admin> = self.base.db().create(ADMIN_TABLE).content(admin).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create admin".to_string()))
    }
}
