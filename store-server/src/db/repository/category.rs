//! Category Repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{Category, CategoryCreate, CategoryUpdate};

const CATEGORY_TABLE: &str = "category";

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let categories: Vec<Category> = self
            .base
            .db()
            .query("SELECT * FROM category ORDER BY name")
            .await?
            .take(0)?;
        Ok(categories)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Category>> {
        let category: Option<Category> =
            self.base.db().select(record_id(CATEGORY_TABLE, id)).await?;
        Ok(category)
    }

    pub async fn create(&self, data: CategoryCreate) -> RepoResult<Category> {
        let category = Category {
            id: None,
            name: data.name,
            subcategories: data.subcategories,
            created_at: Utc::now(),
        };

        let created: Option<Category> = self
            .base
            .db()
            .create(CATEGORY_TABLE)
            .content(category)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create category".to_string()))
    }

    pub async fn update(&self, id: &str, data: CategoryUpdate) -> RepoResult<Category> {
        let rid = record_id(CATEGORY_TABLE, id);

        let mut set_parts: Vec<&str> = Vec::new();
        if data.name.is_some() {
            set_parts.push("name = $name");
        }
        if data.subcategories.is_some() {
            set_parts.push("subcategories = $subcategories");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)));
        }

        let query_str = format!("UPDATE $rid SET {} RETURN AFTER", set_parts.join(", "));

        let mut query = self.base.db().query(&query_str).bind(("rid", rid));
        if let Some(v) = data.name {
            query = query.bind(("name", v));
        }
        if let Some(v) = data.subcategories {
            query = query.bind(("subcategories", v));
        }

        let categories: Vec<Category> = query.await?.take(0)?;
        categories
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let deleted: Option<Category> =
            self.base.db().delete(record_id(CATEGORY_TABLE, id)).await?;
        Ok(deleted.is_some())
    }
}
