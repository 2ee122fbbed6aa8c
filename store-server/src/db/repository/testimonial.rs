//! Testimonial Repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{Testimonial, TestimonialCreate, TestimonialUpdate};

const TESTIMONIAL_TABLE: &str = "testimonial";

#[derive(Clone)]
pub struct TestimonialRepository {
    base: BaseRepository,
}

impl TestimonialRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Testimonial>> {
        let testimonials: Vec<Testimonial> = self
            .base
            .db()
            .query("SELECT * FROM testimonial ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(testimonials)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Testimonial>> {
        let testimonial: Option<Testimonial> = self
            .base
            .db()
            .select(record_id(TESTIMONIAL_TABLE, id))
            .await?;
        Ok(testimonial)
    }

    pub async fn create(&self, data: TestimonialCreate) -> RepoResult<Testimonial> {
        let testimonial = Testimonial {
            id: None,
            name: data.name,
            stars: data.stars,
            feedback: data.feedback,
            created_at: Utc::now(),
        };

        let created: Option<Testimonial> = self
            .base
            .db()
            .create(TESTIMONIAL_TABLE)
            .content(testimonial)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create testimonial".to_string()))
    }

    pub async fn update(&self, id: &str, data: TestimonialUpdate) -> RepoResult<Testimonial> {
        let rid = record_id(TESTIMONIAL_TABLE, id);

        let mut set_parts: Vec<&str> = Vec::new();
        if data.name.is_some() {
            set_parts.push("name = $name");
        }
        if data.stars.is_some() {
            set_parts.push("stars = $stars");
        }
        if data.feedback.is_some() {
            set_parts.push("feedback = $feedback");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Testimonial {} not found", id)));
        }

        let query_str = format!("UPDATE $rid SET {} RETURN AFTER", set_parts.join(", "));

        let mut query = self.base.db().query(&query_str).bind(("rid", rid));
        if let Some(v) = data.name {
            query = query.bind(("name", v));
        }
        if let Some(v) = data.stars {
            query = query.bind(("stars", v));
        }
        if let Some(v) = data.feedback {
            query = query.bind(("feedback", v));
        }

        let testimonials: Vec<Testimonial> = query.await?.take(0)?;
        testimonials
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Testimonial {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let deleted: Option<Testimonial> = self
            .base
            .db()
            .delete(record_id(TESTIMONIAL_TABLE, id))
            .await?;
        Ok(deleted.is_some())
    }
}
