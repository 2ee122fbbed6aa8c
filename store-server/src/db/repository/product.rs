//! Product Repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{Product, ProductCreate, ProductUpdate};

const PRODUCT_TABLE: &str = "product";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Fetch the whole catalog. Listing filters, sorting and paging run in
    /// memory on top of this, the same way every grid page consumes it.
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(products)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let product: Option<Product> =
            self.base.db().select(record_id(PRODUCT_TABLE, id)).await?;
        Ok(product)
    }

    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        let product = Product {
            id: None,
            title: data.title,
            description: data.description,
            price: data.price,
            promo: data.promo,
            image_urls: data.image_urls,
            colors: data.colors,
            status: data.status.unwrap_or(true),
            category: data.category,
            subcategory: data.subcategory,
            created_at: Utc::now(),
            sales: 0,
        };

        let created: Option<Product> = self
            .base
            .db()
            .create(PRODUCT_TABLE)
            .content(product)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<Product> {
        let rid = record_id(PRODUCT_TABLE, id);

        // Build dynamic SET clauses so untouched fields stay untouched
        let mut set_parts: Vec<&str> = Vec::new();
        if data.title.is_some() {
            set_parts.push("title = $title");
        }
        if data.description.is_some() {
            set_parts.push("description = $description");
        }
        if data.price.is_some() {
            set_parts.push("price = $price");
        }
        if data.promo.is_some() {
            set_parts.push("promo = $promo");
        }
        if data.image_urls.is_some() {
            set_parts.push("image_urls = $image_urls");
        }
        if data.colors.is_some() {
            set_parts.push("colors = $colors");
        }
        if data.status.is_some() {
            set_parts.push("status = $status");
        }
        if data.category.is_some() {
            set_parts.push("category = $category");
        }
        if data.subcategory.is_some() {
            set_parts.push("subcategory = $subcategory");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)));
        }

        let query_str = format!("UPDATE $rid SET {} RETURN AFTER", set_parts.join(", "));

        let mut query = self.base.db().query(&query_str).bind(("rid", rid));
        if let Some(v) = data.title {
            query = query.bind(("title", v));
        }
        if let Some(v) = data.description {
            query = query.bind(("description", v));
        }
        if let Some(v) = data.price {
            query = query.bind(("price", v));
        }
        if let Some(v) = data.promo {
            query = query.bind(("promo", v));
        }
        if let Some(v) = data.image_urls {
            query = query.bind(("image_urls", v));
        }
        if let Some(v) = data.colors {
            query = query.bind(("colors", v));
        }
        if let Some(v) = data.status {
            query = query.bind(("status", v));
        }
        if let Some(v) = data.category {
            query = query.bind(("category", v));
        }
        if let Some(v) = data.subcategory {
            query = query.bind(("subcategory", v));
        }

        let products: Vec<Product> = query.await?.take(0)?;
        products
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let deleted: Option<Product> =
            self.base.db().delete(record_id(PRODUCT_TABLE, id)).await?;
        Ok(deleted.is_some())
    }

    /// Add checked-out units to the best-selling counter.
    pub async fn increment_sales(&self, id: &str, quantity: u32) -> RepoResult<()> {
        let rid = record_id(PRODUCT_TABLE, id);
        self.base
            .db()
            .query("UPDATE $rid SET sales += $qty")
            .bind(("rid", rid))
            .bind(("qty", quantity as i64))
            .await?
            .check()?;
        Ok(())
    }
}
