//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::catalog::{ListingPage, ListingQuery, SortKey, slug};
use crate::core::ServerState;
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use crate::db::repository::ProductRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_TEXT_LEN, MAX_URL_LEN, validate_optional_text,
    validate_price, validate_required_text,
};
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};

/// Query parameters accepted by the listing grid
#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    /// price_asc | price_desc | name_asc | name_desc | recent | oldest | best_selling
    pub sort: Option<String>,
    /// Zero-based page cursor
    pub page: Option<usize>,
    /// Category slug or display name
    pub category: Option<String>,
    /// Subcategory slug or display name
    pub subcategory: Option<String>,
    /// Only items with an active promo price
    pub promo: Option<bool>,
    /// Title search
    pub q: Option<String>,
}

impl From<ListingParams> for ListingQuery {
    fn from(params: ListingParams) -> Self {
        ListingQuery {
            category: params.category.map(|c| slug::unslugify(&c)),
            subcategory: params.subcategory.map(|s| slug::unslugify(&s)),
            promo_only: params.promo.unwrap_or(false),
            search: params.q,
            // Unrecognized sort keys fall back to the catalog order
            sort: params.sort.as_deref().and_then(SortKey::from_param),
            page: params.page.unwrap_or(0),
        }
    }
}

/// GET /api/products - one parameterized listing for every grid
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ListingParams>,
) -> AppResult<Json<AppResponse<ListingPage>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo.find_all().await?;

    let query: ListingQuery = params.into();
    Ok(ok(query.apply(products)))
}

/// GET /api/products/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {}", id)))?;
    Ok(ok(product))
}

/// GET /api/products/by-slug/:slug - detail-page lookup
///
/// First case-insensitive title match wins; duplicate titles collide here
/// and the catalog does not prevent them.
pub async fn get_by_slug(
    State(state): State<ServerState>,
    Path(slug_param): Path<String>,
) -> AppResult<Json<AppResponse<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo.find_all().await?;

    let product = products
        .into_iter()
        .find(|p| slug::matches(&slug_param, &p.title))
        .ok_or_else(|| AppError::not_found(format!("Product {}", slug_param)))?;
    Ok(ok(product))
}

fn validate_product_fields(
    title: Option<&str>,
    description: &Option<String>,
    price: Option<f64>,
    promo: Option<f64>,
    image_urls: Option<&[String]>,
    colors: Option<&[String]>,
    category: &Option<String>,
    subcategory: &Option<String>,
) -> AppResult<()> {
    if let Some(title) = title {
        validate_required_text(title, "title", MAX_NAME_LEN)?;
    }
    validate_optional_text(description, "description", MAX_TEXT_LEN)?;
    if let Some(price) = price {
        validate_price(price, "price")?;
    }
    if let Some(promo) = promo {
        validate_price(promo, "promo")?;
    }
    for url in image_urls.unwrap_or_default() {
        validate_required_text(url, "image url", MAX_URL_LEN)?;
    }
    for color in colors.unwrap_or_default() {
        validate_required_text(color, "color", MAX_SHORT_TEXT_LEN)?;
    }
    validate_optional_text(category, "category", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(subcategory, "subcategory", MAX_SHORT_TEXT_LEN)?;
    Ok(())
}

/// POST /api/products - admin
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<ProductCreate>,
) -> AppResult<Json<AppResponse<Product>>> {
    validate_product_fields(
        Some(&data.title),
        &data.description,
        Some(data.price),
        data.promo,
        Some(&data.image_urls),
        Some(&data.colors),
        &data.category,
        &data.subcategory,
    )?;

    let repo = ProductRepository::new(state.db.clone());
    let created = repo.create(data).await?;
    tracing::info!(title = %created.title, "Product created");
    Ok(ok(created))
}

/// PUT /api/products/:id - admin
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<ProductUpdate>,
) -> AppResult<Json<AppResponse<Product>>> {
    validate_product_fields(
        data.title.as_deref(),
        &data.description,
        data.price,
        data.promo,
        data.image_urls.as_deref(),
        data.colors.as_deref(),
        &data.category,
        &data.subcategory,
    )?;

    let repo = ProductRepository::new(state.db.clone());
    let updated = repo.update(&id, data).await?;
    Ok(ok(updated))
}

/// DELETE /api/products/:id - admin
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let repo = ProductRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found(format!("Product {}", id)));
    }
    Ok(ok_with_message((), "Product deleted"))
}
