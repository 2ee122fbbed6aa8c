//! Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::catalog::slug;
use crate::core::ServerState;
use crate::db::models::{Category, CategoryCreate, CategoryUpdate};
use crate::db::repository::CategoryRepository;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};

/// GET /api/categories - navigation needs the full two-level taxonomy
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<Category>>>> {
    let repo = CategoryRepository::new(state.db.clone());
    let categories = repo.find_all().await?;
    Ok(ok(categories))
}

/// GET /api/categories/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Category>>> {
    let repo = CategoryRepository::new(state.db.clone());
    let category = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category {}", id)))?;
    Ok(ok(category))
}

/// GET /api/categories/by-slug/:slug
pub async fn get_by_slug(
    State(state): State<ServerState>,
    Path(slug_param): Path<String>,
) -> AppResult<Json<AppResponse<Category>>> {
    let repo = CategoryRepository::new(state.db.clone());
    let categories = repo.find_all().await?;

    let category = categories
        .into_iter()
        .find(|c| slug::matches(&slug_param, &c.name))
        .ok_or_else(|| AppError::not_found(format!("Category {}", slug_param)))?;
    Ok(ok(category))
}

fn validate_category_fields(name: Option<&str>, subcategories: Option<&[String]>) -> AppResult<()> {
    if let Some(name) = name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    for sub in subcategories.unwrap_or_default() {
        validate_required_text(sub, "subcategory", MAX_SHORT_TEXT_LEN)?;
    }
    Ok(())
}

/// POST /api/categories - admin
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<CategoryCreate>,
) -> AppResult<Json<AppResponse<Category>>> {
    validate_category_fields(Some(&data.name), Some(&data.subcategories))?;

    let repo = CategoryRepository::new(state.db.clone());
    let created = repo.create(data).await?;
    tracing::info!(name = %created.name, "Category created");
    Ok(ok(created))
}

/// PUT /api/categories/:id - admin
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<CategoryUpdate>,
) -> AppResult<Json<AppResponse<Category>>> {
    validate_category_fields(data.name.as_deref(), data.subcategories.as_deref())?;

    let repo = CategoryRepository::new(state.db.clone());
    let updated = repo.update(&id, data).await?;
    Ok(ok(updated))
}

/// DELETE /api/categories/:id - admin
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let repo = CategoryRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found(format!("Category {}", id)));
    }
    Ok(ok_with_message((), "Category deleted"))
}
