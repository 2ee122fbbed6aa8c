//! Testimonial API Handlers
//!
//! The storefront reads; the admin console writes.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Testimonial, TestimonialCreate, TestimonialUpdate};
use crate::db::repository::TestimonialRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_TEXT_LEN, validate_required_text, validate_stars,
};
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};

/// GET /api/testimonials
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<Testimonial>>>> {
    let repo = TestimonialRepository::new(state.db.clone());
    let testimonials = repo.find_all().await?;
    Ok(ok(testimonials))
}

/// GET /api/testimonials/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Testimonial>>> {
    let repo = TestimonialRepository::new(state.db.clone());
    let testimonial = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Testimonial {}", id)))?;
    Ok(ok(testimonial))
}

/// POST /api/testimonials - admin
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<TestimonialCreate>,
) -> AppResult<Json<AppResponse<Testimonial>>> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&data.feedback, "feedback", MAX_TEXT_LEN)?;
    validate_stars(data.stars)?;

    let repo = TestimonialRepository::new(state.db.clone());
    let created = repo.create(data).await?;
    Ok(ok(created))
}

/// PUT /api/testimonials/:id - admin
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<TestimonialUpdate>,
) -> AppResult<Json<AppResponse<Testimonial>>> {
    if let Some(name) = &data.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(feedback) = &data.feedback {
        validate_required_text(feedback, "feedback", MAX_TEXT_LEN)?;
    }
    if let Some(stars) = data.stars {
        validate_stars(stars)?;
    }

    let repo = TestimonialRepository::new(state.db.clone());
    let updated = repo.update(&id, data).await?;
    Ok(ok(updated))
}

/// DELETE /api/testimonials/:id - admin
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let repo = TestimonialRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found(format!("Testimonial {}", id)));
    }
    Ok(ok_with_message((), "Testimonial deleted"))
}
