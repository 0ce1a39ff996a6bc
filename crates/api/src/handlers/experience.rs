//! Handlers for the `/api/experiences` resource.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use porto_db::models::Experience;

use crate::error::{AppError, AppResult};
use crate::handlers::{decode_json, parse_id};
use crate::state::AppState;

/// GET /api/experiences
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Experience>>> {
    let experiences = state.experiences.get_all().await.map_err(AppError::Failed)?;
    tracing::debug!(count = experiences.len(), "Listed experiences");
    Ok(Json(experiences))
}

/// POST /api/experiences
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Experience>)> {
    let mut experience: Experience = decode_json(&body)?;
    state
        .experiences
        .create(&mut experience)
        .await
        .map_err(AppError::Rejected)?;
    Ok((StatusCode::CREATED, Json(experience)))
}

/// PUT /api/experiences
pub async fn update(State(state): State<AppState>, body: Bytes) -> AppResult<Json<Experience>> {
    let experience: Experience = decode_json(&body)?;
    state
        .experiences
        .update(&experience)
        .await
        .map_err(AppError::Rejected)?;
    Ok(Json(experience))
}

/// DELETE /api/experiences/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    state.experiences.delete(id).await.map_err(AppError::Failed)?;
    Ok(StatusCode::NO_CONTENT)
}
