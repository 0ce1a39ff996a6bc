//! Handlers for the `/api/projects` resource.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use porto_db::models::Portfolio;

use crate::error::{AppError, AppResult};
use crate::handlers::{decode_json, parse_id};
use crate::state::AppState;

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Portfolio>>> {
    let projects = state.portfolios.get_all().await.map_err(AppError::Failed)?;
    tracing::debug!(count = projects.len(), "Listed projects");
    Ok(Json(projects))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Portfolio>)> {
    let mut project: Portfolio = decode_json(&body)?;
    state
        .portfolios
        .create(&mut project)
        .await
        .map_err(AppError::Rejected)?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/projects
///
/// The id travels in the body.
pub async fn update(State(state): State<AppState>, body: Bytes) -> AppResult<Json<Portfolio>> {
    let project: Portfolio = decode_json(&body)?;
    state
        .portfolios
        .update(&project)
        .await
        .map_err(AppError::Rejected)?;
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    state.portfolios.delete(id).await.map_err(AppError::Failed)?;
    Ok(StatusCode::NO_CONTENT)
}
