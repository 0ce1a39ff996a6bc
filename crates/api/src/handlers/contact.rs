//! Handlers for the `/api/contacts` resource. There is no update endpoint.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use porto_db::models::Contact;

use crate::error::{AppError, AppResult};
use crate::handlers::{decode_json, parse_id};
use crate::state::AppState;

/// GET /api/contacts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Contact>>> {
    let contacts = state.contacts.get_all().await.map_err(AppError::Failed)?;
    tracing::debug!(count = contacts.len(), "Listed contacts");
    Ok(Json(contacts))
}

/// POST /api/contacts
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Contact>)> {
    let mut contact: Contact = decode_json(&body)?;
    state
        .contacts
        .create(&mut contact)
        .await
        .map_err(AppError::Rejected)?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// DELETE /api/contacts/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    state.contacts.delete(id).await.map_err(AppError::Failed)?;
    Ok(StatusCode::NO_CONTENT)
}
