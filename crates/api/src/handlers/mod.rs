//! Request handlers.
//!
//! The JSON handlers decode the request themselves so that any malformed
//! body or path id becomes a plain 400 before a service is called. The page
//! handlers render templates from [`crate::templates`].

pub mod contact;
pub mod experience;
pub mod pages;
pub mod portfolio;

use axum::body::Bytes;
use porto_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Decode a JSON request body. The `Content-Type` header is not checked.
pub(crate) fn decode_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::Decode(e.to_string()))
}

/// Parse the `{id}` path segment.
pub(crate) fn parse_id(raw: &str) -> Result<DbId, AppError> {
    raw.parse()
        .map_err(|_| AppError::Decode(format!("invalid id '{raw}'")))
}
