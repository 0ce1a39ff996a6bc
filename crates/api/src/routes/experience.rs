//! Route definitions for the `/experiences` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::experience;
use crate::state::AppState;

/// Routes mounted at `/experiences`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// PUT    /          -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(experience::list)
                .post(experience::create)
                .put(experience::update),
        )
        .route("/{id}", delete(experience::delete))
}
