pub mod contact;
pub mod experience;
pub mod health;
pub mod pages;
pub mod portfolio;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                 list, create, update (id in body)
/// /projects/{id}            delete
///
/// /experiences              list, create, update (id in body)
/// /experiences/{id}         delete
///
/// /contacts                 list, create
/// /contacts/{id}            delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", portfolio::router())
        .nest("/experiences", experience::router())
        .nest("/contacts", contact::router())
}
