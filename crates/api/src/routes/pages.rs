//! HTML page routes, mounted at the root.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// ```text
/// GET  /portfolio   -> project gallery
/// GET  /about       -> about page
/// GET  /contact     -> contact form
/// POST /contact     -> submit contact form
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/portfolio", get(pages::portfolio))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact).post(pages::submit_contact))
}
