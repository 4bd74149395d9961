pub mod contact;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET    /health                 -> health check
///
/// GET    /projects               -> list (?category=)
/// POST   /projects               -> create (multipart)
/// GET    /projects/{id}          -> get_by_id
///
/// GET    /contact                -> list
/// POST   /contact                -> submit
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/projects", project::router())
        .nest("/contact", contact::router())
}
