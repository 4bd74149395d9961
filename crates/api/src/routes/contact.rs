//! Route definitions for the `/contact` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(contact::list).post(contact::submit))
}
