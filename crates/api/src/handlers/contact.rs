//! Handlers for the `/contact` resource.

use axum::extract::State;
use axum::Json;
use folio_core::contact::ContactSubmission;
use folio_db::models::contact_message::CreateContactMessage;
use folio_db::repositories::ContactMessageRepo;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::response::{ContactListResponse, ContactSubmittedResponse, CONTACT_SUBMITTED};
use crate::state::AppState;

/// POST /api/contact
///
/// Body is validated before anything is stored: blank `name`/`message`,
/// a malformed `email`, or a missing field yields a 422.
pub async fn submit(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ContactSubmission>,
) -> AppResult<Json<ContactSubmittedResponse>> {
    let stored = ContactMessageRepo::create(
        &state.pool,
        &CreateContactMessage {
            name: input.name,
            email: input.email,
            message: input.message,
        },
    )
    .await?;

    tracing::info!(message_id = stored.id, "Contact message stored");

    Ok(Json(ContactSubmittedResponse {
        message: CONTACT_SUBMITTED,
        id: stored.id.to_string(),
    }))
}

/// GET /api/contact
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ContactListResponse>> {
    let messages = ContactMessageRepo::list(&state.pool).await?;
    Ok(Json(ContactListResponse { messages }))
}
