//! Contact message entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Serialize, Serializer};
use sqlx::FromRow;

/// A row from the `contact_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    /// Exposed to clients as a string identifier.
    #[serde(serialize_with = "id_as_string")]
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: Timestamp,
}

/// DTO for storing a validated contact submission.
#[derive(Debug, Clone)]
pub struct CreateContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn id_as_string<S: Serializer>(id: &DbId, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(id)
}
