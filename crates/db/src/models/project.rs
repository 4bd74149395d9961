//! Project entity model and DTOs.

use folio_core::types::{ProjectId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// The internal `seq` column only fixes insertion order and is not selected.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Base64-encoded image bytes.
    pub image: String,
    pub featured: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new project. The image must already be encoded.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub featured: bool,
}
