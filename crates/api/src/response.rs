//! Response envelope types for API handlers.
//!
//! Each endpoint wraps its payload in a named key (`projects`, `messages`,
//! ...) rather than returning bare arrays. Use these structs instead of
//! ad-hoc `serde_json::json!` bodies.

use folio_db::models::contact_message::ContactMessage;
use folio_db::models::project::Project;
use serde::Serialize;

pub const PROJECT_CREATED: &str = "Project created successfully";
pub const CONTACT_SUBMITTED: &str = "Contact message submitted successfully";

/// `GET /api/projects`
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
}

/// `POST /api/projects`
#[derive(Debug, Serialize)]
pub struct ProjectCreatedResponse {
    pub message: &'static str,
    pub project: Project,
}

/// `POST /api/contact`
#[derive(Debug, Serialize)]
pub struct ContactSubmittedResponse {
    pub message: &'static str,
    /// Storage identifier of the new message, as a string.
    pub id: String,
}

/// `GET /api/contact`
#[derive(Debug, Serialize)]
pub struct ContactListResponse {
    pub messages: Vec<ContactMessage>,
}
