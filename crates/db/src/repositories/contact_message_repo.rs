//! Repository for the `contact_messages` table.

use sqlx::PgPool;

use crate::models::contact_message::{ContactMessage, CreateContactMessage};

const COLUMNS: &str = "id, name, email, message, created_at";

/// Provides insert and list operations for contact messages.
pub struct ContactMessageRepo;

impl ContactMessageRepo {
    /// Store a submission, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_messages (name, email, message)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List every message, most recent first. Messages sharing a timestamp
    /// fall back to descending id so later inserts still come first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_messages ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .fetch_all(pool)
            .await
    }
}
