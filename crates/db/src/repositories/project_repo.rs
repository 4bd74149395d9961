//! Repository for the `projects` table.

use folio_core::types::ProjectId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::project::{CreateProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, category, image, featured, created_at";

/// Provides create and read operations for projects. Projects are never
/// updated or deleted.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project under a freshly generated id, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (id, title, description, category, image, featured)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.image)
            .bind(input.featured)
            .fetch_one(pool)
            .await
    }

    /// Find a project by id.
    pub async fn find_by_id(pool: &PgPool, id: ProjectId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects in insertion order, optionally restricted to one
    /// category (exact, case-sensitive match).
    pub async fn list(pool: &PgPool, category: Option<&str>) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE ($1::TEXT IS NULL OR category = $1)
             ORDER BY seq ASC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }
}
