//! Handlers for the `/projects` resource.

use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use folio_core::category::is_known_category;
use folio_core::error::CoreError;
use folio_core::image::encode_image;
use folio_core::project_form::ProjectForm;
use folio_db::models::project::{CreateProject, Project};
use folio_db::repositories::ProjectRepo;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::query::ProjectListParams;
use crate::response::{ProjectCreatedResponse, ProjectListResponse, PROJECT_CREATED};
use crate::state::AppState;

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<ProjectListResponse>> {
    let projects = ProjectRepo::list(&state.pool, params.category_filter()).await?;
    Ok(Json(ProjectListResponse { projects }))
}

/// GET /api/projects/{id}
///
/// Ids that are not even UUIDs cannot exist, so they are reported as not
/// found rather than as a malformed request.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: id.clone(),
        })
    };

    let project_id = Uuid::parse_str(&id).map_err(|_| not_found())?;
    let project = ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(project))
}

/// POST /api/projects
///
/// Accepts a multipart form with `title`, `description`, `category`,
/// optional `featured`, and an `image` file. The image is stored inline as
/// base64. Category is not validated; unknown values are only logged.
pub async fn create(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<ProjectCreatedResponse>> {
    let mut multipart = multipart?;
    let mut form = ProjectForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        match name.as_str() {
            "title" => form.title = Some(field.text().await?),
            "description" => form.description = Some(field.text().await?),
            "category" => form.category = Some(field.text().await?),
            "featured" => form.featured = Some(field.text().await?),
            "image" => {
                tracing::debug!(
                    file_name = ?field.file_name(),
                    content_type = ?field.content_type(),
                    "Receiving project image"
                );
                form.image = Some(field.bytes().await?.to_vec());
            }
            other => tracing::debug!(field = other, "Ignoring unexpected multipart field"),
        }
    }

    let submission = form.into_submission()?;

    if !is_known_category(&submission.category) {
        tracing::warn!(
            category = %submission.category,
            "Project uses a category outside the known catalogue"
        );
    }

    let input = CreateProject {
        image: encode_image(&submission.image),
        title: submission.title,
        description: submission.description,
        category: submission.category,
        featured: submission.featured,
    };

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(
        project_id = %project.id,
        category = %project.category,
        featured = project.featured,
        image_bytes = submission.image.len(),
        "Project created"
    );

    Ok(Json(ProjectCreatedResponse {
        message: PROJECT_CREATED,
        project,
    }))
}
