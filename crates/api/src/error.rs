use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::error::CoreError;
use serde_json::{json, Map, Value};
use validator::ValidationErrors;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{ "error": ..., "code": ... }`, plus `"fields"` for
/// field-level validation failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Field-level validation failures on a request schema.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The JSON body was missing, had the wrong content type, or did not parse.
    #[error(transparent)]
    JsonBody(#[from] JsonRejection),

    /// The request was not a usable multipart body.
    #[error(transparent)]
    MultipartBody(#[from] MultipartRejection),

    /// A multipart field could not be read (truncated stream, size limit).
    #[error(transparent)]
    Multipart(#[from] MultipartError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found"),
                ),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Request shape errors ---
            AppError::Validation(errors) => {
                let body = json!({
                    "error": "Request validation failed",
                    "code": "VALIDATION_ERROR",
                    "fields": field_messages(errors),
                });
                return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response();
            }
            AppError::JsonBody(rejection) => {
                classify_rejection(rejection.status(), rejection.body_text())
            }
            AppError::MultipartBody(rejection) => {
                classify_rejection(rejection.status(), rejection.body_text())
            }
            AppError::Multipart(err) => classify_rejection(err.status(), err.body_text()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Flatten validator output into `{ field: [message, ...] }`.
///
/// Errors without a custom message fall back to their code (e.g. `"email"`).
fn field_messages(errors: &ValidationErrors) -> Value {
    let mut fields = Map::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| {
                let text = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                Value::String(text)
            })
            .collect();
        fields.insert(field.to_string(), Value::Array(messages));
    }
    Value::Object(fields)
}

/// Map an extractor rejection's status onto the error-code vocabulary.
fn classify_rejection(status: StatusCode, message: String) -> (StatusCode, &'static str, String) {
    let code = match status {
        StatusCode::UNPROCESSABLE_ENTITY => "VALIDATION_ERROR",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
        StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
        s if s.is_server_error() => {
            tracing::error!(error = %message, "Request body could not be read");
            return (
                status,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            );
        }
        _ => "BAD_REQUEST",
    };
    (status, code, message)
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
