//! Request extractors that validate at the boundary.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that also runs the schema's `validator` rules.
///
/// Handlers taking `ValidatedJson<T>` only ever see input that passed
/// validation; failures short-circuit as [`AppError`] responses.
///
/// ```ignore
/// async fn submit(ValidatedJson(input): ValidatedJson<ContactSubmission>) -> AppResult<...> {
///     // `input` is known-good here.
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
