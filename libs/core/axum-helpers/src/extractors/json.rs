//! JSON body extractor for create endpoints.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Like [`axum::Json`], but any decoding failure (wrong content type,
/// syntax error, missing field) rejects with 422 `INVALID_JSON`.
///
/// Update and login endpoints that want 400 instead take
/// `Result<Json<T>, JsonRejection>` and convert with `AppError::from`.
///
/// # Example
/// ```ignore
/// async fn create_product(JsonBody(input): JsonBody<CreateProduct>) -> impl IntoResponse {
///     // ...
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(AppError::InvalidJson)?;

        Ok(JsonBody(value))
    }
}
