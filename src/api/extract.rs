//! Request extractors with API-conformant rejections.

use super::ApiError;
use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

/// JSON body extractor rejecting malformed or incomplete payloads with a 400.
///
/// The stock [`Json`] extractor answers deserialization failures with a 422;
/// this API reports every invalid body as a plain 400.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| ApiError::bad_request())?;
        Ok(Self(value))
    }
}
