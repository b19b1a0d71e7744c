//! JSON body extractor with empty-bodied rejections.

use super::BodyRejection;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

/// Drop-in replacement for [`axum::Json`] as a request extractor.
///
/// Syntax errors, type mismatches and a missing `Content-Type` all reject
/// with `400 Bad Request`. A body over the size limit keeps its `413`.
/// Field presence is checked by the service layer, not here.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T> std::ops::Deref for JsonBody<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(BodyRejection::from)?;

        Ok(Self(value))
    }
}
