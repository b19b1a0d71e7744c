//! Employee ID path extractor.

use super::InvalidRequest;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use roster_core::EmployeeId;

/// Extracts the `:id` path segment as an [`EmployeeId`].
///
/// A segment that is not a 64-bit integer rejects with `400 Bad Request`.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub EmployeeId);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = InvalidRequest;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| InvalidRequest::new(rejection.body_text()))?;

        Ok(Self(EmployeeId::new(id)))
    }
}
