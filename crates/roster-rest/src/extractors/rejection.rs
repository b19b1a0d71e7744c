//! Shared rejection for malformed requests.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

/// Rejection for a request that could not be parsed.
///
/// The reason is logged, never sent to the client.
#[derive(Debug, Clone)]
pub struct InvalidRequest {
    reason: String,
}

impl InvalidRequest {
    /// Creates a rejection with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Returns why the request was rejected.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl IntoResponse for InvalidRequest {
    fn into_response(self) -> Response {
        debug!(reason = %self.reason, "Rejected malformed request");
        StatusCode::BAD_REQUEST.into_response()
    }
}

/// Rejection for a request body that could not be read as JSON.
#[derive(Debug)]
pub enum BodyRejection {
    /// Body exceeded the configured size limit. Answered with 413.
    TooLarge,
    /// Anything else. Answered with 400.
    Invalid(InvalidRequest),
}

impl From<JsonRejection> for BodyRejection {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::TooLarge
        } else {
            Self::Invalid(InvalidRequest::new(rejection.body_text()))
        }
    }
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        match self {
            Self::TooLarge => {
                debug!("Rejected oversized request body");
                StatusCode::PAYLOAD_TOO_LARGE.into_response()
            }
            Self::Invalid(invalid) => invalid.into_response(),
        }
    }
}
