//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_core::RosterError;
use tracing::{debug, error};

/// Application error type for Axum.
///
/// Renders as the bare status code of the wrapped error; details go to the
/// log only.
#[derive(Debug)]
pub struct AppError(pub RosterError);

impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(code = self.0.error_code(), error = %self.0, "Request failed");
        } else {
            debug!(code = self.0.error_code(), error = %self.0, "Request rejected");
        }

        status.into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        let cases = [
            (RosterError::validation("name is required"), StatusCode::BAD_REQUEST),
            (RosterError::not_found("Employee", 1), StatusCode::NOT_FOUND),
            (RosterError::conflict("taken"), StatusCode::CONFLICT),
            (RosterError::Database("down".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(AppError(err).into_response().status(), expected);
        }
    }
}
