//! Employee DTOs.

use roster_core::{Employee, RosterError, RosterResult, ValidateExt};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for create and update.
///
/// Fields are optional at the JSON level so a missing or `null` name/email
/// surfaces as a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct EmployeeRequest {
    /// Ignored. IDs are always assigned by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[validate(required(message = "name is required"))]
    #[schema(example = "Ann")]
    pub name: Option<String>,

    #[validate(required(message = "email is required"))]
    #[schema(example = "a@x.com")]
    pub email: Option<String>,
}

impl EmployeeRequest {
    /// Builds a request with name and email set.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Validates the request and returns `(name, email)`.
    pub fn into_details(self) -> RosterResult<(String, String)> {
        self.validate_request()?;

        match (self.name, self.email) {
            (Some(name), Some(email)) => Ok((name, email)),
            _ => Err(RosterError::validation("name and email are required")),
        }
    }
}

/// Employee as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "a@x.com")]
    pub email: String,
}

impl TryFrom<Employee> for EmployeeResponse {
    type Error = RosterError;

    fn try_from(employee: Employee) -> Result<Self, Self::Error> {
        let id = employee
            .id
            .ok_or_else(|| RosterError::internal("Stored employee has no ID"))?;

        Ok(Self {
            id: id.into_inner(),
            name: employee.name,
            email: employee.email,
        })
    }
}
