//! OpenAPI documentation for the REST API.

use crate::controllers::HealthResponse;
use roster_service::{EmployeeRequest, EmployeeResponse};
use utoipa::OpenApi;

/// OpenAPI documentation for the Roster API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "1.0.0",
        description = "Employee directory CRUD service",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::employee_controller::create_employee,
        crate::controllers::employee_controller::list_employees,
        crate::controllers::employee_controller::get_employee,
        crate::controllers::employee_controller::update_employee,
        crate::controllers::employee_controller::delete_employee,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(schemas(EmployeeRequest, EmployeeResponse, HealthResponse)),
    tags(
        (name = "employees", description = "Employee management endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_employee_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/employees"));
        assert!(doc.paths.paths.contains_key("/employees/{id}"));
        assert!(doc.paths.paths.contains_key("/ready"));
    }
}
