//! Employee controller.

use crate::{
    extractors::{IdPath, JsonBody},
    responses::ApiResult,
    state::AppState,
};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use roster_service::{EmployeeRequest, EmployeeResponse};
use tracing::debug;

/// Creates the employee router, mounted at `/employees`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

/// Create an employee.
///
/// Any `id` in the body is ignored; the store assigns one.
#[utoipa::path(
    post,
    path = "/employees",
    tag = "employees",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Missing name or email, or malformed JSON"),
        (status = 413, description = "Body exceeds the size limit"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<EmployeeRequest>,
) -> ApiResult<(StatusCode, Json<EmployeeResponse>)> {
    debug!("Create employee request");

    let response = state.employee_service.create_employee(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// List all employees.
#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    responses(
        (status = 200, description = "All employees", body = [EmployeeResponse])
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.employee_service.list_employees().await?;
    Ok(Json(employees))
}

/// Get an employee by ID.
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 400, description = "ID is not a number"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<EmployeeResponse>> {
    let response = state.employee_service.get_employee(id).await?;
    Ok(Json(response))
}

/// Replace an employee's name and email.
#[utoipa::path(
    put,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponse),
        (status = 400, description = "Missing name or email, malformed JSON, or bad ID"),
        (status = 413, description = "Body exceeds the size limit"),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Email already in use by another employee")
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<EmployeeRequest>,
) -> ApiResult<Json<EmployeeResponse>> {
    debug!("Update employee request: {}", id);

    let response = state.employee_service.update_employee(id, request).await?;
    Ok(Json(response))
}

/// Delete an employee.
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 400, description = "ID is not a number"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<StatusCode> {
    debug!("Delete employee request: {}", id);

    state.employee_service.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
