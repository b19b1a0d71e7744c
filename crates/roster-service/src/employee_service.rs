//! Employee service trait definition.

use crate::dto::{EmployeeRequest, EmployeeResponse};
use async_trait::async_trait;
use roster_core::{EmployeeId, Interface, RosterResult};

/// Employee service trait.
#[async_trait]
pub trait EmployeeService: Interface + Send + Sync {
    /// Creates an employee. Any ID in the request is ignored.
    ///
    /// Fails with `Validation` if name or email is missing and with
    /// `Conflict` if the email is already in use.
    async fn create_employee(&self, request: EmployeeRequest) -> RosterResult<EmployeeResponse>;

    /// Lists all employees.
    async fn list_employees(&self) -> RosterResult<Vec<EmployeeResponse>>;

    /// Gets an employee by ID.
    async fn get_employee(&self, id: EmployeeId) -> RosterResult<EmployeeResponse>;

    /// Overwrites an employee's name and email.
    async fn update_employee(
        &self,
        id: EmployeeId,
        request: EmployeeRequest,
    ) -> RosterResult<EmployeeResponse>;

    /// Deletes an employee.
    async fn delete_employee(&self, id: EmployeeId) -> RosterResult<()>;
}
