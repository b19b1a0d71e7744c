//! Repository trait definitions.

use roster_core::{Employee, EmployeeId, Interface, RosterResult};
use async_trait::async_trait;

/// Employee repository trait.
///
/// Implementations assign IDs on first save and keep emails unique: a save
/// that would duplicate another employee's email fails with
/// [`RosterError::Conflict`](roster_core::RosterError::Conflict).
#[async_trait]
pub trait EmployeeRepository: Interface + Send + Sync {
    /// Inserts the employee if it has no ID, otherwise overwrites the stored record.
    ///
    /// Returns the stored state, including the assigned ID.
    async fn save(&self, employee: &Employee) -> RosterResult<Employee>;

    /// Returns every stored employee.
    async fn find_all(&self) -> RosterResult<Vec<Employee>>;

    /// Finds an employee by ID.
    async fn find_by_id(&self, id: EmployeeId) -> RosterResult<Option<Employee>>;

    /// Checks if an employee with the given ID exists.
    async fn exists_by_id(&self, id: EmployeeId) -> RosterResult<bool>;

    /// Checks if any employee already uses the email (exact match).
    async fn exists_by_email(&self, email: &str) -> RosterResult<bool>;

    /// Deletes an employee by ID. Deleting a missing ID is a no-op.
    async fn delete_by_id(&self, id: EmployeeId) -> RosterResult<()>;
}
