//! Employee service implementation.

use crate::dto::{EmployeeRequest, EmployeeResponse};
use crate::employee_service::EmployeeService;
use async_trait::async_trait;
use roster_core::{Employee, EmployeeId, RosterError, RosterResult};
use roster_repository::EmployeeRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Employee service backed by an injected repository.
#[derive(Component)]
#[shaku(interface = EmployeeService)]
pub struct EmployeeServiceImpl {
    #[shaku(inject)]
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeServiceImpl {
    /// Creates a service over the given repository, bypassing DI.
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    async fn find_or_not_found(&self, id: EmployeeId) -> RosterResult<Employee> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::not_found("Employee", id))
    }
}

#[async_trait]
impl EmployeeService for EmployeeServiceImpl {
    async fn create_employee(&self, request: EmployeeRequest) -> RosterResult<EmployeeResponse> {
        if let Some(ignored) = request.id {
            debug!("Ignoring client-supplied employee id: {}", ignored);
        }

        let (name, email) = request.into_details()?;
        debug!("Creating employee: {}", email);

        // Fast path only; the unique constraint settles concurrent creates
        if self.repository.exists_by_email(&email).await? {
            return Err(RosterError::Conflict(format!(
                "Email '{}' already exists",
                email
            )));
        }

        let saved = self.repository.save(&Employee::new(name, email)).await?;
        let response = EmployeeResponse::try_from(saved)?;

        info!("Employee created: {}", response.id);
        Ok(response)
    }

    async fn list_employees(&self) -> RosterResult<Vec<EmployeeResponse>> {
        debug!("Listing employees");

        self.repository
            .find_all()
            .await?
            .into_iter()
            .map(EmployeeResponse::try_from)
            .collect()
    }

    async fn get_employee(&self, id: EmployeeId) -> RosterResult<EmployeeResponse> {
        debug!("Getting employee: {}", id);

        let employee = self.find_or_not_found(id).await?;
        EmployeeResponse::try_from(employee)
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        request: EmployeeRequest,
    ) -> RosterResult<EmployeeResponse> {
        debug!("Updating employee: {}", id);

        let mut employee = self.find_or_not_found(id).await?;
        let (name, email) = request.into_details()?;

        employee.update_details(name, email);
        let updated = self.repository.save(&employee).await?;

        info!("Employee updated: {}", id);
        EmployeeResponse::try_from(updated)
    }

    async fn delete_employee(&self, id: EmployeeId) -> RosterResult<()> {
        debug!("Deleting employee: {}", id);

        if !self.repository.exists_by_id(id).await? {
            return Err(RosterError::not_found("Employee", id));
        }

        self.repository.delete_by_id(id).await?;

        info!("Employee deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for EmployeeServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeServiceImpl").finish_non_exhaustive()
    }
}
