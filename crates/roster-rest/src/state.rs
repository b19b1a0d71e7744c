//! Application state for Axum handlers.

use roster_core::HealthCheck;
use roster_service::EmployeeService;
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<dyn EmployeeService>,
    /// Checks consulted by the readiness probe.
    pub health_checks: Vec<Arc<dyn HealthCheck>>,
}

impl AppState {
    /// Creates a new application state with no health checks.
    pub fn new(employee_service: Arc<dyn EmployeeService>) -> Self {
        Self {
            employee_service,
            health_checks: Vec::new(),
        }
    }

    /// Resolves the employee service from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn EmployeeService>,
    {
        Self::new(module.resolve())
    }

    /// Registers a check for the readiness probe.
    #[must_use]
    pub fn with_health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.health_checks.push(check);
        self
    }
}
