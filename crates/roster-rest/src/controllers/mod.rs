//! REST API controllers.

pub mod employee_controller;
pub mod health_controller;

pub use health_controller::HealthResponse;
