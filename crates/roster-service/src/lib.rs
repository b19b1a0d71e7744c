//! # Roster Service
//!
//! Business logic for the Roster employee service: request validation,
//! email uniqueness and the mapping between DTOs and the `Employee` entity.

pub mod dto;
pub mod employee_service;
pub mod r#impl;

pub use dto::*;
pub use employee_service::*;
pub use r#impl::EmployeeServiceImpl;
