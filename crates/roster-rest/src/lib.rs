//! # Roster REST
//!
//! HTTP surface of the Roster employee service, built on Axum.
//! Exposes employee CRUD under `/employees`, health probes, and the
//! OpenAPI document with Swagger UI.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
