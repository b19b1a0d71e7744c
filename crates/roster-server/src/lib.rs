//! # Roster Server Library
//!
//! Dependency injection wiring, tracing setup and startup output for the
//! Roster server binary.

pub mod di;
pub mod startup;
pub mod telemetry;
