//! # Roster Domain
//!
//! Domain entities for the Roster service. The employee is the only
//! persisted entity; it has no relationships.

mod employee;

pub use employee::*;
