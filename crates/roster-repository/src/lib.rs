//! # Roster Repository
//!
//! Employee persistence behind the [`EmployeeRepository`] trait.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn EmployeeRepository>
//! MySqlEmployeeRepository  |  InMemoryEmployeeRepository
//!   ↓  Arc<dyn DatabasePoolInterface>
//! MySQL
//! ```
//!
//! Both implementations are shaku components; the server picks one at
//! startup from `database.backend`.

pub mod memory;
pub mod mysql;
pub mod pool;
pub mod traits;

pub use memory::*;
pub use mysql::*;
pub use pool::*;
pub use traits::*;
