//! Process-local employee store.

use crate::traits::EmployeeRepository;
use async_trait::async_trait;
use parking_lot::RwLock;
use roster_core::{Employee, EmployeeId, RosterError, RosterResult};
use shaku::Component;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;

/// In-memory employee repository.
///
/// Enforces the same ID and email-uniqueness rules as the MySQL table, so
/// the service behaves identically on either backend. Data is lost when the
/// process exits.
#[derive(Component, Default)]
#[shaku(interface = EmployeeRepository)]
pub struct InMemoryEmployeeRepository {
    #[shaku(default)]
    employees: RwLock<BTreeMap<EmployeeId, Employee>>,
    #[shaku(default)]
    last_id: AtomicI64,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty repository. The first saved employee gets ID 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored employees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.read().len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.read().is_empty()
    }

    fn email_taken(
        employees: &BTreeMap<EmployeeId, Employee>,
        email: &str,
        except: Option<EmployeeId>,
    ) -> bool {
        employees
            .values()
            .any(|e| e.email == email && e.id != except)
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn save(&self, employee: &Employee) -> RosterResult<Employee> {
        let mut employees = self.employees.write();

        if Self::email_taken(&employees, &employee.email, employee.id) {
            return Err(RosterError::conflict(format!(
                "Email '{}' already exists",
                employee.email
            )));
        }

        let stored = match employee.id {
            Some(id) => {
                if !employees.contains_key(&id) {
                    return Err(RosterError::not_found("Employee", id));
                }
                employee.clone()
            }
            None => {
                let id = EmployeeId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
                debug!("Assigned employee id: {}", id);
                employee.clone().with_id(id)
            }
        };

        if let Some(id) = stored.id {
            employees.insert(id, stored.clone());
        }
        Ok(stored)
    }

    async fn find_all(&self) -> RosterResult<Vec<Employee>> {
        Ok(self.employees.read().values().cloned().collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> RosterResult<Option<Employee>> {
        Ok(self.employees.read().get(&id).cloned())
    }

    async fn exists_by_id(&self, id: EmployeeId) -> RosterResult<bool> {
        Ok(self.employees.read().contains_key(&id))
    }

    async fn exists_by_email(&self, email: &str) -> RosterResult<bool> {
        Ok(Self::email_taken(&self.employees.read(), email, None))
    }

    async fn delete_by_id(&self, id: EmployeeId) -> RosterResult<()> {
        self.employees.write().remove(&id);
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryEmployeeRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryEmployeeRepository")
            .field("len", &self.len())
            .finish()
    }
}
