//! Employee entity.

use crate::EmployeeId;
use serde::{Deserialize, Serialize};

/// Employee entity.
///
/// `id` is `None` until the store assigns one on first save; after that it
/// never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned identifier.
    pub id: Option<EmployeeId>,

    /// Display name.
    pub name: String,

    /// Email address, unique across all employees.
    pub email: String,
}

impl Employee {
    /// Creates a new, not yet persisted employee.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns the employee with the given store-assigned ID.
    #[must_use]
    pub fn with_id(mut self, id: EmployeeId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns true if the employee has not been persisted yet.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Overwrites name and email. The ID is left untouched.
    pub fn update_details(&mut self, name: impl Into<String>, email: impl Into<String>) {
        self.name = name.into();
        self.email = email.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_employee_has_no_id() {
        let employee = Employee::new("Ann", "a@x.com");
        assert!(employee.is_new());
        assert_eq!(employee.name, "Ann");
        assert_eq!(employee.email, "a@x.com");
    }

    #[test]
    fn test_with_id() {
        let employee = Employee::new("Ann", "a@x.com").with_id(EmployeeId::new(1));
        assert!(!employee.is_new());
        assert_eq!(employee.id, Some(EmployeeId::new(1)));
    }

    #[test]
    fn test_update_details_keeps_id() {
        let mut employee = Employee::new("Ann", "a@x.com").with_id(EmployeeId::new(3));
        employee.update_details("Annie", "annie@x.com");

        assert_eq!(employee.id, Some(EmployeeId::new(3)));
        assert_eq!(employee.name, "Annie");
        assert_eq!(employee.email, "annie@x.com");
    }

    #[test]
    fn test_update_details_is_idempotent() {
        let mut once = Employee::new("Ann", "a@x.com").with_id(EmployeeId::new(3));
        once.update_details("Bob", "b@x.com");

        let mut twice = once.clone();
        twice.update_details("Bob", "b@x.com");

        assert_eq!(once, twice);
    }
}
