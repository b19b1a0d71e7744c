//! MySQL employee repository implementation.

use crate::{traits::EmployeeRepository, DatabasePoolInterface};
use roster_core::{Employee, EmployeeId, RosterError, RosterResult};
use async_trait::async_trait;
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL employee repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = EmployeeRepository)]
pub struct MySqlEmployeeRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlEmployeeRepository {
    /// Creates a new MySQL employee repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    async fn insert(&self, employee: &Employee) -> RosterResult<Employee> {
        let result = sqlx::query("INSERT INTO employees (name, email) VALUES (?, ?)")
            .bind(&employee.name)
            .bind(&employee.email)
            .execute(self.pool.inner())
            .await?;

        let id = i64::try_from(result.last_insert_id())
            .map_err(|_| RosterError::internal("Generated employee ID out of range"))?;

        debug!("Inserted employee with id: {}", id);
        Ok(employee.clone().with_id(EmployeeId::new(id)))
    }

    async fn update(&self, id: EmployeeId, employee: &Employee) -> RosterResult<Employee> {
        let result = sqlx::query("UPDATE employees SET name = ?, email = ? WHERE id = ?")
            .bind(&employee.name)
            .bind(&employee.email)
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        // MySQL reports matched-but-unchanged rows as 0 affected, so confirm by ID
        if result.rows_affected() == 0 && !self.exists_by_id(id).await? {
            return Err(RosterError::not_found("Employee", id));
        }

        Ok(employee.clone())
    }
}

/// Database row representation of an employee.
#[derive(Debug, FromRow)]
struct EmployeeRow {
    id: i64,
    name: String,
    email: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee::new(row.name, row.email).with_id(EmployeeId::new(row.id))
    }
}

#[async_trait]
impl EmployeeRepository for MySqlEmployeeRepository {
    async fn save(&self, employee: &Employee) -> RosterResult<Employee> {
        match employee.id {
            None => self.insert(employee).await,
            Some(id) => {
                debug!("Updating employee: {}", id);
                self.update(id, employee).await
            }
        }
    }

    async fn find_all(&self) -> RosterResult<Vec<Employee>> {
        debug!("Finding all employees");

        let rows = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, name, email FROM employees ORDER BY id",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> RosterResult<Option<Employee>> {
        debug!("Finding employee by id: {}", id);

        let row = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, name, email FROM employees WHERE id = ?",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Employee::from))
    }

    async fn exists_by_id(&self, id: EmployeeId) -> RosterResult<bool> {
        let result: Option<i64> = sqlx::query_scalar("SELECT 1 FROM employees WHERE id = ? LIMIT 1")
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(result.is_some())
    }

    async fn exists_by_email(&self, email: &str) -> RosterResult<bool> {
        let result: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM employees WHERE email = ? LIMIT 1")
                .bind(email)
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }

    async fn delete_by_id(&self, id: EmployeeId) -> RosterResult<()> {
        debug!("Deleting employee: {}", id);

        sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }
}

impl std::fmt::Debug for MySqlEmployeeRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlEmployeeRepository").finish_non_exhaustive()
    }
}
