use async_trait::async_trait;
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use tracing::{debug, info};

use super::{EmployeeStore, StoreError, StoreResult};
use crate::model::{Employee, EmployeeChanges};

const SCHEMA: &str = include_str!("../../sql/schema.sql");

#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        info!(max_connections, "Connected to the database");
        Ok(Self { pool })
    }

    /// Creates the `employees` table when it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        debug!("employees table ready");
        Ok(())
    }

    async fn exists(&self, employee_id: &str) -> StoreResult<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM employees WHERE employee_id = ?",
        )
        .bind(employee_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }
}

/// Maps a duplicate-key violation to [`StoreError::Duplicate`].
fn map_write_error(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return StoreError::Duplicate;
        }
    }
    StoreError::Database(e)
}

#[async_trait]
impl EmployeeStore for MySqlStore {
    async fn insert(&self, employee: &Employee) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO employees
            (name, employee_id, email, phone, department, date_of_joining, role)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.employee_id)
        .bind(&employee.email)
        .bind(&employee.phone)
        .bind(employee.department.to_string())
        .bind(employee.date_of_joining)
        .bind(&employee.role)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT name, employee_id, email, phone, department, date_of_joining, role
            FROM employees
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(employees)
    }

    async fn update(&self, employee_id: &str, changes: &EmployeeChanges) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET name = ?, email = ?, phone = ?, department = ?, date_of_joining = ?, role = ?
            WHERE employee_id = ?
            "#,
        )
        .bind(&changes.name)
        .bind(&changes.email)
        .bind(&changes.phone)
        .bind(changes.department.to_string())
        .bind(changes.date_of_joining)
        .bind(&changes.role)
        .bind(employee_id)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        // MySQL counts changed rows, so an update that rewrites identical
        // values also reports zero.
        if result.rows_affected() == 0 && !self.exists(employee_id).await? {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, employee_id: &str) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM employees WHERE employee_id = ?")
            .bind(employee_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("Database connection closed");
    }
}
