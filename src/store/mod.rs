//! Persistence for employee records.
//!
//! Handlers only see [`EmployeeStore`]; the concrete store is picked at
//! startup and injected as `web::Data<dyn EmployeeStore>`.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Employee, EmployeeChanges};

pub mod memory;
pub mod mysql;

pub use memory::InMemoryStore;
pub use mysql::MySqlStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Another record already holds this `employee_id` or `email`.
    #[error("employee_id or email already exists")]
    Duplicate,

    #[error("employee not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Inserts a new record. Uniqueness of `employee_id` and `email` is
    /// enforced here, atomically with the insert.
    async fn insert(&self, employee: &Employee) -> StoreResult<()>;

    /// All records, unfiltered, in storage order.
    async fn list(&self) -> StoreResult<Vec<Employee>>;

    async fn update(&self, employee_id: &str, changes: &EmployeeChanges) -> StoreResult<()>;

    async fn delete(&self, employee_id: &str) -> StoreResult<()>;

    /// Releases the underlying connection. Called once after the server stops.
    async fn close(&self) {}
}
