use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{EmployeeStore, StoreError, StoreResult};
use crate::model::{Employee, EmployeeChanges};

/// Process-local store keeping records in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: Mutex<Vec<Employee>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Employee>) -> Self {
        Self { rows: Mutex::new(rows) }
    }

    fn rows(&self) -> MutexGuard<'_, Vec<Employee>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl EmployeeStore for InMemoryStore {
    async fn insert(&self, employee: &Employee) -> StoreResult<()> {
        let mut rows = self.rows();
        let taken = rows
            .iter()
            .any(|e| e.employee_id == employee.employee_id || e.email == employee.email);
        if taken {
            return Err(StoreError::Duplicate);
        }
        rows.push(employee.clone());
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<Employee>> {
        Ok(self.rows().clone())
    }

    async fn update(&self, employee_id: &str, changes: &EmployeeChanges) -> StoreResult<()> {
        let mut rows = self.rows();
        let email_taken = rows
            .iter()
            .any(|e| e.employee_id != employee_id && e.email == changes.email);

        let Some(row) = rows.iter_mut().find(|e| e.employee_id == employee_id) else {
            return Err(StoreError::NotFound);
        };
        if email_taken {
            return Err(StoreError::Duplicate);
        }
        row.apply(changes.clone());
        Ok(())
    }

    async fn delete(&self, employee_id: &str) -> StoreResult<()> {
        let mut rows = self.rows();
        let before = rows.len();
        rows.retain(|e| e.employee_id != employee_id);
        if rows.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
