use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::warn;

use crate::config::{Config, StoreKind};
use crate::store::{EmployeeStore, InMemoryStore, MySqlStore};

/// Opens the configured store. The returned handle is shared by every
/// request and must be closed with [`EmployeeStore::close`] on shutdown.
pub async fn init_store(config: &Config) -> Result<Arc<dyn EmployeeStore>> {
    match config.store {
        StoreKind::MySql => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set")?;
            let store = MySqlStore::connect(url, config.db_max_connections)
                .await
                .context("Failed to connect to database")?;
            store
                .ensure_schema()
                .await
                .context("Failed to create employees table")?;
            Ok(Arc::new(store))
        }
        StoreKind::Memory => {
            warn!("Using in-memory store, records are lost on restart");
            Ok(Arc::new(InMemoryStore::new()))
        }
    }
}
