//! Builder for creating and configuring PlanStore instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::task;

use super::{Clock, PlanStore, SharedPlanStore, SystemClock};
use crate::{
    error::{Result, StoreError},
    storage::{KeyValueStore, SqliteStore, DEFAULT_SLOT},
};

/// Builder for creating and configuring PlanStore instances.
#[derive(Debug, Clone)]
pub struct PlanStoreBuilder {
    database_path: Option<PathBuf>,
    slot: String,
    clock: Arc<dyn Clock>,
}

impl PlanStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            slot: DEFAULT_SLOT.to_string(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, falls back to the XDG data directory:
    /// `$XDG_DATA_HOME/wanderlust/plans.db` or
    /// `~/.local/share/wanderlust/plans.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the storage slot the plans are kept under.
    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = slot.into();
        self
    }

    /// Sets the clock used for save timestamps and ids.
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Opens the SQLite database and loads the saved plans.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` if the slot name is empty
    /// Returns `StoreError::FileSystem` if the database path is invalid
    /// Returns `StoreError::Database` if database initialization fails
    pub fn build(self) -> Result<PlanStore> {
        self.validate()?;

        let db_path = match self.database_path.clone() {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let backend = SqliteStore::new(&db_path)?;
        self.build_with_backend(backend)
    }

    /// Loads the saved plans from an arbitrary backend.
    pub fn build_with_backend<B: KeyValueStore + 'static>(self, backend: B) -> Result<PlanStore> {
        self.validate()?;
        Ok(PlanStore::load_with_clock(
            Box::new(backend),
            self.slot,
            self.clock,
        ))
    }

    /// Builds the store on the blocking pool and wraps it for shared async
    /// use.
    pub async fn build_shared(self) -> Result<SharedPlanStore> {
        let store = task::spawn_blocking(move || self.build())
            .await
            .map_err(|e| StoreError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        Ok(SharedPlanStore::new(store))
    }

    fn validate(&self) -> Result<()> {
        if self.slot.trim().is_empty() {
            return Err(StoreError::InvalidInput {
                field: "slot".to_string(),
                reason: "Storage slot name cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// `$XDG_DATA_HOME/wanderlust/plans.db`, creating the directory.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("wanderlust")
            .place_data_file("plans.db")
            .map_err(|e| StoreError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlanStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_build_creates_missing_parent_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("nested").join("plans.db");

        let store = PlanStoreBuilder::new()
            .with_database_path(Some(&db_path))
            .build()
            .expect("Failed to build store");

        assert!(db_path.exists());
        assert!(store.is_empty());
        assert_eq!(store.slot(), DEFAULT_SLOT);
    }

    #[test]
    fn test_empty_slot_is_rejected() {
        let err = PlanStoreBuilder::new()
            .with_slot("  ")
            .build_with_backend(MemoryStore::new())
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput { ref field, .. } if field == "slot"));
    }
}
