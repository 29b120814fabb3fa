//! redb storage engine wrapper.
//!
//! Provides a thin wrapper around [`redb::Database`] with:
//! - Database lifecycle management (file-backed and in-memory)
//! - Eager table creation, so read transactions on a fresh database never
//!   fail with a missing-table error

use std::path::Path;
use std::sync::Arc;

use redb::Database;
use redb::backends::InMemoryBackend;
use snafu::ResultExt;

use crate::error::{CommitSnafu, Result, StoreError, TableSnafu, TransactionSnafu};
use crate::tables::Tables;

/// Storage engine backed by redb.
///
/// Wraps a [`redb::Database`] behind an `Arc` so the registry and the
/// transfer log can share one handle; cloning is cheap.
pub struct StorageEngine {
    db: Arc<Database>,
}

#[allow(clippy::result_large_err)]
impl StorageEngine {
    /// Open or create a database at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Open`] if the file cannot be created or opened,
    /// or a transaction error if the initial table creation fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let db = if path.exists() {
            Database::open(path)
        } else {
            Database::create(path)
        }
        .map_err(|e| StoreError::Open {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let engine = Self { db: Arc::new(db) };
        engine.ensure_tables()?;
        Ok(engine)
    }

    /// Create a new in-memory database for tests and ephemeral runs.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Open`] if the backend cannot be initialized.
    pub fn open_in_memory() -> Result<Self> {
        let db = Database::builder()
            .create_with_backend(InMemoryBackend::new())
            .map_err(|e| StoreError::Open {
                path: ":memory:".to_string(),
                message: e.to_string(),
            })?;

        let engine = Self { db: Arc::new(db) };
        engine.ensure_tables()?;
        Ok(engine)
    }

    /// Create both tables so later read transactions always find them.
    fn ensure_tables(&self) -> Result<()> {
        let txn = self.db.begin_write().context(TransactionSnafu)?;
        txn.open_table(Tables::LANDS).context(TableSnafu)?;
        txn.open_table(Tables::TRANSACTIONS).context(TableSnafu)?;
        txn.commit().context(CommitSnafu)?;
        Ok(())
    }

    /// Get a clone of the database handle.
    #[must_use]
    pub fn db(&self) -> Arc<Database> {
        Arc::clone(&self.db)
    }
}

impl Clone for StorageEngine {
    fn clone(&self) -> Self {
        Self { db: Arc::clone(&self.db) }
    }
}
