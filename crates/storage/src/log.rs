//! Append-only log of ownership transfers.
//!
//! Entries are written once, inside the registry's transfer transaction, and
//! never mutated or deleted. The log survives deletion of the lands its
//! entries reference.

use std::sync::Arc;

use redb::Database;
use snafu::ResultExt;

use land_registry_types::Transaction;

use crate::engine::StorageEngine;
use crate::error::{Result, TableSnafu, TransactionSnafu};
use crate::record::RecordStore;
use crate::tables::Tables;

/// The transfer audit log.
///
/// Exposes no update or delete surface; [`TransactionLog::append`] is the
/// only write path and runs inside the caller's write transaction.
pub struct TransactionLog {
    db: Arc<Database>,
}

impl TransactionLog {
    /// Create a log over the given engine's database.
    #[must_use]
    pub fn new(engine: &StorageEngine) -> Self {
        Self { db: engine.db() }
    }

    /// List all transfer records, ascending by transaction id.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::StoreError`] if the read transaction or iteration
    /// fails.
    pub fn list_transactions(&self) -> Result<Vec<Transaction>> {
        let txn = self.db.begin_read().context(TransactionSnafu)?;
        let table = txn.open_table(Tables::TRANSACTIONS).context(TableSnafu)?;
        RecordStore::values(&table)
    }

    /// Append a transfer record within the caller's write transaction.
    ///
    /// Called by the registry's transfer operation so that the land update
    /// and its audit record commit together.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::StoreError`] if the write fails.
    pub fn append(
        table: &mut redb::Table<'_, &'static str, &'static [u8]>,
        record: &Transaction,
    ) -> Result<()> {
        let previous = RecordStore::insert(table, record.transaction_id.as_str(), record)?;
        if previous.is_some() {
            tracing::warn!(
                transaction_id = %record.transaction_id,
                "transfer record id collided with an existing entry"
            );
        }
        Ok(())
    }
}
