//! Storage-specific errors from the embedded database engine.
//!
//! These errors originate in this crate and are wrapped into
//! [`RegistryError::Storage`] when propagated to higher layers.

use land_registry_types::error::{ErrorCode, RegistryError};
use snafu::Snafu;

/// Result type for store operations.
pub type Result<T, E = StoreError> = std::result::Result<T, E>;

/// Error context for storage operations.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum StoreError {
    /// Database file could not be opened.
    #[snafu(display("Failed to open database at {path}: {message}"))]
    Open {
        /// Database path.
        path: String,
        /// Error description.
        message: String,
    },

    /// Low-level storage operation failed.
    #[snafu(display("Storage error: {source}"))]
    Storage {
        /// Underlying redb error.
        source: redb::StorageError,
    },

    /// Table open failed.
    #[snafu(display("Table error: {source}"))]
    Table {
        /// Underlying redb error.
        source: redb::TableError,
    },

    /// Transaction begin failed.
    #[snafu(display("Transaction error: {source}"))]
    Transaction {
        /// Underlying redb error.
        source: redb::TransactionError,
    },

    /// Transaction commit failed.
    #[snafu(display("Commit error: {source}"))]
    Commit {
        /// Underlying redb error.
        source: redb::CommitError,
    },

    /// Record encoding or decoding failed.
    #[snafu(display("Serialization error: {message}"))]
    Serialization {
        /// Error description.
        message: String,
    },
}

impl StoreError {
    /// Returns the machine-readable error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Open { .. } => ErrorCode::StorageDatabaseOpen,
            Self::Transaction { .. } | Self::Commit { .. } => ErrorCode::StorageTransaction,
            Self::Storage { .. } | Self::Table { .. } => ErrorCode::StorageTableOperation,
            Self::Serialization { .. } => ErrorCode::StorageSerialization,
        }
    }
}

impl From<StoreError> for RegistryError {
    #[track_caller]
    fn from(err: StoreError) -> Self {
        let loc = std::panic::Location::caller();
        RegistryError::Storage {
            message: err.to_string(),
            location: snafu::Location::new(loc.file(), loc.line(), loc.column()),
        }
    }
}
