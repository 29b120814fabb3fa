//! Error types for the land registry using snafu.
//!
//! Defines the error taxonomy reported to the entry-point adapter:
//! - Invalid payload (caller-supplied required fields empty or over limit)
//! - Not found (referenced identifier absent)
//! - Storage (the persistence primitive could not complete an operation)
//!
//! Each variant maps to an [`ErrorCode`] with a unique numeric identifier and
//! a retryability classification. No error in this taxonomy is fatal to the
//! process: every failure is a typed result reported to the caller, and a
//! rejected call never leaves partial state.

use core::fmt;

use snafu::{Location, Snafu};

/// Unified result type for registry operations.
pub type Result<T, E = RegistryError> = std::result::Result<T, E>;

/// Machine-readable error codes for programmatic error handling.
///
/// Codes are organized into ranges:
///
/// | Range       | Domain      | Examples                              |
/// |-------------|-------------|---------------------------------------|
/// | 1000–1199   | Storage     | Database open, transaction, table ops |
/// | 3000–3299   | Application | Not-found, invalid payload            |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // --- Storage errors (1000–1199) ---
    /// Database file could not be opened.
    StorageDatabaseOpen = 1000,
    /// Transaction begin or commit failed.
    StorageTransaction = 1001,
    /// Table operation failed.
    StorageTableOperation = 1002,
    /// Record encoding or decoding failed.
    StorageSerialization = 1100,

    // --- Application errors (3000–3299) ---
    /// Wrapper for a storage-layer error at the application level.
    AppStorage = 3000,
    /// Referenced identifier does not exist.
    AppNotFound = 3100,
    /// Caller-supplied payload failed required-field validation.
    AppInvalidPayload = 3200,
}

impl ErrorCode {
    /// Returns the numeric code value.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Converts a numeric code to an `ErrorCode`, returning `None` for
    /// unknown values.
    #[must_use]
    pub const fn from_u16(code: u16) -> Option<Self> {
        match code {
            1000 => Some(Self::StorageDatabaseOpen),
            1001 => Some(Self::StorageTransaction),
            1002 => Some(Self::StorageTableOperation),
            1100 => Some(Self::StorageSerialization),
            3000 => Some(Self::AppStorage),
            3100 => Some(Self::AppNotFound),
            3200 => Some(Self::AppInvalidPayload),
            _ => None,
        }
    }

    /// Whether this error is retryable.
    ///
    /// Retryable errors may succeed on a subsequent attempt. Non-retryable
    /// errors require corrective action from the caller before retrying.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::StorageTransaction | Self::AppStorage)
    }

    /// Suggested recovery action for this error code.
    #[must_use]
    pub const fn suggested_action(self) -> &'static str {
        match self {
            Self::StorageDatabaseOpen => {
                "Verify the database path exists with correct permissions."
            },
            Self::StorageTransaction => {
                "Retry the operation. Only one write transaction can be active at a time."
            },
            Self::StorageTableOperation => {
                "Check disk space and filesystem health, then retry after investigation."
            },
            Self::StorageSerialization => {
                "Codec bug or data corruption. Report as an issue with the record context."
            },
            Self::AppStorage => {
                "Check disk space, filesystem permissions, and I/O health. May be retryable."
            },
            Self::AppNotFound => "Verify the identifier with a list operation.",
            Self::AppInvalidPayload => "Fix the payload fields and resubmit.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// Top-level error type for registry operations.
///
/// | Variant          | Retryable | Recovery Action                            |
/// | ---------------- | --------- | ------------------------------------------ |
/// | `InvalidPayload` | No        | Fix the payload fields and resubmit        |
/// | `NotFound`       | No        | Verify the identifier; list to discover    |
/// | `Storage`        | Maybe     | Check disk and I/O health; retry if so     |
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RegistryError {
    /// Caller-supplied input failed required-field validation.
    ///
    /// Reported before any mutation is attempted; no state change occurs.
    #[snafu(display("Invalid payload: {field} {constraint}"))]
    InvalidPayload {
        /// The field that failed validation.
        field: String,
        /// Description of the violated constraint.
        constraint: String,
    },

    /// Referenced identifier does not exist in the registry.
    ///
    /// An empty or malformed identifier is reported identically as a lookup
    /// failure, never as a crash.
    #[snafu(display("Land with id={id} not found"))]
    NotFound {
        /// The identifier that failed the lookup.
        id: String,
    },

    /// The persistence primitive could not complete a read or write.
    ///
    /// Recoverable at the caller's discretion; the location points at the
    /// operation that observed the failure.
    #[snafu(display("Storage error at {location}: {message}"))]
    Storage {
        /// Error description.
        message: String,
        /// Source location.
        #[snafu(implicit)]
        location: Location,
    },
}

impl RegistryError {
    /// Returns the machine-readable error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidPayload { .. } => ErrorCode::AppInvalidPayload,
            Self::NotFound { .. } => ErrorCode::AppNotFound,
            Self::Storage { .. } => ErrorCode::AppStorage,
        }
    }

    /// Whether this error is retryable.
    ///
    /// Delegates to [`ErrorCode::is_retryable`].
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.code().is_retryable()
    }

    /// Suggested recovery action for this error.
    ///
    /// Delegates to [`ErrorCode::suggested_action`].
    #[must_use]
    pub const fn suggested_action(&self) -> &'static str {
        self.code().suggested_action()
    }
}

impl From<crate::validation::ValidationError> for RegistryError {
    fn from(err: crate::validation::ValidationError) -> Self {
        RegistryError::InvalidPayload { field: err.field, constraint: err.constraint }
    }
}
