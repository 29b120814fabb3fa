//! Core record definitions for the land registry.
//!
//! - Identifier newtypes (`LandId`, `TransactionId`)
//! - The `Land` record and its caller-supplied payload
//! - The `Transaction` audit record

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Identifier Types
// ============================================================================

/// Generates a newtype wrapper around `String` for type-safe identifiers.
///
/// Each generated type provides:
/// - Standard derives: Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord
/// - Serde with `#[serde(transparent)]` for wire format compatibility
/// - `From<String>`/`From<&str>` and `Into<String>` conversions
/// - `Display` rendering the raw string, so the identifier doubles as the
///   storage key
/// - `new()` constructor and `as_str()` accessor
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from a raw string value.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the identifier is the empty string.
            #[inline]
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Ok(Self(s.to_owned()))
            }
        }
    };
}

define_id!(
    /// Unique identifier for a registered land parcel.
    ///
    /// Assigned once at creation and never reused or reassigned. The raw
    /// string value is the primary key in the lands table.
    LandId
);

define_id!(
    /// Unique identifier for an ownership-transfer record.
    ///
    /// Assigned once when the transfer is committed; the raw string value is
    /// the primary key in the transactions table.
    TransactionId
);

// ============================================================================
// Records
// ============================================================================

/// A registry entry representing one parcel and its current owner.
///
/// `land_id` and `created_at` are immutable after creation. `owner` always
/// reflects the most recent committed transfer or creation value, and
/// `updated_at` is stamped on every mutation after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Land {
    /// Primary key, assigned at creation.
    pub land_id: LandId,
    /// Human-readable location of the parcel.
    pub location: String,
    /// Current holder.
    pub owner: String,
    /// External cadastral reference.
    pub unique_identifier: String,
    /// Creation timestamp, immutable.
    pub created_at: DateTime<Utc>,
    /// Set on every mutation after creation; `None` for a freshly added land.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Caller-supplied fields for adding or replacing a land record.
///
/// All three fields are required to be non-empty; validation happens in the
/// registry before any mutation is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
#[builder(on(String, into))]
pub struct LandPayload {
    /// Human-readable location of the parcel.
    pub location: String,
    /// Holder to record.
    pub owner: String,
    /// External cadastral reference.
    pub unique_identifier: String,
}

/// An immutable audit record of one ownership transfer.
///
/// Created once as a side effect of a transfer and never mutated or deleted.
/// `land_id` is a weak reference by value: the record survives deletion of
/// the land it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Primary key, assigned when the transfer commits.
    pub transaction_id: TransactionId,
    /// The transferred land, referenced by identifier value.
    pub land_id: LandId,
    /// Holder before the transfer.
    pub from_owner: String,
    /// Holder after the transfer.
    pub to_owner: String,
    /// Timestamp of the transfer.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn sample_land() -> Land {
        Land {
            land_id: LandId::new("6f1c2a9e-0000-4000-8000-000000000001"),
            location: "Plot 7".to_string(),
            owner: "Alice".to_string(),
            unique_identifier: "CAD-001".to_string(),
            created_at: "2026-01-01T00:00:00Z".parse().unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_land_id_display_is_raw_value() {
        let id = LandId::new("abc-123");
        assert_eq!(id.to_string(), "abc-123");
        assert_eq!(id.as_str(), "abc-123");
    }

    #[test]
    fn test_land_id_serde_transparent() {
        let id = LandId::new("abc-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc-123\"");
        let back: LandId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_land_id_is_empty() {
        assert!(LandId::new("").is_empty());
        assert!(!LandId::new("x").is_empty());
    }

    #[test]
    fn test_land_serde_round_trip() {
        let land = sample_land();
        let json = serde_json::to_string(&land).unwrap();
        let back: Land = serde_json::from_str(&json).unwrap();
        assert_eq!(back, land);
    }

    #[test]
    fn test_land_updated_at_serializes_as_null_when_unset() {
        let land = sample_land();
        let value: serde_json::Value = serde_json::to_value(&land).unwrap();
        assert!(value["updated_at"].is_null());
    }

    #[test]
    fn test_payload_builder() {
        let payload = LandPayload::builder()
            .location("Plot 7")
            .owner("Alice")
            .unique_identifier("CAD-001")
            .build();
        assert_eq!(payload.location, "Plot 7");
        assert_eq!(payload.owner, "Alice");
        assert_eq!(payload.unique_identifier, "CAD-001");
    }

    #[test]
    fn test_transaction_serde_round_trip() {
        let record = Transaction {
            transaction_id: TransactionId::new("t-1"),
            land_id: LandId::new("l-1"),
            from_owner: "Alice".to_string(),
            to_owner: "Bob".to_string(),
            created_at: "2026-01-02T00:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
