//! Globally unique identifier generation for lands and transfer records.
//!
//! Generates hyphenated UUID version-4 strings: 122 random bits drawn from
//! the operating system's cryptographic RNG (via `getrandom`). Collision
//! probability is effectively zero across the lifetime of a store, and the
//! values carry no ordering or timing information.
//!
//! # Security Considerations
//!
//! The generator is intentionally not seedable. Identifiers double as primary
//! keys handed to external callers, so a predictable byte source would make
//! them guessable; there is no deterministic fallback path.

use uuid::Uuid;

use crate::types::{LandId, TransactionId};

/// Generates a new unique identifier string.
///
/// # Example
///
/// ```
/// let id1 = land_registry_types::idgen::generate();
/// let id2 = land_registry_types::idgen::generate();
/// assert_ne!(id1, id2);
/// assert_eq!(id1.len(), 36);
/// ```
#[must_use]
pub fn generate() -> String {
    Uuid::new_v4().to_string()
}

/// Generates a new [`LandId`].
///
/// Convenience wrapper around [`generate()`] that returns the identifier
/// wrapped in the `LandId` newtype.
#[must_use]
pub fn generate_land_id() -> LandId {
    LandId::new(generate())
}

/// Generates a new [`TransactionId`].
///
/// Convenience wrapper around [`generate()`] that returns the identifier
/// wrapped in the `TransactionId` newtype.
#[must_use]
pub fn generate_transaction_id() -> TransactionId {
    TransactionId::new(generate())
}
