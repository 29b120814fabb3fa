//! Core types, errors, and identifier generation for the land registry.
//!
//! This crate provides the foundational types used throughout the registry:
//! - Record structures for lands and ownership transfers
//! - String-identifier newtypes (`LandId`, `TransactionId`)
//! - Identifier generation backed by the OS cryptographic RNG
//! - Payload validation
//! - Error types using snafu

pub mod config;
pub mod error;
pub mod idgen;
pub mod types;
pub mod validation;

// Re-export commonly used types at crate root
pub use error::{ErrorCode, RegistryError, Result};
pub use types::*;
