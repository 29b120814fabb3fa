//! Shared test utilities for land-registry crates.
//!
//! This crate provides common test helpers to reduce boilerplate across test
//! modules:
//!
//! - [`TestDir`] - Managed temporary directory with path helpers
//! - [`sample_payload`] - Valid land payload fixture

#![deny(unsafe_code)]

mod fixtures;
pub use fixtures::{sample_payload, sample_payload_for};

mod test_dir;
pub use test_dir::TestDir;
