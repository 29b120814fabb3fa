//! Storage and consistency layer for the land registry.
//!
//! This crate provides:
//! - redb-based persistent storage
//! - A generic typed record store over ordered string-keyed tables
//! - The land registry with its atomic transfer operation
//! - The append-only transfer log

mod clock;
mod engine;
mod error;
mod log;
mod record;
mod registry;
mod tables;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::StorageEngine;
pub use error::StoreError;
pub use log::TransactionLog;
pub use record::RecordStore;
pub use registry::LandRegistry;
pub use tables::Tables;
