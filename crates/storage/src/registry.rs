//! The land registry: CRUD over land records and the atomic transfer
//! operation.
//!
//! Every operation validates its input before touching storage, so a
//! rejected call never leaves partial state. A transfer performs its two
//! writes (land update and audit record) inside one write transaction and
//! commits once; no reader can observe one without the other, and every
//! error path drops the transaction, aborting it.

use std::sync::Arc;

use redb::Database;
use snafu::ResultExt;

use land_registry_types::config::ValidationConfig;
use land_registry_types::error::{NotFoundSnafu, Result};
use land_registry_types::{idgen, validation};
use land_registry_types::{Land, LandId, LandPayload, Transaction};

use crate::clock::Clock;
use crate::engine::StorageEngine;
use crate::error::{CommitSnafu, TableSnafu, TransactionSnafu};
use crate::log::TransactionLog;
use crate::record::RecordStore;
use crate::tables::Tables;

/// The land registry.
///
/// Owns the lands collection; state is injected at construction (engine,
/// clock, validation limits) rather than reached through globals. The
/// transfer log participates in [`LandRegistry::transfer_land`] through its
/// table handle so both collections commit together.
pub struct LandRegistry {
    db: Arc<Database>,
    clock: Arc<dyn Clock>,
    validation: ValidationConfig,
}

impl LandRegistry {
    /// Create a registry over the given engine.
    pub fn new(engine: &StorageEngine, clock: Arc<dyn Clock>, validation: ValidationConfig) -> Self {
        Self { db: engine.db(), clock, validation }
    }

    /// List all registered lands, ascending by land id.
    ///
    /// Returns the current committed state; in-flight writes are not
    /// visible.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Storage`] if the snapshot cannot be read.
    ///
    /// [`RegistryError::Storage`]: land_registry_types::RegistryError::Storage
    pub fn list_lands(&self) -> Result<Vec<Land>> {
        let txn = self.db.begin_read().context(TransactionSnafu)?;
        let table = txn.open_table(Tables::LANDS).context(TableSnafu)?;
        Ok(RecordStore::values(&table)?)
    }

    /// Look up a land by id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when the id is absent; an empty
    /// id is reported identically as a lookup failure.
    ///
    /// [`RegistryError::NotFound`]: land_registry_types::RegistryError::NotFound
    pub fn get_land(&self, id: &LandId) -> Result<Land> {
        if id.is_empty() {
            return NotFoundSnafu { id: id.as_str() }.fail();
        }
        let txn = self.db.begin_read().context(TransactionSnafu)?;
        let table = txn.open_table(Tables::LANDS).context(TableSnafu)?;
        RecordStore::get(&table, id.as_str())?
            .ok_or_else(|| NotFoundSnafu { id: id.as_str() }.build())
    }

    /// Register a new land parcel.
    ///
    /// Generates a fresh id, stamps `created_at`, and leaves `updated_at`
    /// unset. Returns the stored record so the caller learns the assigned
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidPayload`] if any required field is
    /// empty or over the configured limit; no entry is created.
    ///
    /// [`RegistryError::InvalidPayload`]: land_registry_types::RegistryError::InvalidPayload
    pub fn add_land(&self, payload: &LandPayload) -> Result<Land> {
        validation::validate_payload(payload, &self.validation)?;

        let land = Land {
            land_id: idgen::generate_land_id(),
            location: payload.location.clone(),
            owner: payload.owner.clone(),
            unique_identifier: payload.unique_identifier.clone(),
            created_at: self.clock.now(),
            updated_at: None,
        };

        let txn = self.db.begin_write().context(TransactionSnafu)?;
        {
            let mut table = txn.open_table(Tables::LANDS).context(TableSnafu)?;
            RecordStore::insert(&mut table, land.land_id.as_str(), &land)?;
        }
        txn.commit().context(CommitSnafu)?;

        tracing::info!(land_id = %land.land_id, owner = %land.owner, "registered land");
        Ok(land)
    }

    /// Replace a land's caller-supplied fields wholesale.
    ///
    /// Preserves `land_id` and `created_at`, stamps `updated_at`. Partial
    /// updates are not supported.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidPayload`] if the id or any payload
    /// field is empty, [`RegistryError::NotFound`] if the id does not exist.
    ///
    /// [`RegistryError::InvalidPayload`]: land_registry_types::RegistryError::InvalidPayload
    /// [`RegistryError::NotFound`]: land_registry_types::RegistryError::NotFound
    pub fn update_land(&self, id: &LandId, payload: &LandPayload) -> Result<Land> {
        validation::validate_id(id, &self.validation)?;
        validation::validate_payload(payload, &self.validation)?;

        let txn = self.db.begin_write().context(TransactionSnafu)?;
        let updated = {
            let mut table = txn.open_table(Tables::LANDS).context(TableSnafu)?;
            let Some(existing) = RecordStore::<Land>::get(&table, id.as_str())? else {
                return NotFoundSnafu { id: id.as_str() }.fail();
            };

            let updated = Land {
                location: payload.location.clone(),
                owner: payload.owner.clone(),
                unique_identifier: payload.unique_identifier.clone(),
                updated_at: Some(self.clock.now()),
                ..existing
            };
            RecordStore::insert(&mut table, id.as_str(), &updated)?;
            updated
        };
        txn.commit().context(CommitSnafu)?;

        tracing::info!(land_id = %id, "updated land");
        Ok(updated)
    }

    /// Remove a land, returning the prior record.
    ///
    /// Does not cascade to the transfer log: audit records referencing the
    /// land remain.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the id is absent.
    ///
    /// [`RegistryError::NotFound`]: land_registry_types::RegistryError::NotFound
    pub fn delete_land(&self, id: &LandId) -> Result<Land> {
        let txn = self.db.begin_write().context(TransactionSnafu)?;
        let removed = {
            let mut table = txn.open_table(Tables::LANDS).context(TableSnafu)?;
            let Some(land) = RecordStore::<Land>::remove(&mut table, id.as_str())? else {
                return NotFoundSnafu { id: id.as_str() }.fail();
            };
            land
        };
        txn.commit().context(CommitSnafu)?;

        tracing::info!(land_id = %id, "deleted land");
        Ok(removed)
    }

    /// Transfer a land to a new owner.
    ///
    /// As a single logical unit: records a new [`Transaction`] with the
    /// land's current owner as `from_owner`, updates the land's `owner` and
    /// `updated_at`, and commits both writes together. No other state of the
    /// land changes.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidPayload`] if `to_owner` is empty,
    /// [`RegistryError::NotFound`] if the id is absent. On any failure
    /// neither collection is modified.
    ///
    /// [`RegistryError::InvalidPayload`]: land_registry_types::RegistryError::InvalidPayload
    /// [`RegistryError::NotFound`]: land_registry_types::RegistryError::NotFound
    pub fn transfer_land(&self, id: &LandId, to_owner: &str) -> Result<Land> {
        validation::validate_owner(to_owner, &self.validation)?;

        let txn = self.db.begin_write().context(TransactionSnafu)?;
        let (updated, record) = {
            let mut lands = txn.open_table(Tables::LANDS).context(TableSnafu)?;
            let mut transfers = txn.open_table(Tables::TRANSACTIONS).context(TableSnafu)?;

            let Some(land) = RecordStore::<Land>::get(&lands, id.as_str())? else {
                return NotFoundSnafu { id: id.as_str() }.fail();
            };

            let now = self.clock.now();
            let record = Transaction {
                transaction_id: idgen::generate_transaction_id(),
                land_id: land.land_id.clone(),
                from_owner: land.owner.clone(),
                to_owner: to_owner.to_owned(),
                created_at: now,
            };
            let updated = Land {
                owner: to_owner.to_owned(),
                updated_at: Some(now),
                ..land
            };

            RecordStore::insert(&mut lands, id.as_str(), &updated)?;
            TransactionLog::append(&mut transfers, &record)?;
            (updated, record)
        };
        txn.commit().context(CommitSnafu)?;

        tracing::info!(
            land_id = %id,
            transaction_id = %record.transaction_id,
            from_owner = %record.from_owner,
            to_owner = %record.to_owner,
            "transferred land"
        );
        Ok(updated)
    }
}
