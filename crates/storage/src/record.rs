//! Generic typed record store over an ordered redb table.
//!
//! Operations take the table handle as an argument rather than owning it, so
//! several stores can participate in a single write transaction. Values are
//! postcard-encoded; keys are the identifier strings.
//!
//! All operations are total: a missing key is `Ok(None)`, never an error.

use std::marker::PhantomData;

use redb::{ReadableTable, ReadableTableMetadata, Table};
use serde::Serialize;
use serde::de::DeserializeOwned;
use snafu::ResultExt;

use crate::error::{Result, StoreError, StorageSnafu};

/// Typed operations over one ordered table of `V` records.
pub struct RecordStore<V> {
    _value: PhantomData<V>,
}

impl<V> RecordStore<V>
where
    V: Serialize + DeserializeOwned,
{
    /// Get a record by key.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the read fails or the stored bytes do not
    /// decode.
    pub fn get(
        table: &impl ReadableTable<&'static str, &'static [u8]>,
        key: &str,
    ) -> Result<Option<V>> {
        match table.get(key).context(StorageSnafu)? {
            Some(data) => decode(data.value()).map(Some),
            None => Ok(None),
        }
    }

    /// Insert a record, returning the previous value at that key.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the write fails or either value does not
    /// round-trip through the codec.
    pub fn insert(
        table: &mut Table<'_, &'static str, &'static [u8]>,
        key: &str,
        value: &V,
    ) -> Result<Option<V>> {
        let encoded = encode(value)?;
        match table.insert(key, &encoded[..]).context(StorageSnafu)? {
            Some(previous) => decode(previous.value()).map(Some),
            None => Ok(None),
        }
    }

    /// Remove a record, returning the prior value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the write fails or the removed bytes do
    /// not decode.
    pub fn remove(
        table: &mut Table<'_, &'static str, &'static [u8]>,
        key: &str,
    ) -> Result<Option<V>> {
        match table.remove(key).context(StorageSnafu)? {
            Some(previous) => decode(previous.value()).map(Some),
            None => Ok(None),
        }
    }

    /// List all records in ascending key order.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if iteration fails or any stored value does
    /// not decode.
    pub fn values(table: &impl ReadableTable<&'static str, &'static [u8]>) -> Result<Vec<V>> {
        let mut records = Vec::new();
        for result in table.iter().context(StorageSnafu)? {
            let (_, value) = result.context(StorageSnafu)?;
            records.push(decode(value.value())?);
        }
        Ok(records)
    }

    /// Number of records in the table.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the metadata read fails.
    pub fn len(table: &impl ReadableTable<&'static str, &'static [u8]>) -> Result<u64> {
        table.len().context(StorageSnafu)
    }
}

fn encode<V: Serialize>(value: &V) -> Result<Vec<u8>> {
    postcard::to_allocvec(value).map_err(|e| StoreError::Serialization { message: e.to_string() })
}

fn decode<V: DeserializeOwned>(bytes: &[u8]) -> Result<V> {
    postcard::from_bytes(bytes).map_err(|e| StoreError::Serialization { message: e.to_string() })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use land_registry_types::{Land, LandId};

    use super::*;
    use crate::engine::StorageEngine;
    use crate::tables::Tables;

    fn land(id: &str, owner: &str) -> Land {
        Land {
            land_id: LandId::new(id),
            location: "Plot 7".to_string(),
            owner: owner.to_string(),
            unique_identifier: "CAD-001".to_string(),
            created_at: "2026-01-01T00:00:00Z".parse().unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_record_crud() {
        let engine = StorageEngine::open_in_memory().expect("open engine");
        let db = engine.db();

        // Insert
        {
            let txn = db.begin_write().expect("begin write");
            {
                let mut table = txn.open_table(Tables::LANDS).expect("open table");
                let previous =
                    RecordStore::insert(&mut table, "l-1", &land("l-1", "Alice")).expect("insert");
                assert!(previous.is_none());
            }
            txn.commit().expect("commit");
        }

        // Read
        {
            let txn = db.begin_read().expect("begin read");
            let table = txn.open_table(Tables::LANDS).expect("open table");
            let stored: Land = RecordStore::get(&table, "l-1")
                .expect("get")
                .expect("record should exist");
            assert_eq!(stored, land("l-1", "Alice"));
        }

        // Overwrite returns previous
        {
            let txn = db.begin_write().expect("begin write");
            {
                let mut table = txn.open_table(Tables::LANDS).expect("open table");
                let previous =
                    RecordStore::insert(&mut table, "l-1", &land("l-1", "Bob")).expect("insert");
                assert_eq!(previous, Some(land("l-1", "Alice")));
            }
            txn.commit().expect("commit");
        }

        // Remove returns prior, second remove finds nothing
        {
            let txn = db.begin_write().expect("begin write");
            {
                let mut table = txn.open_table(Tables::LANDS).expect("open table");
                let removed: Option<Land> = RecordStore::remove(&mut table, "l-1").expect("remove");
                assert_eq!(removed, Some(land("l-1", "Bob")));
                let removed: Option<Land> = RecordStore::remove(&mut table, "l-1").expect("remove");
                assert!(removed.is_none());
            }
            txn.commit().expect("commit");
        }
    }

    #[test]
    fn test_get_missing_key_is_none_not_error() {
        let engine = StorageEngine::open_in_memory().expect("open engine");
        let db = engine.db();

        let txn = db.begin_read().expect("begin read");
        let table = txn.open_table(Tables::LANDS).expect("open table");
        let missing: Option<Land> = RecordStore::get(&table, "no-such-key").expect("get");
        assert!(missing.is_none());

        let empty: Option<Land> = RecordStore::get(&table, "").expect("get");
        assert!(empty.is_none());
    }

    #[test]
    fn test_values_ascending_key_order() {
        let engine = StorageEngine::open_in_memory().expect("open engine");
        let db = engine.db();

        // Insert out of key order
        {
            let txn = db.begin_write().expect("begin write");
            {
                let mut table = txn.open_table(Tables::LANDS).expect("open table");
                for id in ["b", "a", "c"] {
                    RecordStore::insert(&mut table, id, &land(id, "Alice")).expect("insert");
                }
            }
            txn.commit().expect("commit");
        }

        let txn = db.begin_read().expect("begin read");
        let table = txn.open_table(Tables::LANDS).expect("open table");
        let records: Vec<Land> = RecordStore::values(&table).expect("values");
        let ids: Vec<&str> = records.iter().map(|l| l.land_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        let count = RecordStore::<Land>::len(&table).expect("len");
        assert_eq!(count, 3);
    }
}
