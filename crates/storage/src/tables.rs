//! Table definitions for redb storage.
//!
//! Both collections are keyed by the identifier string and store
//! postcard-serialized records. The two tables are independent: all
//! cross-references are by identifier value, never joined at this layer.

use redb::TableDefinition;

/// Table definitions for registry storage.
pub struct Tables;

impl Tables {
    /// Land records: land_id → serialized Land
    pub const LANDS: TableDefinition<'static, &'static str, &'static [u8]> =
        TableDefinition::new("lands");

    /// Ownership transfers: transaction_id → serialized Transaction.
    /// Append-only; entries survive deletion of the land they reference.
    pub const TRANSACTIONS: TableDefinition<'static, &'static str, &'static [u8]> =
        TableDefinition::new("transactions");
}

#[cfg(test)]
mod tests {
    use super::*;
    use redb::TableHandle;

    #[test]
    fn test_table_names_unique() {
        assert_ne!(Tables::LANDS.name(), Tables::TRANSACTIONS.name());
    }
}
