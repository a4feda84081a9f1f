//! Key-value storage seam and its SQLite implementation.
//!
//! # Responsibility
//! - Abstract the browser-style storage the state provider is injected with.
//! - Keep SQL details behind the `KeyValueStore` contract.
//!
//! # Invariants
//! - `SqliteKeyValueStore::try_new` rejects connections whose schema was not
//!   prepared by `db::open_db`.

use crate::db::migrations::latest_version;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::fmt::{Display, Formatter};

const KV_TABLE: &str = "kv_entries";
const KV_COLUMNS: [&str; 3] = ["key", "value", "updated_at"];

/// Logical names for the independently stored values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    /// The current checklist state (`TodoCollection`).
    List,
    /// The user overlay (`CustomOverlay`).
    Custom,
    /// User preferences (`Preferences`).
    Prefs,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Custom => "custom",
            Self::Prefs => "prefs",
        }
    }
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage contract the state provider is built against.
///
/// Values are opaque strings; the typed repository owns their encoding.
pub trait KeyValueStore {
    fn get(&self, key: StorageKey) -> RepoResult<Option<String>>;
    fn put(&self, key: StorageKey, value: &str) -> RepoResult<()>;
    fn remove(&self, key: StorageKey) -> RepoResult<()>;
    fn clear(&self) -> RepoResult<()>;
}

/// SQLite-backed key-value store.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Wraps a connection after checking it carries the expected schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not match
    ///   the latest migration.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the key-value
    ///   schema is absent or partial.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
            );",
            [KV_TABLE],
            |row| row.get(0),
        )?;
        if table_exists == 0 {
            return Err(RepoError::MissingRequiredTable(KV_TABLE));
        }

        for column in KV_COLUMNS {
            let column_exists: i64 = conn.query_row(
                "SELECT EXISTS(
                    SELECT 1 FROM pragma_table_info(?1) WHERE name = ?2
                );",
                params![KV_TABLE, column],
                |row| row.get(0),
            )?;
            if column_exists == 0 {
                return Err(RepoError::MissingRequiredColumn {
                    table: KV_TABLE,
                    column,
                });
            }
        }

        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get(&self, key: StorageKey) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&self, key: StorageKey, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key.as_str(), value],
        )?;
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key.as_str()])?;
        Ok(())
    }

    fn clear(&self) -> RepoResult<()> {
        self.conn.execute("DELETE FROM kv_entries;", [])?;
        Ok(())
    }
}
