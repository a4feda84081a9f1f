//! Repository layer: storage seam and typed state persistence.
//!
//! # Responsibility
//! - Define the injected key-value storage contract and its SQLite
//!   implementation.
//! - Serialize the persisted records and surface malformed stored data as
//!   explicit shape errors instead of silent fallbacks.
//!
//! # Invariants
//! - Overlay write paths validate every item before persistence.
//! - Parse failures never reach the merge core; they are reported as
//!   `RepoError::Shape` and recovered at the service boundary.

use crate::db::DbError;
use crate::model::item::ItemValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod kv_store;
pub mod todo_repo;

pub use kv_store::{KeyValueStore, SqliteKeyValueStore, StorageKey};
pub use todo_repo::TodoRepository;

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors surfaced by the storage seam and the typed repository.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Validation(ItemValidationError),
    /// A stored value exists but does not parse as its record type.
    Shape {
        key: StorageKey,
        reason: String,
    },
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Shape { key, reason } => {
                write!(f, "stored value `{key}` has an invalid shape: {reason}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "storage is missing required table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "storage table `{table}` is missing required column `{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<ItemValidationError> for RepoError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
