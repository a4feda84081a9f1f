//! Typed persistence for the three stored records.
//!
//! # Responsibility
//! - Encode/decode `TodoCollection`, `CustomOverlay` and `Preferences` as
//!   JSON under their storage keys.
//! - Report malformed stored data as `RepoError::Shape`.
//!
//! # Invariants
//! - Absent values are `Ok(None)`, never an error; substituting defaults is
//!   the service layer's call.
//! - Every item is validated before it is written.

use crate::model::collection::{CustomOverlay, Preferences, TodoCollection};
use crate::repo::kv_store::{KeyValueStore, StorageKey};
use crate::repo::{RepoError, RepoResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Load/save gateway over an injected key-value store.
pub struct TodoRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> TodoRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load_collection(&self) -> RepoResult<Option<TodoCollection>> {
        self.read(StorageKey::List)
    }

    pub fn save_collection(&self, collection: &TodoCollection) -> RepoResult<()> {
        for item in collection.dailies.iter().chain(&collection.weeklies) {
            item.validate()?;
        }
        self.write(StorageKey::List, collection)
    }

    pub fn load_overlay(&self) -> RepoResult<Option<CustomOverlay>> {
        self.read(StorageKey::Custom)
    }

    pub fn save_overlay(&self, overlay: &CustomOverlay) -> RepoResult<()> {
        for item in overlay.dailies.iter().chain(&overlay.weeklies) {
            item.validate()?;
        }
        self.write(StorageKey::Custom, overlay)
    }

    pub fn load_preferences(&self) -> RepoResult<Option<Preferences>> {
        self.read(StorageKey::Prefs)
    }

    pub fn save_preferences(&self, preferences: &Preferences) -> RepoResult<()> {
        self.write(StorageKey::Prefs, preferences)
    }

    /// Removes all stored values. Backs the "reset to defaults" action.
    pub fn clear_all(&self) -> RepoResult<()> {
        self.store.clear()
    }

    fn read<T: DeserializeOwned>(&self, key: StorageKey) -> RepoResult<Option<T>> {
        match self.store.get(key)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|err| RepoError::Shape {
                    key,
                    reason: err.to_string(),
                }),
        }
    }

    fn write<T: Serialize>(&self, key: StorageKey, value: &T) -> RepoResult<()> {
        let raw = serde_json::to_string(value).map_err(|err| RepoError::Shape {
            key,
            reason: err.to_string(),
        })?;
        self.store.put(key, &raw)
    }
}
