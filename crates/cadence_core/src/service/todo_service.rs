//! Checklist state provider.
//!
//! # Responsibility
//! - Load persisted state, reconcile it against the user overlay, and write
//!   the result back after every mutation.
//! - Expose the user operations: complete, hide, reset, custom-item
//!   management, and list upgrade.
//!
//! # Invariants
//! - The merge core only ever receives well-typed values; absent or
//!   shape-invalid stored data is replaced with defaults here.
//! - Every mutation persists through the repository before returning, and
//!   returns the updated collection as a value.

use crate::merge::{merge_collection, sort_items};
use crate::model::collection::{CustomOverlay, Preferences, TodoCollection};
use crate::model::defaults::{default_collection, LIST_VERSION};
use crate::model::item::{Category, Item};
use crate::repo::kv_store::KeyValueStore;
use crate::repo::todo_repo::TodoRepository;
use crate::repo::RepoError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by state-provider operations.
#[derive(Debug)]
pub enum ServiceError {
    Repo(RepoError),
    ItemNotFound { category: Category, name: String },
    CustomItemNotFound { category: Category, id: String },
    DuplicateItem { category: Category, name: String },
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::ItemNotFound { category, name } => {
                write!(f, "no item named `{name}` in {category}")
            }
            Self::CustomItemNotFound { category, id } => {
                write!(f, "no custom item with id `{id}` in {category}")
            }
            Self::DuplicateItem { category, name } => {
                write!(f, "an item named `{name}` already exists in {category}")
            }
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Completion counts over the visible portion of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListProgress {
    pub completed: usize,
    pub total: usize,
}

impl ListProgress {
    /// Completion ratio in percent, or `None` when every item is hidden.
    pub fn percent(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.completed as f64 / self.total as f64 * 100.0)
    }
}

/// Counts completed/total over items that are not hidden.
pub fn list_progress(items: &[Item]) -> ListProgress {
    let visible = items.iter().filter(|item| item.is_visible());
    let mut completed = 0;
    let mut total = 0;
    for item in visible {
        total += 1;
        if item.is_completed {
            completed += 1;
        }
    }
    ListProgress { completed, total }
}

/// Returns whether a reset would change anything for this list.
pub fn can_reset(items: &[Item]) -> bool {
    items.iter().any(|item| item.is_completed)
}

/// State provider over an injected key-value store.
pub struct TodoService<S: KeyValueStore> {
    repo: TodoRepository<S>,
}

impl<S: KeyValueStore> TodoService<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: TodoRepository::new(store),
        }
    }

    /// Loads the stored state, reconciles it against the overlay, persists
    /// the result and returns it.
    ///
    /// First load with empty storage yields the built-in definition, run
    /// through the sort policy like everything else.
    pub fn load_state(&self) -> ServiceResult<TodoCollection> {
        let base = self.stored_collection_or_default()?;
        let overlay = self.stored_overlay()?;
        let merged = merge_collection(base, overlay.as_ref());
        self.repo.save_collection(&merged)?;
        Ok(merged)
    }

    /// Returns the stored overlay, or an empty one when absent.
    pub fn custom_overlay(&self) -> ServiceResult<CustomOverlay> {
        Ok(self.stored_overlay()?.unwrap_or_default())
    }

    /// Returns stored preferences, or defaults when absent.
    pub fn preferences(&self) -> ServiceResult<Preferences> {
        match self.repo.load_preferences() {
            Ok(Some(preferences)) => Ok(preferences),
            Ok(None) => Ok(Preferences::default()),
            Err(RepoError::Shape { key, reason }) => {
                warn!("event=prefs_load module=service status=recovered key={key} reason={reason}");
                Ok(Preferences::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Records the application version the user has acknowledged.
    pub fn record_seen_version(&self, version: &str) -> ServiceResult<Preferences> {
        let preferences = Preferences {
            last_version: version.to_string(),
        };
        self.repo.save_preferences(&preferences)?;
        Ok(preferences)
    }

    /// Toggles completion for the named item and returns the updated state.
    pub fn toggle_completed(&self, category: Category, name: &str) -> ServiceResult<TodoCollection> {
        self.mutate_item(category, name, |item| {
            item.is_completed = !item.is_completed;
        })
    }

    /// Toggles visibility for the named item. Hiding an item also clears its
    /// completion so it no longer counts toward progress.
    pub fn toggle_hidden(&self, category: Category, name: &str) -> ServiceResult<TodoCollection> {
        self.mutate_item(category, name, |item| {
            item.hidden = !item.hidden;
            item.is_completed = false;
        })
    }

    /// Marks every item in the category incomplete.
    pub fn reset_progress(&self, category: Category) -> ServiceResult<TodoCollection> {
        let mut collection = self.load_state()?;
        {
            let list = collection.list_mut(category);
            for item in list.iter_mut() {
                item.is_completed = false;
            }
            sort_items(list);
        }
        self.repo.save_collection(&collection)?;
        Ok(collection)
    }

    /// Clears all persisted state and returns a fresh default collection.
    pub fn reset_to_defaults(&self) -> ServiceResult<TodoCollection> {
        info!("event=reset_defaults module=service status=start");
        self.repo.clear_all()?;
        let state = self.load_state()?;
        info!("event=reset_defaults module=service status=ok");
        Ok(state)
    }

    /// Adds a user item to the overlay and reconciles it into the state.
    ///
    /// Names must be unique within a category; lookups match on them.
    pub fn add_custom_item(&self, category: Category, name: &str) -> ServiceResult<TodoCollection> {
        let item = Item::custom(name.trim());
        item.validate().map_err(RepoError::from)?;

        let collection = self.load_state()?;
        if collection
            .list(category)
            .iter()
            .any(|existing| existing.name == item.name)
        {
            return Err(ServiceError::DuplicateItem {
                category,
                name: item.name,
            });
        }

        let mut overlay = self.custom_overlay()?;
        overlay.list_mut(category).push(item);
        self.repo.save_overlay(&overlay)?;

        let merged = merge_collection(collection, Some(&overlay));
        self.repo.save_collection(&merged)?;
        Ok(merged)
    }

    /// Removes a user item from the overlay; the next reconciliation prunes
    /// it from the state, which this method performs and persists.
    pub fn remove_custom_item(&self, category: Category, id: &str) -> ServiceResult<TodoCollection> {
        let mut overlay = self.custom_overlay()?;
        let list = overlay.list_mut(category);
        let before = list.len();
        list.retain(|item| item.id != id);
        if list.len() == before {
            return Err(ServiceError::CustomItemNotFound {
                category,
                id: id.to_string(),
            });
        }
        self.repo.save_overlay(&overlay)?;

        let base = self.stored_collection_or_default()?;
        let merged = merge_collection(base, Some(&overlay));
        self.repo.save_collection(&merged)?;
        Ok(merged)
    }

    /// Rebuilds the state from the current built-in definition, keeping the
    /// overlay and carrying completion over by item name.
    pub fn upgrade(&self) -> ServiceResult<TodoCollection> {
        info!("event=list_upgrade module=service status=start");
        let current = self.stored_collection_or_default()?;
        let overlay = self.stored_overlay()?;

        let mut next = merge_collection(default_collection(), overlay.as_ref());
        for category in Category::ALL {
            let previous = current.list(category);
            let list = next.list_mut(category);
            for item in list.iter_mut() {
                if let Some(known) = previous.iter().find(|prev| prev.name == item.name) {
                    item.is_completed = known.is_completed;
                }
            }
            sort_items(list);
        }

        self.repo.save_collection(&next)?;
        info!(
            "event=list_upgrade module=service status=ok version={}",
            next.version
        );
        Ok(next)
    }

    /// Returns whether the built-in definition is newer than the stored one.
    pub fn upgrade_available(&self, collection: &TodoCollection) -> bool {
        collection.version != LIST_VERSION
    }

    fn stored_collection_or_default(&self) -> ServiceResult<TodoCollection> {
        match self.repo.load_collection() {
            Ok(Some(collection)) => Ok(collection),
            Ok(None) => Ok(default_collection()),
            Err(RepoError::Shape { key, reason }) => {
                warn!("event=state_load module=service status=recovered key={key} reason={reason}");
                Ok(default_collection())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn stored_overlay(&self) -> ServiceResult<Option<CustomOverlay>> {
        match self.repo.load_overlay() {
            Ok(overlay) => Ok(overlay),
            Err(RepoError::Shape { key, reason }) => {
                warn!("event=overlay_load module=service status=recovered key={key} reason={reason}");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn mutate_item(
        &self,
        category: Category,
        name: &str,
        apply: impl FnOnce(&mut Item),
    ) -> ServiceResult<TodoCollection> {
        let mut collection = self.load_state()?;
        {
            let list = collection.list_mut(category);
            let item = list
                .iter_mut()
                .find(|item| item.name == name)
                .ok_or_else(|| ServiceError::ItemNotFound {
                    category,
                    name: name.to_string(),
                })?;
            apply(item);
            sort_items(list);
        }
        self.repo.save_collection(&collection)?;
        Ok(collection)
    }
}
