//! Checklist item domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by both recurring lists.
//! - Provide constructors and validation for built-in and custom items.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `name` is unique within a category; item lookups match on it.
//! - `is_custom` marks overlay-originated items and drives reconciliation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// One of the two recurring task groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Tasks that reset every day.
    Dailies,
    /// Tasks that reset every week.
    Weeklies,
}

impl Category {
    /// Both categories, in persisted order. Used by per-category glue code.
    pub const ALL: [Category; 2] = [Category::Dailies, Category::Weeklies];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dailies => "dailies",
            Self::Weeklies => "weeklies",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single task entry.
///
/// Serialized field names keep the camelCase shape of the persisted records
/// (`isCompleted`, `isCustom`), and the three flags default to `false` so
/// older stored lists that omit them still parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Stable unique identifier within a category.
    pub id: String,
    /// Display name; secondary identity key and sort tie-breaker.
    pub name: String,
    /// Whether the item is currently checked off.
    #[serde(default)]
    pub is_completed: bool,
    /// Whether the item is suppressed from the visible list without removal.
    #[serde(default)]
    pub hidden: bool,
    /// True iff the item originated from the user overlay rather than the
    /// built-in default list.
    #[serde(default)]
    pub is_custom: bool,
}

/// Validation failures for item write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    BlankName,
    BlankId { name: String },
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "item name must not be blank"),
            Self::BlankId { name } => write!(f, "item `{name}` has a blank id"),
        }
    }
}

impl Error for ItemValidationError {}

impl Item {
    /// Creates a built-in item with a caller-chosen stable ID.
    pub fn builtin(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_completed: false,
            hidden: false,
            is_custom: false,
        }
    }

    /// Creates a user-supplied item with a freshly generated stable ID.
    ///
    /// # Invariants
    /// - `is_custom` starts as `true`; reconciliation relies on the flag to
    ///   tell overlay items apart from built-in ones.
    pub fn custom(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            is_completed: false,
            hidden: false,
            is_custom: true,
        }
    }

    /// Checks the identity fields this crate depends on.
    ///
    /// # Errors
    /// - `BlankName` when the display name is empty or whitespace.
    /// - `BlankId` when the stable identifier is empty or whitespace.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.name.trim().is_empty() {
            return Err(ItemValidationError::BlankName);
        }
        if self.id.trim().is_empty() {
            return Err(ItemValidationError::BlankId {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    /// Returns whether the item participates in visible progress.
    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}
