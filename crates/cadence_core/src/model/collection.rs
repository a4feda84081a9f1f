//! Persisted record shapes for the checklist state.
//!
//! # Responsibility
//! - Define the three independently stored top-level records.
//! - Provide category-indexed access so callers iterate instead of naming
//!   each list twice.
//!
//! # Invariants
//! - `TodoCollection.version` tracks the built-in list definition it was
//!   derived from, not the application version.
//! - `CustomOverlay` holds only user-added items.

use crate::model::item::{Category, Item};
use serde::{Deserialize, Serialize};

/// The current checklist state: both recurring lists plus the version of the
/// built-in definition they were derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoCollection {
    pub version: String,
    pub dailies: Vec<Item>,
    pub weeklies: Vec<Item>,
}

impl TodoCollection {
    pub fn list(&self, category: Category) -> &[Item] {
        match category {
            Category::Dailies => &self.dailies,
            Category::Weeklies => &self.weeklies,
        }
    }

    pub fn list_mut(&mut self, category: Category) -> &mut Vec<Item> {
        match category {
            Category::Dailies => &mut self.dailies,
            Category::Weeklies => &mut self.weeklies,
        }
    }
}

/// User-added items layered on top of the built-in list definition.
///
/// Absent categories deserialize as empty, matching older stored overlays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomOverlay {
    #[serde(default)]
    pub dailies: Vec<Item>,
    #[serde(default)]
    pub weeklies: Vec<Item>,
}

impl CustomOverlay {
    pub fn list(&self, category: Category) -> &[Item] {
        match category {
            Category::Dailies => &self.dailies,
            Category::Weeklies => &self.weeklies,
        }
    }

    pub fn list_mut(&mut self, category: Category) -> &mut Vec<Item> {
        match category {
            Category::Dailies => &mut self.dailies,
            Category::Weeklies => &mut self.weeklies,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dailies.is_empty() && self.weeklies.is_empty()
    }
}

/// User preferences stored outside the checklist records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Last application version the user has acknowledged.
    pub last_version: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            last_version: "0.0.0".to_string(),
        }
    }
}
