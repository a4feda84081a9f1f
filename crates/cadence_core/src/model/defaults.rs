//! Built-in checklist definition.
//!
//! # Responsibility
//! - Define the default dailies/weeklies shipped with the application.
//! - Version the definition so stored state can detect upgrades.
//!
//! # Invariants
//! - `LIST_VERSION` changes whenever the item set below changes.
//! - `default_collection()` returns lists already in sort-policy order.

use crate::merge::sort_items;
use crate::model::collection::TodoCollection;
use crate::model::item::Item;

/// Version of the built-in list definition. Bumped on every edit to the
/// default item set; stored collections carrying an older value are offered
/// an upgrade.
pub const LIST_VERSION: &str = "1.2.0";

/// Returns a fresh copy of the built-in list definition, sorted.
pub fn default_collection() -> TodoCollection {
    let mut dailies = vec![
        Item::builtin("daily-inbox", "Clear inbox"),
        Item::builtin("daily-plan", "Plan top three tasks"),
        Item::builtin("daily-standup", "Post standup notes"),
        Item::builtin("daily-journal", "Write journal entry"),
        Item::builtin("daily-stretch", "Stretch break"),
        Item::builtin("daily-tidy", "Tidy desk"),
    ];
    let mut weeklies = vec![
        Item::builtin("weekly-review", "Weekly review"),
        Item::builtin("weekly-plan", "Plan the week"),
        Item::builtin("weekly-budget", "Review budget"),
        Item::builtin("weekly-backup", "Back up laptop"),
        Item::builtin("weekly-plants", "Water plants"),
        Item::builtin("weekly-groceries", "Order groceries"),
    ];

    sort_items(&mut dailies);
    sort_items(&mut weeklies);

    TodoCollection {
        version: LIST_VERSION.to_string(),
        dailies,
        weeklies,
    }
}
