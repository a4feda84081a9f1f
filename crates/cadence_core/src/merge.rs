//! Sort policy and list reconciliation.
//!
//! # Responsibility
//! - Define the total ordering used to present and persist list items.
//! - Reconcile a stored list against the user overlay, preserving progress
//!   and custom additions across list-definition upgrades.
//!
//! # Invariants
//! - Reconciliation is idempotent: merging an already-merged list against
//!   the same overlay yields the same items in the same order.
//! - Non-custom items are never removed by a merge.
//! - After a merge, every `is_custom` item has a matching id in the overlay.
//! - The overlay argument is never mutated.

use crate::model::collection::{CustomOverlay, TodoCollection};
use crate::model::item::{Category, Item};
use std::cmp::Ordering;

/// Sorts items in place: incomplete before completed, then by name.
///
/// The name comparison lowercases both sides, with the raw strings as a
/// final tie-break so the order stays total. No field other than position
/// is touched.
pub fn sort_items(items: &mut [Item]) {
    items.sort_by(|a, b| {
        a.is_completed
            .cmp(&b.is_completed)
            .then_with(|| compare_names(&a.name, &b.name))
    });
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Reconciles one category list against its overlay and sorts the result.
///
/// Takes ownership of `base`; callers that need the pre-merge list must
/// pass a copy. The overlay is read-only.
///
/// # Contract
/// - Overlay items whose id is absent from `base` are appended with
///   `is_custom = true`. Items already present by id are left untouched:
///   there is no field reconciliation, the existing copy wins.
/// - Custom items in `base` with no matching id in the overlay are removed.
///   Passing `Some` of an empty overlay therefore prunes every custom item,
///   while `None` leaves membership untouched entirely.
/// - Duplicate ids inside the overlay add only the first occurrence.
pub fn merge_list(mut base: Vec<Item>, overlay: Option<&[Item]>) -> Vec<Item> {
    if let Some(overlay) = overlay {
        for candidate in overlay {
            // A candidate added earlier in this loop is found here too, so
            // the first occurrence of a duplicated id wins.
            if !base.iter().any(|existing| existing.id == candidate.id) {
                let mut item = candidate.clone();
                item.is_custom = true;
                base.push(item);
            }
        }

        base.retain(|item| !item.is_custom || overlay.iter().any(|kept| kept.id == item.id));
    }

    sort_items(&mut base);
    base
}

/// Reconciles both categories of a collection, preserving its version.
pub fn merge_collection(
    mut base: TodoCollection,
    overlay: Option<&CustomOverlay>,
) -> TodoCollection {
    for category in Category::ALL {
        let list = std::mem::take(base.list_mut(category));
        *base.list_mut(category) = merge_list(list, overlay.map(|o| o.list(category)));
    }
    base
}

#[cfg(test)]
mod tests {
    use super::{merge_list, sort_items};
    use crate::model::item::Item;

    fn named(id: &str, name: &str) -> Item {
        Item::builtin(id, name)
    }

    #[test]
    fn sort_puts_incomplete_before_completed() {
        let mut done = named("a", "Aardvark");
        done.is_completed = true;
        let mut items = vec![done, named("z", "Zebra")];

        sort_items(&mut items);

        assert_eq!(items[0].name, "Zebra");
        assert_eq!(items[1].name, "Aardvark");
    }

    #[test]
    fn sort_tie_breaks_by_name_case_insensitively() {
        let mut items = vec![named("1", "banana"), named("2", "Apple")];

        sort_items(&mut items);

        assert_eq!(items[0].name, "Apple");
        assert_eq!(items[1].name, "banana");
    }

    #[test]
    fn duplicate_overlay_ids_add_first_occurrence_only() {
        let overlay = vec![named("c", "First"), named("c", "Second")];

        let merged = merge_list(Vec::new(), Some(&overlay));

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "First");
        assert!(merged[0].is_custom);
    }

    #[test]
    fn merge_does_not_mutate_overlay_items() {
        let overlay = vec![named("c", "Candidate")];

        let merged = merge_list(Vec::new(), Some(&overlay));

        assert!(!overlay[0].is_custom);
        assert!(merged[0].is_custom);
    }
}
