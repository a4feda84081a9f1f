use cadence_core::{merge_collection, merge_list, sort_items, Category, CustomOverlay, Item, TodoCollection};

#[test]
fn merge_is_idempotent() {
    let base = vec![
        completed(Item::builtin("a", "Alpha")),
        Item::builtin("b", "Beta"),
        custom("x", "Extra"),
    ];
    let overlay = vec![Item::builtin("x", "Extra"), Item::builtin("y", "Yet another")];

    let once = merge_list(base, Some(&overlay));
    let twice = merge_list(once.clone(), Some(&overlay));

    assert_eq!(once, twice);
}

#[test]
fn sort_order_is_total_over_completion_then_name() {
    let mut items = vec![
        completed(Item::builtin("1", "zeta")),
        Item::builtin("2", "Beta"),
        completed(Item::builtin("3", "Alpha")),
        Item::builtin("4", "gamma"),
        Item::builtin("5", "alpha"),
    ];

    sort_items(&mut items);

    for pair in items.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.is_completed <= b.is_completed, "{} before {}", a.name, b.name);
        if a.is_completed == b.is_completed {
            assert!(
                a.name.to_lowercase() <= b.name.to_lowercase(),
                "{} before {}",
                a.name,
                b.name
            );
        }
    }
}

#[test]
fn overlay_items_are_added_as_custom() {
    let base = vec![Item::builtin("1", "A")];
    let overlay = vec![Item::builtin("2", "B")];

    let merged = merge_list(base, Some(&overlay));

    assert_eq!(merged.len(), 2);
    let added = merged.iter().find(|item| item.id == "2").unwrap();
    assert!(added.is_custom);
    assert_eq!(merged[0].name, "A");
    assert_eq!(merged[1].name, "B");
}

#[test]
fn stale_custom_items_are_pruned_by_empty_overlay() {
    let base = vec![Item::builtin("1", "Keep"), custom("2", "Stale")];

    let merged = merge_list(base, Some(&[]));

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].id, "1");
}

#[test]
fn non_custom_items_survive_any_overlay() {
    let base = vec![Item::builtin("1", "Builtin")];

    let merged = merge_list(base, Some(&[]));

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].id, "1");
    assert!(!merged[0].is_custom);
}

#[test]
fn absent_overlay_only_reorders() {
    let base = vec![
        completed(Item::builtin("1", "Alpha")),
        custom("2", "Kept custom"),
        Item::builtin("3", "Beta"),
    ];

    let merged = merge_list(base.clone(), None);

    assert_eq!(merged.len(), base.len());
    for item in &base {
        assert!(merged.iter().any(|kept| kept.id == item.id));
    }
    assert_eq!(merged[0].name, "Beta");
    assert_eq!(merged[1].name, "Kept custom");
    assert_eq!(merged[2].name, "Alpha");
}

#[test]
fn existing_item_wins_over_overlay_copy() {
    let base = vec![Item::builtin("1", "Original name")];
    let overlay = vec![Item::builtin("1", "Renamed in overlay")];

    let merged = merge_list(base, Some(&overlay));

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].name, "Original name");
    assert!(!merged[0].is_custom);
}

#[test]
fn reconciliation_scenario_from_stored_state() {
    let base = vec![
        Item::builtin("a", "Alpha"),
        completed(custom("b", "Beta")),
    ];
    let overlay = vec![Item::builtin("c", "Gamma")];

    let merged = merge_list(base, Some(&overlay));

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].name, "Alpha");
    assert!(!merged[0].is_completed);
    assert_eq!(merged[1].name, "Gamma");
    assert!(merged[1].is_custom);
    assert!(!merged[1].is_completed);
    assert!(!merged.iter().any(|item| item.id == "b"));
}

#[test]
fn merge_collection_covers_both_categories_and_keeps_version() {
    let base = TodoCollection {
        version: "2.0.0".to_string(),
        dailies: vec![Item::builtin("d1", "Daily"), custom("stale", "Old custom")],
        weeklies: vec![Item::builtin("w1", "Weekly")],
    };
    let mut overlay = CustomOverlay::default();
    overlay.list_mut(Category::Weeklies).push(Item::builtin("w2", "Added weekly"));

    let merged = merge_collection(base, Some(&overlay));

    assert_eq!(merged.version, "2.0.0");
    assert_eq!(merged.dailies.len(), 1);
    assert_eq!(merged.dailies[0].id, "d1");
    assert_eq!(merged.weeklies.len(), 2);
    assert!(merged
        .weeklies
        .iter()
        .any(|item| item.id == "w2" && item.is_custom));
}

fn completed(mut item: Item) -> Item {
    item.is_completed = true;
    item
}

fn custom(id: &str, name: &str) -> Item {
    let mut item = Item::builtin(id, name);
    item.is_custom = true;
    item
}
