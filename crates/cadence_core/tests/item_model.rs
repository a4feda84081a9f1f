use cadence_core::{Item, ItemValidationError};

#[test]
fn builtin_sets_defaults() {
    let item = Item::builtin("daily-tidy", "Tidy desk");

    assert_eq!(item.id, "daily-tidy");
    assert_eq!(item.name, "Tidy desk");
    assert!(!item.is_completed);
    assert!(!item.hidden);
    assert!(!item.is_custom);
    assert!(item.is_visible());
}

#[test]
fn custom_generates_stable_id_and_flag() {
    let first = Item::custom("Walk the dog");
    let second = Item::custom("Walk the dog");

    assert!(first.is_custom);
    assert!(!first.id.is_empty());
    assert_ne!(first.id, second.id);
}

#[test]
fn serialization_uses_camel_case_wire_fields() {
    let mut item = Item::builtin("a1", "Alpha");
    item.is_completed = true;
    item.is_custom = true;

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], "a1");
    assert_eq!(json["name"], "Alpha");
    assert_eq!(json["isCompleted"], true);
    assert_eq!(json["hidden"], false);
    assert_eq!(json["isCustom"], true);

    let decoded: Item = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn missing_flags_deserialize_as_false() {
    let decoded: Item = serde_json::from_str(r#"{"id":"x","name":"Bare"}"#).unwrap();

    assert!(!decoded.is_completed);
    assert!(!decoded.hidden);
    assert!(!decoded.is_custom);
}

#[test]
fn validate_rejects_blank_name() {
    let item = Item::builtin("id", "   ");

    assert_eq!(item.validate().unwrap_err(), ItemValidationError::BlankName);
}

#[test]
fn validate_rejects_blank_id() {
    let item = Item::builtin("", "Named");

    assert_eq!(
        item.validate().unwrap_err(),
        ItemValidationError::BlankId {
            name: "Named".to_string()
        }
    );
}
