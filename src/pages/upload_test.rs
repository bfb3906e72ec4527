use super::*;

fn draft(id: &str, servings: &str) -> ItemDraft {
    ItemDraft {
        key: format!("k-{id}-{servings}"),
        menu_item_id: id.to_owned(),
        servings: servings.to_owned(),
    }
}

// =============================================================
// normalize_items
// =============================================================

#[test]
fn normalize_trims_ids_and_parses_servings() {
    let items = normalize_items(&[draft("  12  ", " 1.5 "), draft("7", "2")]).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].menu_item_id, "12");
    assert_eq!(items[0].servings, 1.5);
    assert_eq!(items[1].servings, 2.0);
}

#[test]
fn normalize_rejects_empty_list() {
    assert_eq!(normalize_items(&[]).unwrap_err(), "Add at least one plate item.");
}

#[test]
fn normalize_rejects_blank_id_naming_the_row() {
    let error = normalize_items(&[draft("1", "1"), draft("   ", "1")]).unwrap_err();
    assert_eq!(error, "Item 2 is missing a menu item ID.");
}

#[test]
fn normalize_rejects_unparsable_or_nonpositive_servings() {
    let error = normalize_items(&[draft("1", "plenty")]).unwrap_err();
    assert_eq!(error, "Item 1 needs servings greater than zero.");

    let error = normalize_items(&[draft("1", "0")]).unwrap_err();
    assert_eq!(error, "Item 1 needs servings greater than zero.");

    let error = normalize_items(&[draft("1", "-2")]).unwrap_err();
    assert_eq!(error, "Item 1 needs servings greater than zero.");
}

// =============================================================
// validate_fields
// =============================================================

#[test]
fn validate_fields_requires_date_then_hall() {
    assert_eq!(validate_fields("", "7").unwrap_err(), "Pick the meal date.");
    assert_eq!(validate_fields("2026-03-01", " ").unwrap_err(), "Pick the dining hall.");
    assert!(validate_fields("2026-03-01", "7").is_ok());
}

#[test]
fn item_drafts_get_distinct_keys() {
    let a = ItemDraft::new();
    let b = ItemDraft::new();
    assert_ne!(a.key, b.key);
    assert!(a.menu_item_id.is_empty());
}
