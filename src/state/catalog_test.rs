use super::*;

fn item(id: &str, name: &str) -> CatalogItem {
    CatalogItem { id: id.to_owned(), name: name.to_owned() }
}

#[test]
fn catalog_state_defaults() {
    let state = CatalogState::default();
    assert_eq!(state.status, FetchStatus::Idle);
    assert!(state.items.is_empty());
}

#[test]
fn apply_success_stores_items() {
    let mut state = CatalogState::default();
    let seq = state.begin();
    state.apply(seq, Ok(vec![item("1", "Pasta")]));
    assert_eq!(state.status, FetchStatus::Success);
    assert_eq!(state.name_of("1"), Some("Pasta"));
    assert_eq!(state.name_of("2"), None);
}

#[test]
fn retry_supersedes_failed_fetch() {
    let mut state = CatalogState::default();
    let first = state.begin();
    state.apply(first, Err("Menu request failed with status 503.".to_owned()));
    assert_eq!(state.status, FetchStatus::Error);

    let second = state.begin();
    assert!(state.error.is_empty());
    state.apply(first, Ok(vec![item("1", "Stale")]));
    assert!(state.items.is_empty());
    state.apply(second, Ok(vec![item("1", "Fresh")]));
    assert_eq!(state.name_of("1"), Some("Fresh"));
}
