use super::*;

#[test]
fn fetch_status_default_is_idle() {
    assert_eq!(FetchStatus::default(), FetchStatus::Idle);
}

#[test]
fn fetch_status_predicates_match_variants() {
    assert!(FetchStatus::Loading.is_loading());
    assert!(FetchStatus::Success.is_success());
    assert!(FetchStatus::Error.is_error());
    assert!(!FetchStatus::Idle.is_loading());
    assert!(!FetchStatus::Idle.is_success());
    assert!(!FetchStatus::Idle.is_error());
}
