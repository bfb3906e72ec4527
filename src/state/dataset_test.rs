use super::*;

fn sample(key: &str) -> SampleRecord {
    SampleRecord { object_key: key.to_owned(), ..SampleRecord::default() }
}

#[test]
fn dataset_state_defaults() {
    let state = DatasetState::default();
    assert_eq!(state.status, FetchStatus::Idle);
    assert!(state.records.is_empty());
    assert!(state.error.is_empty());
}

#[test]
fn begin_marks_loading_and_bumps_seq() {
    let mut state = DatasetState::default();
    let seq = state.begin();
    assert_eq!(seq, 1);
    assert_eq!(state.status, FetchStatus::Loading);
}

#[test]
fn apply_success_stores_records() {
    let mut state = DatasetState::default();
    let seq = state.begin();
    state.apply(seq, Ok(vec![sample("v1/a.jpg")]));
    assert_eq!(state.status, FetchStatus::Success);
    assert_eq!(state.records.len(), 1);
}

#[test]
fn apply_error_stores_message() {
    let mut state = DatasetState::default();
    let seq = state.begin();
    state.apply(seq, Err("Dataset request failed with status 500.".to_owned()));
    assert_eq!(state.status, FetchStatus::Error);
    assert_eq!(state.error, "Dataset request failed with status 500.");
}

#[test]
fn stale_outcome_is_discarded() {
    let mut state = DatasetState::default();
    let stale = state.begin();
    let fresh = state.begin();
    state.apply(stale, Ok(vec![sample("old")]));
    assert_eq!(state.status, FetchStatus::Loading);
    assert!(state.records.is_empty());

    state.apply(fresh, Ok(vec![sample("new")]));
    assert_eq!(state.records[0].object_key, "new");
}

#[test]
fn reset_supersedes_in_flight_fetch() {
    let mut state = DatasetState::default();
    let seq = state.begin();
    state.reset();
    state.apply(seq, Ok(vec![sample("late")]));
    assert_eq!(state.status, FetchStatus::Idle);
    assert!(state.records.is_empty());
}
