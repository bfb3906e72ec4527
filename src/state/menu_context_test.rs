use super::*;

fn selection(date: &str, meal: MealSelector, hall: HallSelector) -> ContextSelection {
    ContextSelection { date: date.to_owned(), meal, hall }
}

fn entry(id: &str) -> MenuEntry {
    MenuEntry { id: id.to_owned(), ..MenuEntry::default() }
}

// =============================================================
// context_pairs
// =============================================================

#[test]
fn all_by_all_expands_full_cartesian_product() {
    let pairs = context_pairs(&selection("2026-03-01", MealSelector::All, HallSelector::All));
    assert_eq!(pairs.len(), halls::DINING_HALLS.len() * 3);
}

#[test]
fn pinned_hall_and_meal_yield_single_pair() {
    let pairs = context_pairs(&selection(
        "2026-03-01",
        MealSelector::One(Mealtime::Dinner),
        HallSelector::One("7".to_owned()),
    ));
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].hall_id, "7");
    assert_eq!(pairs[0].hall_name, "North");
    assert_eq!(pairs[0].meal, Mealtime::Dinner);
}

#[test]
fn unknown_hall_id_expands_to_nothing() {
    let pairs = context_pairs(&selection(
        "2026-03-01",
        MealSelector::All,
        HallSelector::One("999".to_owned()),
    ));
    assert!(pairs.is_empty());
}

// =============================================================
// pair_label
// =============================================================

#[test]
fn label_names_only_unpinned_dimensions() {
    let pair = ContextPair {
        hall_id: "1".to_owned(),
        hall_name: "Whitney".to_owned(),
        meal: Mealtime::Lunch,
    };

    let both_open = selection("2026-03-01", MealSelector::All, HallSelector::All);
    assert_eq!(pair_label(&both_open, &pair), "Whitney · Lunch");

    let meal_pinned =
        selection("2026-03-01", MealSelector::One(Mealtime::Lunch), HallSelector::All);
    assert_eq!(pair_label(&meal_pinned, &pair), "Whitney");

    let hall_pinned =
        selection("2026-03-01", MealSelector::All, HallSelector::One("1".to_owned()));
    assert_eq!(pair_label(&hall_pinned, &pair), "Lunch");

    let both_pinned = selection(
        "2026-03-01",
        MealSelector::One(Mealtime::Lunch),
        HallSelector::One("1".to_owned()),
    );
    assert_eq!(pair_label(&both_pinned, &pair), "");
}

// =============================================================
// accumulate
// =============================================================

#[test]
fn accumulate_unions_ids_and_collects_labels() {
    let mut membership = ContextMembership::default();
    accumulate(&mut membership, &[entry("1"), entry("2")], "Whitney · Lunch");
    accumulate(&mut membership, &[entry("2")], "North · Dinner");

    assert_eq!(membership.ids.len(), 2);
    assert_eq!(membership.labels["1"], vec!["Whitney · Lunch"]);
    assert_eq!(membership.labels["2"], vec!["Whitney · Lunch", "North · Dinner"]);
}

// =============================================================
// MenuContextState supersession
// =============================================================

#[test]
fn stale_resolution_never_applies() {
    let mut state = MenuContextState { enabled: true, ..MenuContextState::default() };

    let first = state.begin();
    let second = state.begin();

    let mut stale = ContextMembership::default();
    stale.insert("old", "");
    state.apply(first, Ok(stale));
    assert_eq!(state.status, FetchStatus::Loading);
    assert!(state.membership.is_none());

    let mut fresh = ContextMembership::default();
    fresh.insert("new", "");
    state.apply(second, Ok(fresh));
    assert_eq!(state.status, FetchStatus::Success);
    assert!(state.membership.as_ref().unwrap().ids.contains("new"));
}

#[test]
fn failed_resolution_discards_previous_membership() {
    let mut state = MenuContextState { enabled: true, ..MenuContextState::default() };
    let seq = state.begin();
    let mut membership = ContextMembership::default();
    membership.insert("1", "");
    state.apply(seq, Ok(membership));
    assert!(state.active_membership().is_some());

    let seq = state.begin();
    state.apply(seq, Err("Menu request failed with status 500.".to_owned()));
    assert_eq!(state.status, FetchStatus::Error);
    assert!(state.active_membership().is_none());
}

#[test]
fn disable_supersedes_in_flight_resolution() {
    let mut state = MenuContextState { enabled: true, ..MenuContextState::default() };
    let seq = state.begin();
    state.disable();

    let mut late = ContextMembership::default();
    late.insert("late", "");
    state.apply(seq, Ok(late));
    assert!(state.membership.is_none());
    assert_eq!(state.status, FetchStatus::Idle);
}

#[test]
fn enabled_filter_without_a_date_is_flagged_as_inert() {
    let mut state = MenuContextState { enabled: true, ..MenuContextState::default() };
    assert!(state.awaiting_date());
    assert!(state.active_membership().is_none());

    state.selection.date = "2026-03-01".to_owned();
    assert!(!state.awaiting_date());

    state.disable();
    assert!(!state.awaiting_date());
}

#[test]
fn membership_is_inactive_while_disabled() {
    let mut state = MenuContextState::default();
    let seq = state.begin();
    let mut membership = ContextMembership::default();
    membership.insert("1", "");
    state.apply(seq, Ok(membership));
    assert!(state.active_membership().is_none());

    state.enabled = true;
    assert!(state.active_membership().is_some());
}
