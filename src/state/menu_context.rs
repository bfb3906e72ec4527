//! Menu-context resolution: which catalog items were actually offered
//! for a (date, meal, hall) selection.
//!
//! DESIGN
//! ======
//! A selection expands into one menu query per (hall, meal) pair in the
//! cartesian product of the selectors. Resolution is all-or-nothing: the
//! first failing sub-request fails the whole resolution and any partial
//! accumulation is discarded. Supersession uses a request sequence
//! number; `apply` drops outcomes from any resolution that is no longer
//! current, so stale results never reach displayed state.

#[cfg(test)]
#[path = "menu_context_test.rs"]
mod menu_context_test;

use super::status::FetchStatus;
use crate::coverage::ContextMembership;
use crate::net::types::{Mealtime, MenuEntry};
use crate::util::halls::{self, DiningHall};

/// Meal dimension of a context selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MealSelector {
    #[default]
    All,
    One(Mealtime),
}

/// Dining-hall dimension of a context selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HallSelector {
    #[default]
    All,
    One(String),
}

/// A full (date, meal, hall) selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContextSelection {
    /// Target date in `YYYY-MM-DD` form.
    pub date: String,
    pub meal: MealSelector,
    pub hall: HallSelector,
}

/// One concrete (hall, meal) query produced by expanding a selection.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextPair {
    pub hall_id: String,
    pub hall_name: String,
    pub meal: Mealtime,
}

/// Expand a selection into the (hall, meal) pairs to query, ordered by
/// the built-in hall reference then by mealtime.
pub fn context_pairs(selection: &ContextSelection) -> Vec<ContextPair> {
    let hall_list: Vec<&DiningHall> = match &selection.hall {
        HallSelector::All => halls::DINING_HALLS.iter().collect(),
        HallSelector::One(id) => halls::DINING_HALLS
            .iter()
            .filter(|hall| hall.id.to_string() == *id)
            .collect(),
    };
    let meals: Vec<Mealtime> = match selection.meal {
        MealSelector::All => Mealtime::ALL.to_vec(),
        MealSelector::One(meal) => vec![meal],
    };

    let mut pairs = Vec::with_capacity(hall_list.len() * meals.len());
    for hall in hall_list {
        for &meal in &meals {
            pairs.push(ContextPair {
                hall_id: hall.id.to_string(),
                hall_name: hall.name.to_owned(),
                meal,
            });
        }
    }
    pairs
}

/// Label for one pair, naming only the dimensions the selection left at
/// `All` (a pinned dimension is implied by the selection itself).
pub fn pair_label(selection: &ContextSelection, pair: &ContextPair) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(2);
    if selection.hall == HallSelector::All {
        parts.push(&pair.hall_name);
    }
    if selection.meal == MealSelector::All {
        parts.push(pair.meal.label());
    }
    parts.join(" · ")
}

/// Fold one sub-query's entries into the accumulating membership.
pub fn accumulate(membership: &mut ContextMembership, entries: &[MenuEntry], label: &str) {
    for entry in entries {
        membership.insert(&entry.id, label);
    }
}

/// Shared menu-context state consumed by the coverage page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuContextState {
    /// Whether coverage rows are filtered by the membership.
    pub enabled: bool,
    pub selection: ContextSelection,
    pub status: FetchStatus,
    pub error: String,
    pub membership: Option<ContextMembership>,
    pub seq: u64,
}

impl MenuContextState {
    /// Start a new resolution for the current selection, superseding any
    /// in-flight one.
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.status = FetchStatus::Loading;
        self.error.clear();
        self.seq
    }

    /// Apply a resolution outcome. Stale sequences are ignored; a failed
    /// resolution discards the previous membership rather than keeping a
    /// half-stale filter active.
    pub fn apply(&mut self, seq: u64, outcome: Result<ContextMembership, String>) {
        if seq != self.seq {
            return;
        }
        match outcome {
            Ok(membership) => {
                self.membership = Some(membership);
                self.status = FetchStatus::Success;
                self.error.clear();
            }
            Err(message) => {
                self.membership = None;
                self.status = FetchStatus::Error;
                self.error = message;
            }
        }
    }

    /// Turn the filter off and drop the membership, superseding any
    /// in-flight resolution.
    pub fn disable(&mut self) {
        self.seq += 1;
        self.enabled = false;
        self.status = FetchStatus::Idle;
        self.error.clear();
        self.membership = None;
    }

    /// Membership to filter rows by, when enabled and resolved.
    pub fn active_membership(&self) -> Option<&ContextMembership> {
        if self.enabled { self.membership.as_ref() } else { None }
    }

    /// The filter is switched on but cannot resolve until a date is
    /// picked, so rows are still unfiltered.
    pub fn awaiting_date(&self) -> bool {
        self.enabled && self.selection.date.is_empty()
    }
}

/// Run the query sequence for `selection` and build the membership.
///
/// Issues one menu query per pair, in order, stopping at the first
/// failure (all-or-nothing resolution).
///
/// # Errors
///
/// Returns the first sub-request's error message.
pub async fn resolve(selection: &ContextSelection) -> Result<ContextMembership, String> {
    let mut membership = ContextMembership::default();
    for pair in context_pairs(selection) {
        let entries = crate::net::menu::fetch_menu(&pair.hall_id, pair.meal, &selection.date).await?;
        let label = pair_label(selection, &pair);
        accumulate(&mut membership, &entries, &label);
    }
    Ok(membership)
}
