//! Coverage aggregation: how often each catalog item shows up in the
//! labeled dataset.
//!
//! DESIGN
//! ======
//! Pure functions from (samples, catalog, filters) to display rows, with
//! no caching. Inputs are small in-memory collections that arrive from
//! independent fetches, so callers simply recompute whenever any input
//! changes.

#[cfg(test)]
#[path = "coverage_test.rs"]
mod coverage_test;

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::net::types::{CatalogItem, SampleRecord};

/// Aggregate counts for one menu-item id.
///
/// Solo buckets split single-item plates by recorded servings; together
/// with `multi_count` they partition `total` exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoverageCounts {
    /// Appearances across all plates.
    pub total: u32,
    /// Appearances on plates with more than one line item.
    pub multi_count: u32,
    /// Solo plates with servings <= 1, or no numeric servings.
    pub solo_0_to_1: u32,
    /// Solo plates with 1 < servings <= 2.
    pub solo_1_to_2: u32,
    /// Solo plates with servings > 2.
    pub solo_2_plus: u32,
}

/// One row of the coverage table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoverageRow {
    pub id: String,
    /// Catalog display name; empty for dataset-only ids.
    pub name: String,
    pub counts: CoverageCounts,
    /// Menu-context labels under which this item appeared, when a
    /// context filter is active.
    pub context_labels: Vec<String>,
}

/// Menu-context membership: which catalog ids an external menu query
/// reported, and the human-readable labels that produced each match.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContextMembership {
    pub ids: HashSet<String>,
    pub labels: HashMap<String, Vec<String>>,
}

impl ContextMembership {
    /// Record that `id` appeared under `label`. Blank labels mark
    /// membership without adding a display label.
    pub fn insert(&mut self, id: &str, label: &str) {
        let id = id.trim();
        if id.is_empty() {
            return;
        }
        self.ids.insert(id.to_owned());
        if label.is_empty() {
            return;
        }
        let labels = self.labels.entry(id.to_owned()).or_default();
        if !labels.iter().any(|existing| existing == label) {
            labels.push(label.to_owned());
        }
    }
}

/// Aggregate per-item coverage counts over the recorded samples.
///
/// Items with a blank `menuItemId` are excluded. Repeated ids within one
/// record count every occurrence. Records without parsable items
/// contribute nothing.
pub fn aggregate(records: &[SampleRecord]) -> HashMap<String, CoverageCounts> {
    let mut map: HashMap<String, CoverageCounts> = HashMap::new();

    for record in records {
        let plate_has_multiple = record.items.len() > 1;
        for item in &record.items {
            let id = item.menu_item_id.trim();
            if id.is_empty() {
                continue;
            }
            let entry = map.entry(id.to_owned()).or_default();
            entry.total += 1;
            if plate_has_multiple {
                entry.multi_count += 1;
            } else {
                match item.servings {
                    Some(servings) if servings.is_finite() && servings > 2.0 => {
                        entry.solo_2_plus += 1;
                    }
                    Some(servings) if servings.is_finite() && servings > 1.0 => {
                        entry.solo_1_to_2 += 1;
                    }
                    _ => entry.solo_0_to_1 += 1,
                }
            }
        }
    }

    map
}

/// Build the sorted coverage table.
///
/// One row per catalog item (zeroed counts when unlabeled), then rows for
/// dataset-only ids with an empty name. A non-blank `search` keeps rows
/// whose id or name contains it case-insensitively; a supplied `context`
/// keeps only member rows and attaches their labels. Rows sort by
/// descending `multi_count`, ties by ascending numeric-aware id order.
pub fn build_rows(
    catalog: &[CatalogItem],
    coverage: &HashMap<String, CoverageCounts>,
    search: &str,
    context: Option<&ContextMembership>,
) -> Vec<CoverageRow> {
    let mut rows: Vec<CoverageRow> = catalog
        .iter()
        .map(|item| CoverageRow {
            id: item.id.clone(),
            name: item.name.clone(),
            counts: coverage.get(&item.id).copied().unwrap_or_default(),
            context_labels: Vec::new(),
        })
        .collect();

    let catalog_ids: HashSet<&str> = catalog.iter().map(|item| item.id.as_str()).collect();
    let mut dataset_only: Vec<(&String, &CoverageCounts)> = coverage
        .iter()
        .filter(|(id, _)| !catalog_ids.contains(id.as_str()))
        .collect();
    // HashMap iteration order is arbitrary; fix it before the final sort
    // so equal rows land deterministically.
    dataset_only.sort_by(|a, b| compare_ids_numeric(a.0, b.0));
    for (id, counts) in dataset_only {
        rows.push(CoverageRow {
            id: id.clone(),
            name: String::new(),
            counts: *counts,
            context_labels: Vec::new(),
        });
    }

    let term = search.trim().to_lowercase();
    if !term.is_empty() {
        rows.retain(|row| {
            row.id.to_lowercase().contains(&term) || row.name.to_lowercase().contains(&term)
        });
    }

    if let Some(membership) = context {
        rows.retain(|row| membership.ids.contains(&row.id));
        for row in &mut rows {
            if let Some(labels) = membership.labels.get(&row.id) {
                row.context_labels = labels.clone();
            }
        }
    }

    rows.sort_by(|a, b| {
        b.counts
            .multi_count
            .cmp(&a.counts.multi_count)
            .then_with(|| compare_ids_numeric(&a.id, &b.id))
    });
    rows
}

/// Count catalog items with at least one recorded appearance.
pub fn covered_count(catalog: &[CatalogItem], coverage: &HashMap<String, CoverageCounts>) -> usize {
    catalog
        .iter()
        .filter(|item| coverage.get(&item.id).is_some_and(|counts| counts.total > 0))
        .count()
}

/// Numeric-aware lexical comparison: runs of ASCII digits compare as
/// numbers ("2" before "10"), everything else compares per character.
pub fn compare_ids_numeric(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(lc), Some(rc)) => {
                if lc.is_ascii_digit() && rc.is_ascii_digit() {
                    let lnum = take_digits(&mut left);
                    let rnum = take_digits(&mut right);
                    let ordering = compare_digit_runs(&lnum, &rnum);
                    if ordering != Ordering::Equal {
                        return ordering;
                    }
                } else {
                    let ordering = lc.cmp(&rc);
                    if ordering != Ordering::Equal {
                        return ordering;
                    }
                    left.next();
                    right.next();
                }
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
