use super::*;

use crate::net::types::PlateItem;

fn record(items: Vec<(&str, Option<f64>)>) -> SampleRecord {
    SampleRecord {
        items: items
            .into_iter()
            .map(|(id, servings)| PlateItem { menu_item_id: id.to_owned(), servings })
            .collect(),
        ..SampleRecord::default()
    }
}

fn catalog(entries: &[(&str, &str)]) -> Vec<CatalogItem> {
    entries
        .iter()
        .map(|(id, name)| CatalogItem { id: (*id).to_owned(), name: (*name).to_owned() })
        .collect()
}

// =============================================================
// aggregate
// =============================================================

#[test]
fn solo_plate_with_one_serving_lands_in_lowest_bucket() {
    let coverage = aggregate(&[record(vec![("A", Some(1.0))])]);
    let counts = coverage["A"];
    assert_eq!(counts.total, 1);
    assert_eq!(counts.multi_count, 0);
    assert_eq!(counts.solo_0_to_1, 1);
    assert_eq!(counts.solo_1_to_2, 0);
    assert_eq!(counts.solo_2_plus, 0);
}

#[test]
fn multi_item_plate_counts_both_items_as_multi() {
    let coverage = aggregate(&[record(vec![("A", None), ("B", None)])]);
    for id in ["A", "B"] {
        let counts = coverage[id];
        assert_eq!(counts.total, 1);
        assert_eq!(counts.multi_count, 1);
        assert_eq!(counts.solo_0_to_1 + counts.solo_1_to_2 + counts.solo_2_plus, 0);
    }
}

#[test]
fn solo_serving_buckets_are_exclusive_and_exhaustive() {
    let coverage = aggregate(&[
        record(vec![("A", Some(2.5))]),
        record(vec![("B", Some(2.0))]),
        record(vec![("C", None)]),
        record(vec![("D", Some(0.5))]),
    ]);
    assert_eq!(coverage["A"].solo_2_plus, 1);
    assert_eq!(coverage["B"].solo_1_to_2, 1);
    assert_eq!(coverage["C"].solo_0_to_1, 1);
    assert_eq!(coverage["D"].solo_0_to_1, 1);
}

#[test]
fn bucket_sums_equal_totals() {
    let records = vec![
        record(vec![("A", Some(1.0))]),
        record(vec![("A", Some(3.0))]),
        record(vec![("A", None), ("B", Some(2.0))]),
        record(vec![("B", Some(1.5))]),
        record(vec![("A", Some(2.0)), ("A", Some(1.0))]),
    ];
    let coverage = aggregate(&records);
    for counts in coverage.values() {
        assert_eq!(
            counts.solo_0_to_1 + counts.solo_1_to_2 + counts.solo_2_plus + counts.multi_count,
            counts.total
        );
    }
}

#[test]
fn blank_ids_are_excluded() {
    let coverage = aggregate(&[record(vec![("  ", Some(1.0)), ("", None)])]);
    assert!(coverage.is_empty());
}

#[test]
fn repeated_id_on_one_plate_counts_every_occurrence() {
    let coverage = aggregate(&[record(vec![("A", Some(1.0)), ("A", Some(1.0))])]);
    let counts = coverage["A"];
    assert_eq!(counts.total, 2);
    assert_eq!(counts.multi_count, 2);
}

#[test]
fn record_without_items_contributes_nothing() {
    let coverage = aggregate(&[SampleRecord::default()]);
    assert!(coverage.is_empty());
}

// =============================================================
// build_rows
// =============================================================

#[test]
fn unlabeled_catalog_items_appear_with_zero_counts() {
    let rows = build_rows(&catalog(&[("1", "Pasta")]), &HashMap::new(), "", None);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "1");
    assert_eq!(rows[0].name, "Pasta");
    assert_eq!(rows[0].counts, CoverageCounts::default());
}

#[test]
fn dataset_only_ids_appear_with_empty_name() {
    let coverage = aggregate(&[record(vec![("99", Some(1.0))])]);
    let rows = build_rows(&catalog(&[("1", "Pasta")]), &coverage, "", None);
    assert_eq!(rows.len(), 2);
    let orphan = rows.iter().find(|row| row.id == "99").unwrap();
    assert!(orphan.name.is_empty());
    assert_eq!(orphan.counts.total, 1);
}

#[test]
fn rows_sort_by_multi_count_then_numeric_id() {
    let coverage = aggregate(&[
        record(vec![("10", None), ("2", None)]),
        record(vec![("7", Some(1.0))]),
    ]);
    let rows = build_rows(
        &catalog(&[("10", "Ten"), ("2", "Two"), ("7", "Seven")]),
        &coverage,
        "",
        None,
    );
    let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "10", "7"]);
}

#[test]
fn search_filters_on_id_and_name_case_insensitively() {
    let rows = build_rows(
        &catalog(&[("1", "Pasta Primavera"), ("2", "Burger"), ("31", "Soup")]),
        &HashMap::new(),
        "PASTA",
        None,
    );
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "1");

    let rows = build_rows(
        &catalog(&[("1", "Pasta Primavera"), ("2", "Burger"), ("31", "Soup")]),
        &HashMap::new(),
        "3",
        None,
    );
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "31");
}

#[test]
fn context_membership_filters_rows_and_attaches_labels() {
    let mut membership = ContextMembership::default();
    membership.insert("1", "Whitney · Lunch");
    membership.insert("1", "North · Dinner");
    membership.insert("1", "Whitney · Lunch");

    let rows = build_rows(
        &catalog(&[("1", "Pasta"), ("2", "Burger")]),
        &HashMap::new(),
        "",
        Some(&membership),
    );
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "1");
    assert_eq!(rows[0].context_labels, vec!["Whitney · Lunch", "North · Dinner"]);
}

#[test]
fn context_membership_ignores_blank_ids_and_labels() {
    let mut membership = ContextMembership::default();
    membership.insert("  ", "Whitney");
    membership.insert("1", "");
    assert!(membership.ids.contains("1"));
    assert_eq!(membership.ids.len(), 1);
    assert!(membership.labels.is_empty());
}

// =============================================================
// covered_count
// =============================================================

#[test]
fn covered_count_requires_at_least_one_appearance() {
    let coverage = aggregate(&[record(vec![("1", Some(1.0))])]);
    let items = catalog(&[("1", "Pasta"), ("2", "Burger")]);
    assert_eq!(covered_count(&items, &coverage), 1);
    assert_eq!(covered_count(&items, &HashMap::new()), 0);
}

// =============================================================
// compare_ids_numeric
// =============================================================

#[test]
fn numeric_runs_compare_as_numbers() {
    use std::cmp::Ordering;
    assert_eq!(compare_ids_numeric("2", "10"), Ordering::Less);
    assert_eq!(compare_ids_numeric("item2", "item10"), Ordering::Less);
    assert_eq!(compare_ids_numeric("10", "10"), Ordering::Equal);
    assert_eq!(compare_ids_numeric("007", "7"), Ordering::Equal);
    assert_eq!(compare_ids_numeric("a", "b"), Ordering::Less);
    assert_eq!(compare_ids_numeric("a1", "a"), Ordering::Greater);
}
