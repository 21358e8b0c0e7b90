//! End-to-end scenarios: load, solve, build, search.

mod common;

use common::*;
use obst::{
    build_probabilities_with, FrequencyTable, GapAccounting, KeyRecord, ObstConfig,
    OptimalSearchIndex, SearchTree,
};

#[test]
fn fruit_dictionary_roots_at_banana() {
    let index = fruit_index();

    assert_eq!(index.solution().n(), 3);
    assert_eq!(index.solution().root_index(), 2);
    assert_eq!(index.tree().root().unwrap().value(), "banana");

    let expected = 315_195.0 / FRUIT_FREQ_SUM as f64;
    assert!((index.expected_cost() - expected).abs() < 1e-9);
}

#[test]
fn fruit_probabilities_cover_all_mass() {
    let index = fruit_index();
    let probs = index.probabilities();

    let total = FRUIT_FREQ_SUM as f64;
    assert_eq!(probs.q(), &[10.0 / total, 5.0 / total, 20.0 / total, 30.0 / total]);
    assert!((probs.total_mass() - 1.0).abs() < 1e-12);
}

#[test]
fn root_word_needs_one_comparison() {
    let index = fruit_index();
    let outcome = index.search("banana");

    assert!(outcome.found);
    assert_eq!(outcome.comparisons, 1);
    assert_eq!(outcome.path, ["banana"]);
}

#[test]
fn absent_word_reports_depth_reached() {
    let index = fruit_index();
    let outcome = index.search("durian");

    assert!(!outcome.found);
    assert_eq!(outcome.path, ["banana", "cherry"]);
    assert_eq!(outcome.comparisons, 2);
}

#[test]
fn words_below_threshold_are_not_nodes() {
    let index = fruit_index();
    let outcome = index.search("aardvark");

    assert!(!outcome.found);
    assert_eq!(outcome.path, ["banana", "apple"]);
}

#[test]
fn single_key_tree() {
    let table = FrequencyTable::from_records(vec![KeyRecord::new(100, "solo")], 1).unwrap();
    let index = OptimalSearchIndex::build(&table, &ObstConfig::default().with_threshold(1))
        .unwrap();

    let root = index.tree().root().unwrap();
    assert!(root.is_leaf());
    assert_eq!(index.tree().len(), 1);

    let outcome = index.search("solo");
    assert!(outcome.found);
    assert_eq!(outcome.comparisons, 1);
}

#[test]
fn empty_tree_lookup_is_not_an_error() {
    let tree = SearchTree::empty();
    let outcome = obst::search(&tree, "apple");
    assert!(!outcome.found);
    assert_eq!(outcome.comparisons, 0);
}

#[test]
fn legacy_gap_accounting_diverges_only_at_q0() {
    let table = fruit_table();
    let fixed = build_probabilities_with(
        table.full(),
        table.reduced(),
        table.freq_sum(),
        GapAccounting::Frequency,
    )
    .unwrap();
    let legacy = build_probabilities_with(
        table.full(),
        table.reduced(),
        table.freq_sum(),
        GapAccounting::LegacyPositional,
    )
    .unwrap();

    // one key ("aardvark", position 0) precedes "apple"
    assert_eq!(legacy.q()[0], 0.0);
    assert!(fixed.q()[0] > 0.0);
    assert_eq!(fixed.q()[1..], legacy.q()[1..]);

    let index = OptimalSearchIndex::build(
        &table,
        &ObstConfig::default().with_gap_accounting(GapAccounting::LegacyPositional),
    )
    .unwrap();
    assert!(index.expected_cost() < fruit_index().expected_cost());
}

#[test]
fn every_reduced_word_is_found() {
    let frequencies = [90_000, 51_000, 75_000, 120_000, 50_000, 66_000, 80_000];
    let table = FrequencyTable::from_records(numbered_records(&frequencies), 50_000).unwrap();
    let index = OptimalSearchIndex::build(&table, &ObstConfig::default()).unwrap();

    for record in table.reduced() {
        let outcome = index.search(&record.word);
        assert!(outcome.found, "{} should be found", record.word);
        assert_eq!(outcome.path.last(), Some(&record.word.as_str()));
    }
}
