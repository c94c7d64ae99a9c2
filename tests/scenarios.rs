//! End-to-end alignment scenarios.
//!
//! Each test runs the full pipeline (alphabet, cost matrix, factor
//! composition, extraction) and checks both the total and the shape of the
//! alignment.

use wfst_edit::prelude::*;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn nums(values: &[f64]) -> Vec<Number> {
    values.iter().map(|&v| Number::new(v).unwrap()).collect()
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_kitten_sitting_flat() {
    let alignment = letter_distance("kitten", "sitting").unwrap();
    assert_close(alignment.total(), 3.0);
    assert_eq!(alignment.count(EditOperation::Substitute), 2);
    assert_eq!(alignment.count(EditOperation::Insert), 1);
    assert_eq!(alignment.count(EditOperation::Delete), 0);
    assert_eq!(alignment.count(EditOperation::Copy), 4);
}

#[test]
fn test_numeric_soft_substitution_ties_miss() {
    let alignment = numeric_distance(&[1.0, 2.0, 3.0], &[1.0, 2.0, 4.0], 1.5).unwrap();
    assert_close(alignment.total(), 1.0);
    assert_eq!(alignment.len(), 3);
    let last = &alignment.steps()[2];
    assert_eq!(last.input, Symbol::Token(Number::new(3.0).unwrap()));
    assert_eq!(last.output, Symbol::Token(Number::new(4.0).unwrap()));
    assert_eq!(last.operation, EditOperation::Substitute);
}

#[test]
fn test_numeric_soft_substitution_below_miss() {
    let alignment = numeric_distance(&[0.0], &[0.3], 1.0).unwrap();
    assert_close(alignment.total(), 0.3);
    assert_eq!(alignment.len(), 1);
    assert_eq!(alignment.steps()[0].operation, EditOperation::Substitute);
    assert_close(alignment.steps()[0].weight, 0.3);
}

#[test]
fn test_numeric_miss_beats_expensive_soft_substitution() {
    // soft weight 1.8 is admitted but the flat miss is cheaper
    let alignment = numeric_distance(&[0.0], &[1.8], 2.0).unwrap();
    assert_close(alignment.total(), 1.0);
    assert_eq!(alignment.steps()[0].operation, EditOperation::Substitute);
}

// ============================================================================
// Empty sequences
// ============================================================================

#[test]
fn test_both_empty() {
    let alignment = letter_distance("", "").unwrap();
    assert_close(alignment.total(), 0.0);
    assert!(alignment.is_empty());
}

#[test]
fn test_empty_source_inserts_everything() {
    let aligner = AlignerBuilder::new().insertion_penalty(0.75).build().unwrap();
    let target: Vec<char> = "abcd".chars().collect();
    let alignment = aligner.align(&[], &target).unwrap();
    assert_close(alignment.total(), 3.0);
    assert_eq!(alignment.count(EditOperation::Insert), 4);
}

#[test]
fn test_empty_target_deletes_everything() {
    let aligner = AlignerBuilder::new()
        .cost_model(NumericThreshold::default())
        .deletion_penalty(2.0)
        .build()
        .unwrap();
    let alignment = aligner.align(&nums(&[1.0, 1.5, 9.0]), &[]).unwrap();
    assert_close(alignment.total(), 6.0);
    assert_eq!(alignment.count(EditOperation::Delete), 3);
}

// ============================================================================
// Identity and thresholds
// ============================================================================

#[test]
fn test_identity_is_all_copies() {
    for word in ["a", "banana", "qwerty", "mississippi"] {
        let alignment = keyboard_distance(word, word, DEFAULT_KEYBOARD_THRESHOLD).unwrap();
        assert_close(alignment.total(), 0.0);
        assert_eq!(alignment.len(), word.chars().count());
        assert!(alignment.is_identity());
    }
}

#[test]
fn test_numeric_identity_is_all_copies() {
    let values = [0.5, -2.0, 0.5, 100.25];
    let alignment = numeric_distance(&values, &values, 1.0).unwrap();
    assert_close(alignment.total(), 0.0);
    assert!(alignment.is_identity());
}

#[test]
fn test_zero_threshold_is_levenshtein() {
    let alignment = numeric_distance(&[1.0, 1.1, 3.0], &[1.0, 1.2, 3.0, 4.0], 0.0).unwrap();
    assert_close(alignment.total(), 2.0);
    let alignment = numeric_distance(&[5.0, 6.0], &[5.0, 6.0], 0.0).unwrap();
    assert_close(alignment.total(), 0.0);
}

#[test]
fn test_negative_zero_matches_zero() {
    let alignment = numeric_distance(&[-0.0], &[0.0], 0.0).unwrap();
    assert_close(alignment.total(), 0.0);
    assert!(alignment.is_identity());
}

// ============================================================================
// Keyboard proximity
// ============================================================================

#[test]
fn test_keyboard_neighbours_are_cheap() {
    let near = keyboard_distance("q", "w", DEFAULT_KEYBOARD_THRESHOLD).unwrap();
    assert_close(near.total(), 1.0 / (2.0 * DEFAULT_KEYBOARD_THRESHOLD));

    let far = keyboard_distance("q", "p", DEFAULT_KEYBOARD_THRESHOLD).unwrap();
    assert_close(far.total(), 1.0);
}

#[test]
fn test_keyboard_typo_word() {
    // 'p' sits next to 'o'
    let typo = keyboard_distance("wprld", "world", DEFAULT_KEYBOARD_THRESHOLD).unwrap();
    let flat = letter_distance("wprld", "world").unwrap();
    assert_close(flat.total(), 1.0);
    assert_close(typo.total(), 1.0 / (2.0 * DEFAULT_KEYBOARD_THRESHOLD));
    assert_eq!(typo.count(EditOperation::Substitute), 1);
}

#[test]
fn test_keyboard_unknown_keys_fall_back_to_miss() {
    let alignment = keyboard_distance("1", "2", DEFAULT_KEYBOARD_THRESHOLD).unwrap();
    assert_close(alignment.total(), 1.0);
}

// ============================================================================
// Penalties and rendering
// ============================================================================

#[test]
fn test_expensive_miss_prefers_indel() {
    let aligner = AlignerBuilder::new().miss_penalty(5.0).build().unwrap();
    let alignment = aligner.align(&['a'], &['b']).unwrap();
    assert_close(alignment.total(), 2.0);
    assert_eq!(alignment.count(EditOperation::Insert), 1);
    assert_eq!(alignment.count(EditOperation::Delete), 1);
}

#[test]
fn test_total_is_sum_of_steps() {
    let alignment = keyboard_distance("keybaord", "keyboard", 1.9).unwrap();
    let sum: f64 = alignment.steps().iter().map(|s| s.weight).sum();
    assert_close(alignment.total(), sum);
}

#[test]
fn test_text_rendering_layout() {
    let alignment = numeric_distance(&[0.0], &[0.3], 1.0).unwrap();
    assert_eq!(
        alignment.to_string(),
        "Transition :\n0.0\t->\t0.3,\tcost : 0.300\nTotal Edit Distance : 0.300"
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = keyboard_distance("abcab", "bacba", 1.9).unwrap();
    for _ in 0..5 {
        assert_eq!(keyboard_distance("abcab", "bacba", 1.9).unwrap(), first);
    }
}
