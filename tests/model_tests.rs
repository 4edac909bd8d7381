/// End-to-end ingestion and generation tests.

use rand::rngs::StdRng;
use rand::SeedableRng;

use wordchain::core::chain::ChainModel;
use wordchain::core::snapshot::{Snapshot, SnapshotEntry};
use wordchain::core::walk::GenerateError;

/// A model with exactly one entry `"a" -> {"b": 1}` and `"b"` unknown as a
/// predecessor, built through the snapshot boundary (ingestion would
/// register `"b"` as a key).
fn single_edge_model() -> ChainModel {
    let snapshot = Snapshot {
        edge_count: Some(1),
        has_sentence_boundary: false,
        entries: vec![(
            "a".to_string(),
            SnapshotEntry {
                total: 1,
                related: vec![("b".to_string(), 1)],
            },
        )],
    };
    ChainModel::from_snapshot(&snapshot).unwrap()
}

#[test]
fn ingest_scenario_counts() {
    let mut model = ChainModel::new();
    model.ingest_text("The cat sat. The dog ran.");

    assert!(model.has_sentence_boundary());
    assert_eq!(model.len(), 5);
    assert_eq!(model.edge_count(), 5);
    for word in ["The", "cat", "sat.", "dog", "ran."] {
        assert!(model.has(word), "missing key '{}'", word);
    }
}

#[test]
fn halting_walk_stops_at_dead_end() {
    let mut model = single_edge_model();
    let mut rng = StdRng::seed_from_u64(0);

    let words = model.generate_words(3, None, true, &mut rng).unwrap();
    assert_eq!(words, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn non_halting_walk_reseeds_and_fills_count() {
    for seed in 0..20 {
        let mut model = single_edge_model();
        let mut rng = StdRng::seed_from_u64(seed);
        let words = model.generate_words(2, None, false, &mut rng).unwrap();
        assert_eq!(words.len(), 2, "seed {} produced {:?}", seed, words);
        assert_eq!(words, vec!["a".to_string(), "b".to_string()]);
    }
}

#[test]
fn walk_words_are_always_model_words() {
    let mut model = ChainModel::new();
    model.ingest_text("one two three one three two one");
    let mut rng = StdRng::seed_from_u64(5);

    let words = model.generate_words(50, None, false, &mut rng).unwrap();
    assert_eq!(words.len(), 50);
    for word in &words {
        assert!(model.has(word), "walk produced unknown word '{}'", word);
    }
}

#[test]
fn zero_count_is_invalid() {
    let mut model = single_edge_model();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        model.generate_words(0, None, true, &mut rng),
        Err(GenerateError::InvalidCount(0))
    );
    assert_eq!(
        model.generate_sentences(0, None, &mut rng),
        Err(GenerateError::NoSentenceBoundary),
        "boundary requirement is checked before the count"
    );
}

#[test]
fn generation_on_empty_model_errors() {
    let mut model = ChainModel::new();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        model.generate_words(1, None, true, &mut rng),
        Err(GenerateError::EmptyModel)
    );
}

#[test]
fn sentences_need_an_observed_boundary() {
    let mut model = ChainModel::new();
    model.ingest_text("no punctuation here");
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        model.generate_sentences(1, None, &mut rng),
        Err(GenerateError::NoSentenceBoundary)
    );
}

#[test]
fn sentence_walk_ends_on_terminators() {
    let mut model = ChainModel::new();
    model.ingest_text("He ran. She slept. He ran. She slept.");
    let mut rng = StdRng::seed_from_u64(21);

    let words = model.generate_sentences(3, None, &mut rng).unwrap();
    let terminators = words
        .iter()
        .filter(|w| w.contains(['.', '!', '?']))
        .count();
    assert_eq!(terminators, 3);
    assert!(words.last().unwrap().contains(['.', '!', '?']));
}

#[test]
fn start_word_is_prepended() {
    let mut model = ChainModel::new();
    model.ingest_text("alpha beta gamma");
    let mut rng = StdRng::seed_from_u64(9);

    let words = model.generate_words(3, Some("alpha"), true, &mut rng).unwrap();
    assert_eq!(words[0], "alpha");
}

#[test]
fn unknown_start_halts_immediately() {
    let mut model = single_edge_model();
    let mut rng = StdRng::seed_from_u64(9);

    let words = model
        .generate_words(3, Some("nowhere"), true, &mut rng)
        .unwrap();
    assert_eq!(words, vec!["nowhere".to_string()]);
}
