use symptom_scout::nlp::normalize::{normalize, stem, tokenize};

#[test]
fn tokenize_splits_on_non_word_runs() {
    assert_eq!(tokenize("Runny nose, sneezing!!"), ["runny", "nose", "sneezing"]);
    assert!(tokenize("...!?").is_empty());
}

#[test]
fn stemmer_rules_fire_first_match_only() {
    assert_eq!(stem("sneezing"), "sneez");
    assert_eq!(stem("aches"), "ache");
    assert_eq!(stem("dizziness"), "dizziness");
    assert_eq!(stem("stress"), "stress");
    assert_eq!(stem("tired"), "tir");
    assert_eq!(stem("fever"), "fever");
}

#[test]
fn stop_words_are_dropped_and_order_preserved() {
    assert_eq!(normalize("I have a runny nose and sneezing"), ["runny", "nose", "sneez"]);
}

#[test]
fn normalize_empty_input_is_empty() {
    assert!(normalize("").is_empty());
}
