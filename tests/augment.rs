use rand::{rngs::StdRng, SeedableRng};
use symptom_scout::{
    config::Settings,
    data::{augment, vocabulary, KnowledgeBase},
};

#[test]
fn augmentation_only_appends_never_mutates_originals() {
    let mut rng = StdRng::seed_from_u64(11);
    let kb = KnowledgeBase::build_with_rng(&Settings::default(), &mut rng).unwrap();
    for (tag, patterns, _) in vocabulary::INTENTS {
        let intent = kb.intents().iter().find(|i| i.tag == *tag).unwrap();
        for pattern in *patterns {
            assert!(
                intent.patterns.iter().any(|p| p == pattern),
                "original pattern {pattern:?} missing from {tag:?}"
            );
        }
        assert!(intent.patterns.len() >= patterns.len());
    }
}

#[test]
fn seeded_builds_are_reproducible() {
    let settings = Settings::default();
    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);
    let kb_a = KnowledgeBase::build_with_rng(&settings, &mut rng_a).unwrap();
    let kb_b = KnowledgeBase::build_with_rng(&settings, &mut rng_b).unwrap();
    for (intent_a, intent_b) in kb_a.intents().iter().zip(kb_b.intents()) {
        assert_eq!(intent_a.patterns, intent_b.patterns);
    }
}

#[test]
fn augment_text_keeps_original_first_and_bounds_count() {
    let mut rng = StdRng::seed_from_u64(3);
    let variants = augment::augment_text("Throbbing headache", 2, &mut rng);
    assert_eq!(variants[0], "Throbbing headache");
    assert!(variants.len() <= 3);
}

#[test]
fn swap_is_a_no_op_below_three_words() {
    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(augment::swap_word_order("high fever", &mut rng), "high fever");
}

#[test]
fn insertion_adds_exactly_one_descriptor() {
    let mut rng = StdRng::seed_from_u64(9);
    let out = augment::random_insertion("stomach pain after eating", &mut rng);
    let words: Vec<&str> = out.split(' ').collect();
    assert_eq!(words.len(), 5);
    assert!(words
        .iter()
        .any(|word| vocabulary::DESCRIPTORS.contains(word)));
}

#[test]
fn synonym_pass_leaves_unknown_words_alone() {
    let mut rng = StdRng::seed_from_u64(13);
    assert_eq!(
        augment::replace_synonyms("wheezing at night", &mut rng),
        "wheezing at night"
    );
}
