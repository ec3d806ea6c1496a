use proptest::prelude::*;
use symptom_scout::nlp::distance::{levenshtein, similarity_ratio};

#[test]
fn both_empty_strings_are_identical() {
    assert_eq!(similarity_ratio("", ""), 1.0);
}

#[test]
fn known_distance_and_ratio() {
    assert_eq!(levenshtein("runy nose", "runny nose"), 1);
    let ratio = similarity_ratio("runy nose", "runny nose");
    assert!((ratio - 0.9).abs() < 1e-9);
}

#[test]
fn disjoint_strings_score_low() {
    assert!(similarity_ratio("wheezing", "xyzabc123") < 0.2);
}

proptest! {
    #[test]
    fn ratio_of_string_with_itself_is_one(s in ".*") {
        prop_assert_eq!(similarity_ratio(&s, &s), 1.0);
    }

    #[test]
    fn distance_is_symmetric(a in "[a-z ]{0,12}", b in "[a-z ]{0,12}") {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn ratio_stays_in_unit_interval(a in "[a-z ]{0,12}", b in "[a-z ]{0,12}") {
        let ratio = similarity_ratio(&a, &b);
        prop_assert!((0.0..=1.0).contains(&ratio));
    }
}
