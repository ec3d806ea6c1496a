use rand::{rngs::StdRng, SeedableRng};
use symptom_scout::{config::Settings, data::KnowledgeBase, predict::predict_disease};

fn knowledge() -> KnowledgeBase {
    let mut rng = StdRng::seed_from_u64(7);
    KnowledgeBase::build_with_rng(&Settings::default(), &mut rng).expect("valid reference data")
}

fn names(symptoms: &[&str]) -> Vec<String> {
    symptoms.iter().map(|s| s.to_string()).collect()
}

#[test]
fn no_symptoms_no_predictions() {
    let kb = knowledge();
    assert!(predict_disease(&kb, &[]).is_empty());
}

#[test]
fn probabilities_stay_in_unit_interval_and_sorted() {
    let kb = knowledge();
    let predictions = predict_disease(&kb, &names(&["fever", "cough", "headache", "nausea"]));
    assert!(!predictions.is_empty());
    for prediction in &predictions {
        assert!((0.0..=1.0).contains(&prediction.probability));
        assert!(!prediction.related_symptoms.is_empty());
    }
    assert!(predictions
        .windows(2)
        .all(|w| w[0].probability >= w[1].probability));
}

#[test]
fn cold_and_rhinitis_outrank_non_overlapping_conditions() {
    let kb = knowledge();
    let predictions = predict_disease(&kb, &names(&["runny nose", "sneezing"]));
    let labels: Vec<&str> = predictions.iter().map(|p| p.disease.as_str()).collect();
    assert!(labels.contains(&"Common Cold"));
    assert!(labels.contains(&"Allergic Rhinitis"));
    assert!(predictions.iter().all(|p| p.probability > 0.0));
    // Rhinitis has the smaller symptom set, so the same overlap ranks higher.
    assert_eq!(labels[0], "Allergic Rhinitis");
}

#[test]
fn adding_a_shared_symptom_never_lowers_the_score() {
    let kb = knowledge();
    let before = predict_disease(&kb, &names(&["cough"]));
    let after = predict_disease(&kb, &names(&["cough", "sore throat"]));
    let score = |preds: &[symptom_scout::predict::DiseasePrediction]| {
        preds
            .iter()
            .find(|p| p.disease == "Common Cold")
            .map(|p| p.probability)
            .unwrap_or(0.0)
    };
    assert!(score(&after) >= score(&before));
}

#[test]
fn duplicate_symptom_names_count_once() {
    let kb = knowledge();
    let unique = predict_disease(&kb, &names(&["runny nose", "sneezing"]));
    let repeated = predict_disease(
        &kb,
        &names(&["runny nose", "sneezing", "runny nose", "sneezing"]),
    );
    assert_eq!(unique.len(), repeated.len());
    for (a, b) in unique.iter().zip(&repeated) {
        assert_eq!(a.disease, b.disease);
        assert_eq!(a.probability, b.probability);
        assert_eq!(a.related_symptoms, b.related_symptoms);
    }
}

#[test]
fn related_symptoms_keep_user_order() {
    let kb = knowledge();
    let predictions = predict_disease(&kb, &names(&["sore throat", "cough"]));
    let cold = predictions
        .iter()
        .find(|p| p.disease == "Common Cold")
        .unwrap();
    assert_eq!(cold.related_symptoms, vec!["sore throat", "cough"]);
}
