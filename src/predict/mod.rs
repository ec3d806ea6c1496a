//! Condition ranking by symptom-set overlap (Jaccard similarity).

use std::cmp::Ordering;

use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

use crate::data::KnowledgeBase;

/// Ranked condition guess with the overlapping symptoms as evidence.
/// `probability` is a set-overlap ratio, not a calibrated probability.
#[derive(Debug, Clone, Serialize)]
pub struct DiseasePrediction {
    pub disease: String,
    pub probability: f64,
    pub related_symptoms: Vec<String>,
}

/// Rank conditions against the recognized symptom names.
///
/// Probability is `|intersection| / |union|` of the user's symptom set and
/// the condition's symptom set. Conditions with zero overlap are dropped.
/// The sort is stable, so equal scores keep original condition order.
pub fn predict_disease(kb: &KnowledgeBase, symptoms: &[String]) -> Vec<DiseasePrediction> {
    if symptoms.is_empty() {
        return Vec::new();
    }

    // Repeated names must count once; the union arithmetic below assumes
    // a set on both sides.
    let symptoms: IndexSet<&str> = symptoms.iter().map(String::as_str).collect();

    let mut predictions: Vec<DiseasePrediction> = kb
        .conditions()
        .iter()
        .map(|condition| {
            let related: Vec<String> = symptoms
                .iter()
                .filter(|symptom| condition.symptoms.contains(**symptom))
                .map(|symptom| symptom.to_string())
                .collect();
            let union = symptoms.len() + condition.symptoms.len() - related.len();
            DiseasePrediction {
                disease: condition.name.clone(),
                probability: related.len() as f64 / union as f64,
                related_symptoms: related,
            }
        })
        .filter(|prediction| prediction.probability > 0.0)
        .collect();

    predictions.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
    });
    debug!(count = predictions.len(), "ranked condition predictions");
    predictions
}
