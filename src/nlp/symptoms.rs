//! Symptom extraction: exact, alias, then fuzzy phrase matching against
//! the vocabulary. Intentionally permissive; the composed reply carries a
//! disclaimer rather than the extractor chasing precision.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use crate::{config::Settings, data::KnowledgeBase, nlp::distance::similarity_ratio};

/// A recognized symptom with heuristic confidence in `(0, 1]`.
#[derive(Debug, Clone, Serialize)]
pub struct SymptomMention {
    pub symptom: String,
    pub confidence: f64,
}

/// Scan a message for symptom mentions.
///
/// Per vocabulary symptom the first matching tier wins: exact substring
/// (1.0), alias substring (0.95), then sliding 1-3 token phrases scored
/// by similarity ratio against the canonical name, kept when strictly
/// above the fuzzy threshold. Result is deduplicated by symptom and
/// sorted descending by confidence.
pub fn extract_symptoms(
    kb: &KnowledgeBase,
    settings: &Settings,
    message: &str,
) -> Vec<SymptomMention> {
    let lower = message.to_lowercase();
    let phrases = candidate_phrases(&lower);

    let mut mentions: Vec<SymptomMention> = Vec::new();
    for symptom in kb.symptoms() {
        if lower.contains(symptom) {
            mentions.push(SymptomMention {
                symptom: symptom.to_string(),
                confidence: 1.0,
            });
            continue;
        }

        if kb
            .aliases_for(symptom)
            .iter()
            .any(|alias| lower.contains(alias.as_str()))
        {
            mentions.push(SymptomMention {
                symptom: symptom.to_string(),
                confidence: 0.95,
            });
            continue;
        }

        for phrase in &phrases {
            let similarity = similarity_ratio(phrase, symptom);
            if similarity > settings.fuzzy_threshold {
                mentions.push(SymptomMention {
                    symptom: symptom.to_string(),
                    confidence: similarity,
                });
                break;
            }
        }
    }

    mentions.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });
    dedup_by_symptom(&mut mentions);
    debug!(count = mentions.len(), "extracted symptom mentions");
    mentions
}

/// Sliding-window phrases of 1-3 tokens; tokens of length > 2 only.
fn candidate_phrases(lower: &str) -> Vec<String> {
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|word| word.len() > 2)
        .collect();
    let mut phrases = Vec::new();
    for i in 0..words.len() {
        phrases.push(words[i].to_string());
        if i + 1 < words.len() {
            phrases.push(format!("{} {}", words[i], words[i + 1]));
        }
        if i + 2 < words.len() {
            phrases.push(format!("{} {} {}", words[i], words[i + 1], words[i + 2]));
        }
    }
    phrases
}

/// Keep the first (highest-confidence after the sort) mention per symptom.
fn dedup_by_symptom(mentions: &mut Vec<SymptomMention>) {
    let mut seen = std::collections::HashSet::new();
    mentions.retain(|mention| seen.insert(mention.symptom.clone()));
}
