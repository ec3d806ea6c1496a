//! Immutable reference data: the symptom vocabulary, alias table,
//! condition-symptom sets, and the (augmented) intent corpus.
//!
//! Built once at startup and frozen; every per-message call reads it by
//! shared reference, so concurrent callers need no locking.

pub mod augment;
pub mod vocabulary;

use std::collections::HashMap;

use indexmap::IndexSet;
use rand::{rngs::StdRng, Rng, SeedableRng};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Settings;

/// Condition label plus its fixed symptom set. Set iteration keeps seed
/// order so ranking ties break on original table order.
#[derive(Debug, Clone)]
pub struct Condition {
    pub name: String,
    pub symptoms: IndexSet<String>,
}

/// Labeled example-phrase cluster with candidate responses.
#[derive(Debug, Clone)]
pub struct Intent {
    pub tag: String,
    pub patterns: Vec<String>,
    pub responses: Vec<String>,
}

/// Reference-data validation failures surfaced at startup.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("condition table is empty")]
    NoConditions,
    #[error("intent corpus is empty")]
    NoIntents,
}

/// Frozen runtime view over the embedded vocabulary tables.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    conditions: Vec<Condition>,
    symptoms: IndexSet<String>,
    aliases: HashMap<String, Vec<String>>,
    intents: Vec<Intent>,
}

impl KnowledgeBase {
    /// Build the knowledge base, running the one-time augmentation pass
    /// with a seeded RNG when `Settings::augment_seed` is set.
    pub fn build(settings: &Settings) -> Result<Self, KnowledgeError> {
        let mut rng = match settings.augment_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::build_with_rng(settings, &mut rng)
    }

    /// Build with caller-supplied randomness for deterministic tests.
    pub fn build_with_rng<R: Rng>(
        settings: &Settings,
        rng: &mut R,
    ) -> Result<Self, KnowledgeError> {
        let conditions: Vec<Condition> = vocabulary::CONDITIONS
            .iter()
            .map(|(name, symptoms)| Condition {
                name: name.to_string(),
                symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            })
            .collect();
        if conditions.is_empty() {
            return Err(KnowledgeError::NoConditions);
        }

        let mut symptoms = IndexSet::new();
        for condition in &conditions {
            symptoms.extend(condition.symptoms.iter().cloned());
        }

        let mut aliases = HashMap::new();
        for (canonical, entries) in vocabulary::SYMPTOM_ALIASES {
            if !symptoms.contains(*canonical) {
                // Entry can never match a vocabulary symptom; treated as
                // "no aliases", not an error.
                warn!(symptom = *canonical, "alias entry for unknown symptom dropped");
                continue;
            }
            aliases.insert(
                canonical.to_string(),
                entries.iter().map(|a| a.to_string()).collect(),
            );
        }

        let mut intents: Vec<Intent> = vocabulary::INTENTS
            .iter()
            .map(|(tag, patterns, responses)| Intent {
                tag: tag.to_string(),
                patterns: patterns.iter().map(|p| p.to_string()).collect(),
                responses: responses.iter().map(|r| r.to_string()).collect(),
            })
            .collect();
        if intents.is_empty() {
            return Err(KnowledgeError::NoIntents);
        }
        augment::enhance_patterns(&mut intents, settings.augment_variants, rng);

        let pattern_count: usize = intents.iter().map(|i| i.patterns.len()).sum();
        info!(
            conditions = conditions.len(),
            symptoms = symptoms.len(),
            intents = intents.len(),
            patterns = pattern_count,
            "knowledge base ready"
        );

        Ok(Self {
            conditions,
            symptoms,
            aliases,
            intents,
        })
    }

    /// All conditions in original table order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Full symptom vocabulary, first-seen order.
    pub fn symptoms(&self) -> impl Iterator<Item = &str> {
        self.symptoms.iter().map(String::as_str)
    }

    /// Registered aliases for a canonical symptom; missing entries mean
    /// "no aliases", never an error.
    pub fn aliases_for(&self, symptom: &str) -> &[String] {
        self.aliases.get(symptom).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Intent corpus including load-time-augmented patterns.
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }
}
