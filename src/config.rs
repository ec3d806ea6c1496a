//! Runtime configuration utilities for symptom-scout.

use std::env;

use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Maximum number of condition predictions named in a composed reply.
    pub top_predictions: usize,
    /// Similarity ratio a fuzzy phrase match must strictly exceed.
    pub fuzzy_threshold: f64,
    /// Similarity ratio an intent pattern must strictly exceed to qualify.
    pub intent_floor: f64,
    /// Similarity ratio above which intent matching short-circuits.
    pub intent_short_circuit: f64,
    /// Augmented variants generated per original intent pattern.
    pub augment_variants: usize,
    /// Optional RNG seed for the load-time augmentation pass.
    pub augment_seed: Option<u64>,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let mut settings = Self::default();
        if let Some(v) = parse_env("TOP_PREDICTIONS") {
            settings.top_predictions = v;
        }
        if let Some(v) = parse_env("FUZZY_THRESHOLD") {
            settings.fuzzy_threshold = v;
        }
        if let Some(v) = parse_env("INTENT_FLOOR") {
            settings.intent_floor = v;
        }
        if let Some(v) = parse_env("INTENT_SHORT_CIRCUIT") {
            settings.intent_short_circuit = v;
        }
        if let Some(v) = parse_env("AUGMENT_VARIANTS") {
            settings.augment_variants = v;
        }
        settings.augment_seed = parse_env("AUGMENT_SEED");
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            top_predictions: 3,
            fuzzy_threshold: 0.8,
            intent_floor: 0.8,
            intent_short_circuit: 0.95,
            augment_variants: 2,
            augment_seed: None,
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
