//! Best-effort intent matching over the (augmented) example corpus.

use tracing::debug;

use crate::{
    config::Settings,
    data::{Intent, KnowledgeBase},
    nlp::{distance::similarity_ratio, normalize::normalize_joined},
};

/// Find the most relevant intent for a message, or `None` when nothing
/// clears the floor.
///
/// Each pattern is scored twice: lowercased raw strings, and the
/// normalized-token forms joined back into strings. Any single score
/// above the short-circuit threshold returns that intent immediately;
/// otherwise the best score seen wins if it exceeded the floor.
/// First-seen wins on exact score ties.
pub fn find_intent<'a>(
    kb: &'a KnowledgeBase,
    settings: &Settings,
    message: &str,
) -> Option<&'a Intent> {
    let lower = message.to_lowercase();
    let normalized = normalize_joined(message);

    let mut best: Option<(&Intent, f64)> = None;
    for intent in kb.intents() {
        for pattern in &intent.patterns {
            let raw_score = similarity_ratio(&lower, &pattern.to_lowercase());
            if raw_score > settings.intent_short_circuit {
                debug!(tag = %intent.tag, score = raw_score, "intent short-circuit");
                return Some(intent);
            }
            if best.map_or(true, |(_, score)| raw_score > score) {
                best = Some((intent, raw_score));
            }

            let norm_score = similarity_ratio(&normalized, &normalize_joined(pattern));
            if norm_score > settings.intent_short_circuit {
                debug!(tag = %intent.tag, score = norm_score, "intent short-circuit");
                return Some(intent);
            }
            if best.map_or(true, |(_, score)| norm_score > score) {
                best = Some((intent, norm_score));
            }
        }
    }

    match best {
        Some((intent, score)) if score > settings.intent_floor => {
            debug!(tag = %intent.tag, score, "intent matched");
            Some(intent)
        }
        _ => None,
    }
}
