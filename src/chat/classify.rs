//! Keyword-pattern conversation classification.
//!
//! Triggers are matched as case-insensitive substrings, not whole words,
//! so "hi" can fire inside longer words. Inherited over-matching; kept.

use serde::Serialize;

use crate::data::vocabulary;

/// Closed set of conversational buckets. `Symptom` is the fallback when
/// no trigger matches and hands the message to the medical pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationType {
    Greeting,
    SmallTalk,
    AboutBot,
    HowItWorks,
    Help,
    ThankYou,
    Exit,
    Symptom,
}

/// Bucket a message by the first trigger substring that matches, walking
/// categories in their fixed table order.
pub fn classify(message: &str) -> ConversationType {
    let lower = message.to_lowercase();
    for (kind, triggers) in vocabulary::CONVERSATION_TRIGGERS {
        if triggers.iter().any(|trigger| lower.contains(trigger)) {
            return *kind;
        }
    }
    ConversationType::Symptom
}
