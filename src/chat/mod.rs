//! Responder facade tying the pipeline together.

pub mod classify;
pub mod compose;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::{
    config::Settings,
    data::{KnowledgeBase, KnowledgeError},
    nlp::{intents, symptoms},
    predict::{self, DiseasePrediction},
};

/// Composed reply plus the structured predictions for the caller to render.
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub text: String,
    pub conversation: classify::ConversationType,
    pub predictions: Vec<DiseasePrediction>,
}

/// One-time-built responder over the frozen knowledge base.
///
/// `respond` is a pure function of the message and the reference data,
/// safe to call concurrently once construction (including the pattern
/// augmentation pass) has finished.
#[derive(Debug, Clone)]
pub struct Responder {
    settings: Settings,
    kb: KnowledgeBase,
}

impl Responder {
    /// Build the knowledge base (running augmentation once) and freeze it.
    pub fn new(settings: Settings) -> Result<Self, KnowledgeError> {
        let kb = KnowledgeBase::build(&settings)?;
        Ok(Self { settings, kb })
    }

    /// Process one message end to end with thread-local randomness.
    pub fn respond(&self, message: &str) -> Reply {
        self.respond_with(message, &mut rand::thread_rng())
    }

    /// Process one message with caller-supplied randomness, used wherever
    /// template selection must be reproducible.
    pub fn respond_with<R: Rng>(&self, message: &str, rng: &mut R) -> Reply {
        let conversation = classify::classify(message);
        debug!(?conversation, "classified message");
        if conversation != classify::ConversationType::Symptom {
            return Reply {
                text: compose::compose(conversation, None, &[], &[], 0, rng),
                conversation,
                predictions: Vec::new(),
            };
        }

        let mentions = symptoms::extract_symptoms(&self.kb, &self.settings, message);
        let intent = intents::find_intent(&self.kb, &self.settings, message);
        let names: Vec<String> = mentions.iter().map(|m| m.symptom.clone()).collect();
        let predictions = predict::predict_disease(&self.kb, &names);

        let text = compose::compose(
            conversation,
            intent,
            &mentions,
            &predictions,
            self.settings.top_predictions,
            rng,
        );
        Reply {
            text,
            conversation,
            predictions,
        }
    }

    /// Read access to the frozen reference data.
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }
}
