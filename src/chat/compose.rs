//! Reply assembly from classifier, intent, extraction, and ranking output.

use rand::Rng;

use crate::{
    chat::classify::ConversationType,
    data::{vocabulary, Intent},
    nlp::symptoms::SymptomMention,
    predict::DiseasePrediction,
};

const NO_SYMPTOMS_REPLY: &str = "I couldn't identify any specific symptoms in your message. \
     Could you please provide more details about how you're feeling?";

const GENERIC_REPLY: &str =
    "I'm here to help with your health questions. Is there something specific you'd like to know?";

const DISCLAIMER: &str = "Please note that this is not a medical diagnosis. If you're concerned \
     about your symptoms, please consult with a healthcare provider.";

/// Assemble the final reply text.
///
/// Priority order: non-symptom conversation buckets get a fixed template;
/// an empty extraction with no intent gets the "more detail" fallback;
/// otherwise the reply is built from the intent response and/or the
/// symptom list plus top-N predictions, always ending in the disclaimer.
pub fn compose<R: Rng>(
    conversation: ConversationType,
    intent: Option<&Intent>,
    mentions: &[SymptomMention],
    predictions: &[DiseasePrediction],
    top_n: usize,
    rng: &mut R,
) -> String {
    if conversation != ConversationType::Symptom {
        return pick_template(conversation, rng);
    }

    if mentions.is_empty() && intent.is_none() {
        return NO_SYMPTOMS_REPLY.to_string();
    }

    let mut reply = String::new();
    if let Some(intent) = intent {
        reply.push_str(&intent.responses[rng.gen_range(0..intent.responses.len())]);
        if !mentions.is_empty() {
            reply.push_str(&format!(
                " I've identified the following symptoms: {}.",
                symptom_list(mentions)
            ));
            if !predictions.is_empty() {
                reply.push_str(&format!(
                    " Based on these symptoms, you might be experiencing: {}.",
                    prediction_list(predictions, top_n)
                ));
            }
        }
    } else {
        reply.push_str(&format!(
            "I've identified the following symptoms: {}. ",
            symptom_list(mentions)
        ));
        if predictions.is_empty() {
            reply.push_str(
                "I couldn't find any specific conditions matching these symptoms in my database.",
            );
        } else {
            reply.push_str(&format!(
                "Based on these symptoms, you might be experiencing: {}.",
                prediction_list(predictions, top_n)
            ));
        }
    }

    reply.push(' ');
    reply.push_str(DISCLAIMER);
    reply
}

fn pick_template<R: Rng>(conversation: ConversationType, rng: &mut R) -> String {
    let templates = vocabulary::CONVERSATION_RESPONSES
        .iter()
        .find(|(kind, _)| *kind == conversation)
        .map(|(_, responses)| *responses)
        .unwrap_or(&[]);
    if templates.is_empty() {
        return GENERIC_REPLY.to_string();
    }
    templates[rng.gen_range(0..templates.len())].to_string()
}

fn symptom_list(mentions: &[SymptomMention]) -> String {
    mentions
        .iter()
        .map(|mention| mention.symptom.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn prediction_list(predictions: &[DiseasePrediction], top_n: usize) -> String {
    predictions
        .iter()
        .take(top_n)
        .map(|prediction| {
            let percent = (prediction.probability * 100.0).round() as i64;
            format!("{} ({percent}% match)", prediction.disease)
        })
        .collect::<Vec<_>>()
        .join(", ")
}
