//! HTTP route handlers for Axum.

use axum::{extract::State, Json};
use chrono::Utc;
use tracing::info;

use crate::api::types::{ConditionDto, RespondDto, RespondRequest};

use super::AppState;

pub async fn respond(
    State(state): State<AppState>,
    Json(request): Json<RespondRequest>,
) -> Json<RespondDto> {
    let reply = state.responder.respond(&request.message);
    info!(
        chars = request.message.chars().count(),
        predictions = reply.predictions.len(),
        "handled respond request"
    );
    Json(RespondDto {
        text: reply.text,
        conversation: reply.conversation,
        predictions: reply.predictions,
        responded_at: Utc::now(),
    })
}

pub async fn list_conditions(State(state): State<AppState>) -> Json<Vec<ConditionDto>> {
    let conditions = state
        .responder
        .knowledge()
        .conditions()
        .iter()
        .map(|condition| ConditionDto {
            name: condition.name.clone(),
            symptoms: condition.symptoms.iter().cloned().collect(),
        })
        .collect();
    Json(conditions)
}
