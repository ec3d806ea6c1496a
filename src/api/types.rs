//! Shared DTOs for JSON requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{chat::classify::ConversationType, predict::DiseasePrediction};

#[derive(Debug, Clone, Deserialize)]
pub struct RespondRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RespondDto {
    pub text: String,
    pub conversation: ConversationType,
    pub predictions: Vec<DiseasePrediction>,
    pub responded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConditionDto {
    pub name: String,
    pub symptoms: Vec<String>,
}
