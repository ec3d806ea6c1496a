//! Natural language processing layer: normalization, fuzzy distance,
//! symptom extraction, and intent matching.

pub mod distance;
pub mod intents;
pub mod normalize;
pub mod symptoms;
