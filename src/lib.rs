//! Rule-based symptom triage responder.
//!
//! The pipeline is fully deterministic heuristics over an immutable
//! knowledge base built once at startup: normalize text, match symptoms
//! by exact/alias/fuzzy lookup, classify conversational intent, rank
//! candidate conditions by symptom overlap, and compose a reply.

pub mod api;
pub mod chat;
pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod nlp;
pub mod predict;
