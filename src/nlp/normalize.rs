//! Text normalization: lowercase, tokenize, stop-word filter, and a
//! rule-based suffix stemmer. Deliberately not a linguistic stemmer;
//! just enough to line up common phrasing variants.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("valid regex"));

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "and", "but", "or", "for", "nor", "on", "at", "to", "by", "with",
        "about", "in", "is", "am", "are", "was", "were", "be", "been", "being", "have", "has",
        "had", "do", "does", "did", "shall", "will", "should", "would", "may", "might", "must",
        "can", "could", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
        "them", "my", "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours",
        "theirs", "this", "that", "these", "those", "of", "from", "as", "so", "such", "get",
        "getting", "got", "having",
    ]
    .into_iter()
    .collect()
});

/// Split lowercased text on runs of non-word characters, dropping empties.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_SPLIT
        .split(&text.to_lowercase())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip a single common suffix. Rules are mutually exclusive and applied
/// first-match in this order; only one rule fires per token.
pub fn stem(word: &str) -> String {
    if let Some(base) = word.strip_suffix("ing") {
        return base.to_string();
    }
    if word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    if let Some(base) = word.strip_suffix("ed") {
        return base.to_string();
    }
    if let Some(base) = word.strip_suffix("es") {
        return base.to_string();
    }
    if let Some(base) = word.strip_suffix("ies") {
        return format!("{base}y");
    }
    if word.ends_with("aches") {
        return word[..word.len() - 2].to_string();
    }
    word.to_string()
}

/// Full preprocessing pipeline: lowercase, tokenize, drop stop words, stem.
/// Output order preserves input order.
pub fn normalize(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|token| !STOP_WORDS.contains(token.as_str()))
        .map(|token| stem(&token))
        .collect()
}

/// Normalized tokens joined back into a single comparison string.
pub fn normalize_joined(text: &str) -> String {
    normalize(text).join(" ")
}
