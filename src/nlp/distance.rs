//! Edit-distance metric shared by symptom and intent matching.

/// Classic Levenshtein distance with unit insert/delete/substitute costs.
pub fn levenshtein(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Similarity ratio in `[0, 1]` derived from edit distance.
///
/// Defined as `1 - distance / max(len(a), len(b))` over character counts,
/// and 1 when both strings are empty.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}
