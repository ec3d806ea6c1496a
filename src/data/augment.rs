//! Load-time pattern augmentation.
//!
//! Enlarges the intent match surface by appending randomized variants of
//! each seed pattern. Runs once while the knowledge base is built; the
//! corpus is frozen afterwards. Unseeded runs produce different corpora
//! between processes, which the approximate matcher tolerates.

use rand::Rng;

use crate::data::{vocabulary, Intent};

/// Replace words with a random synonym, 30% chance per word where a
/// synonym entry exists.
pub fn replace_synonyms<R: Rng>(text: &str, rng: &mut R) -> String {
    text.split(' ')
        .map(|word| {
            let entry = vocabulary::SYNONYMS
                .iter()
                .find(|(key, _)| *key == word)
                .map(|(_, synonyms)| *synonyms);
            match entry {
                Some(synonyms) if rng.gen_bool(0.3) => {
                    synonyms[rng.gen_range(0..synonyms.len())].to_string()
                }
                _ => word.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Swap two distinct random word positions. No-op below three words.
pub fn swap_word_order<R: Rng>(text: &str, rng: &mut R) -> String {
    let mut words: Vec<&str> = text.split(' ').collect();
    if words.len() < 3 {
        return text.to_string();
    }
    let pos1 = rng.gen_range(0..words.len());
    let mut pos2 = rng.gen_range(0..words.len());
    while pos2 == pos1 {
        pos2 = rng.gen_range(0..words.len());
    }
    words.swap(pos1, pos2);
    words.join(" ")
}

/// Insert a random severity/duration descriptor at a random position.
pub fn random_insertion<R: Rng>(text: &str, rng: &mut R) -> String {
    let mut words: Vec<&str> = text.split(' ').collect();
    let position = rng.gen_range(0..=words.len());
    let descriptor = vocabulary::DESCRIPTORS[rng.gen_range(0..vocabulary::DESCRIPTORS.len())];
    words.insert(position, descriptor);
    words.join(" ")
}

/// Generate up to `count` augmented variations of `text`, original first.
/// Duplicates are dropped, so fewer than `count` variants may come back.
pub fn augment_text<R: Rng>(text: &str, count: usize, rng: &mut R) -> Vec<String> {
    let mut variations = vec![text.to_string()];
    for _ in 0..count {
        let variant = match rng.gen_range(0..3) {
            0 => replace_synonyms(text, rng),
            1 => swap_word_order(text, rng),
            _ => random_insertion(text, rng),
        };
        if !variations.contains(&variant) {
            variations.push(variant);
        }
    }
    variations
}

/// Append augmented variants to every intent's pattern list. Originals are
/// never removed or mutated; only unseen variants are appended.
pub fn enhance_patterns<R: Rng>(intents: &mut [Intent], variants: usize, rng: &mut R) {
    for intent in intents.iter_mut() {
        let originals = intent.patterns.clone();
        for pattern in &originals {
            for variant in augment_text(pattern, variants, rng) {
                if !intent.patterns.contains(&variant) {
                    intent.patterns.push(variant);
                }
            }
        }
    }
}
