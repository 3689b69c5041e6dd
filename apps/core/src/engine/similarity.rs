//! String similarity scoring primitives.
//!
//! Deliberately simple heuristics, tuned on real user phrasings rather than
//! derived from any principled string-distance algorithm: exact match,
//! substring containment, then whitespace-token overlap. The constants here
//! are part of the observable matching behavior and must not be retuned
//! casually.

/// Score for an exact (case-insensitive) match.
pub const EXACT_SCORE: f32 = 1.0;

/// Score when one string contains the other as a substring.
pub const CONTAINMENT_SCORE: f32 = 0.8;

/// Similarity between two strings in `[0.0, 1.0]`.
///
/// Both sides are lowercased before comparison. No stemming, no
/// locale-aware tokenization: accented forms only match themselves.
pub fn similarity(a: &str, b: &str) -> f32 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b {
        return EXACT_SCORE;
    }

    if contains_either(&a, &b) {
        return CONTAINMENT_SCORE;
    }

    token_overlap(&a, &b)
}

/// Substring containment in either direction.
pub fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Fraction of whitespace-split tokens shared between two strings.
///
/// A token counts as shared when it is a substring of any token on the other
/// side, or vice versa. The denominator is the larger token count, so longer
/// inputs are not rewarded for incidental overlap.
pub fn token_overlap(a: &str, b: &str) -> f32 {
    let tokens_a: Vec<&str> = a.split_whitespace().collect();
    let tokens_b: Vec<&str> = b.split_whitespace().collect();

    let longest = tokens_a.len().max(tokens_b.len());
    if longest == 0 {
        return 0.0;
    }

    let shared = tokens_a
        .iter()
        .filter(|ta| tokens_b.iter().any(|tb| tb.contains(*ta) || ta.contains(*tb)))
        .count();

    shared as f32 / longest as f32
}
