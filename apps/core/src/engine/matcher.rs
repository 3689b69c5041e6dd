//! Response Matcher - maps a free-text utterance to the best catalog entry.
//!
//! Scoring per entry is the maximum of the similarity against every keyword,
//! synonym and related-question text, plus a bonus when several input words
//! independently hit the entry's vocabulary. An entry only wins if its score
//! strictly exceeds the acceptance threshold; ties keep the earliest entry.

use tracing::debug;

use super::similarity::{contains_either, similarity};
use crate::catalog::{Catalog, TopicEntry};

/// Minimum score an entry must strictly exceed to be accepted.
pub const ACCEPT_THRESHOLD: f32 = 0.3;

/// Floor applied when the input and a keyword contain each other.
const KEYWORD_CONTAINMENT_FLOOR: f32 = 0.7;

/// Floor applied when the input and a synonym contain each other.
const SYNONYM_CONTAINMENT_FLOOR: f32 = 0.6;

/// Bonus added per matching input word when more than one word matches.
const MULTI_WORD_BONUS: f32 = 0.1;

/// Input words this short never count toward the multi-word bonus.
const MIN_BONUS_WORD_CHARS: usize = 3;

/// The chosen entry for one query, with the score that selected it.
///
/// Ephemeral: produced per query and discarded after rendering.
#[derive(Debug, Clone, Copy)]
pub struct MatchResult<'a> {
    pub entry: &'a TopicEntry,
    pub score: f32,
}

/// Scores free-text input against an immutable topic catalog.
#[derive(Debug, Clone)]
pub struct ResponseMatcher {
    catalog: Catalog,
}

impl ResponseMatcher {
    /// Create a matcher over a validated catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Find the best-matching entry for a user utterance.
    ///
    /// Returns `None` when no entry's score clears [`ACCEPT_THRESHOLD`]:
    /// a normal outcome, mapped to the fallback response by the caller.
    /// Empty and whitespace-only input short-circuits to `None`: the empty
    /// string is a substring of everything, so letting it reach the
    /// containment checks would match the first catalog entry.
    pub fn find_best_match(&self, input: &str) -> Option<MatchResult<'_>> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return None;
        }

        let mut best: Option<MatchResult<'_>> = None;

        for entry in self.catalog.entries() {
            let score = self.score_entry(&input, entry);

            // Strict comparison on both counts: later entries must beat the
            // current best, so catalog order breaks ties.
            if score > ACCEPT_THRESHOLD && best.map_or(true, |b| score > b.score) {
                best = Some(MatchResult { entry, score });
            }
        }

        if let Some(result) = best {
            debug!(id = %result.entry.id, score = result.score, "matched catalog entry");
        } else {
            debug!(input = %input, "no catalog entry above threshold");
        }

        best
    }

    /// Compute the score of one entry against normalized input.
    fn score_entry(&self, input: &str, entry: &TopicEntry) -> f32 {
        let mut score: f32 = 0.0;

        for keyword in &entry.keywords {
            score = score.max(similarity(input, keyword));
            if contains_either(input, &keyword.to_lowercase()) {
                score = score.max(KEYWORD_CONTAINMENT_FLOOR);
            }
        }

        for synonym in &entry.synonyms {
            score = score.max(similarity(input, synonym));
            if contains_either(input, &synonym.to_lowercase()) {
                score = score.max(SYNONYM_CONTAINMENT_FLOOR);
            }
        }

        // Related-question texts are an additional score source with no
        // extra weight or containment floor.
        for question in &entry.related_questions {
            score = score.max(similarity(input, question));
        }

        score + self.multi_word_bonus(input, entry)
    }

    /// Bonus for inputs where several words independently hit the entry's
    /// combined keyword+synonym vocabulary. Uncapped: each matching word
    /// past the first pair keeps adding [`MULTI_WORD_BONUS`].
    fn multi_word_bonus(&self, input: &str, entry: &TopicEntry) -> f32 {
        let vocabulary: Vec<String> = entry
            .keywords
            .iter()
            .chain(&entry.synonyms)
            .flat_map(|term| term.split_whitespace())
            .map(str::to_lowercase)
            .collect();

        let word_matches = input
            .split_whitespace()
            .filter(|word| {
                word.chars().count() >= MIN_BONUS_WORD_CHARS
                    && vocabulary
                        .iter()
                        .any(|term| term.contains(*word) || word.contains(term.as_str()))
            })
            .count();

        if word_matches > 1 {
            word_matches as f32 * MULTI_WORD_BONUS
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> ResponseMatcher {
        ResponseMatcher::new(Catalog::embedded().expect("embedded catalog must be valid"))
    }

    #[test]
    fn test_exact_keyword_wins_over_containment() {
        let matcher = matcher();

        // "test" is an exact keyword of test_general (1.0); test_rapide and
        // test_elisa only reach it through containment (0.8).
        let result = matcher.find_best_match("test").expect("should match");
        assert_eq!(result.entry.id, "test_general");
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_multi_word_bonus_changes_winner() {
        let matcher = matcher();

        // test_rapide gets containment (0.8) plus a two-word bonus for
        // "test" and "rapide" (0.2); centres_niamey stays at 0.8.
        let result = matcher
            .find_best_match("Où faire un test rapide à Niamey")
            .expect("should match");
        assert_eq!(result.entry.id, "test_rapide");
        assert!(result.score > 0.9);
    }

    #[test]
    fn test_empty_input_never_matches() {
        let matcher = matcher();

        assert!(matcher.find_best_match("").is_none());
        assert!(matcher.find_best_match("   ").is_none());
        assert!(matcher.find_best_match("\t\n").is_none());
    }

    #[test]
    fn test_gibberish_falls_below_threshold() {
        let matcher = matcher();

        assert!(matcher.find_best_match("xyzzyqwtk").is_none());
    }

    #[test]
    fn test_input_is_normalized() {
        let matcher = matcher();

        let result = matcher.find_best_match("  GRATUIT  ").expect("should match");
        assert_eq!(result.entry.id, "cout_gratuite");
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_shared_keyword_goes_to_earlier_entry() {
        let matcher = matcher();

        // "protection" is listed by both prevention_generale and
        // preservatifs; strict score comparison keeps the earlier entry.
        let result = matcher.find_best_match("protection").expect("should match");
        assert_eq!(result.entry.id, "prevention_generale");

        // Same for "aide", shared between urgence and soutien.
        let result = matcher.find_best_match("aide").expect("should match");
        assert_eq!(result.entry.id, "urgence");
    }

    #[test]
    fn test_synonym_matches() {
        let matcher = matcher();

        let result = matcher.find_best_match("sérologie").expect("should match");
        assert_eq!(result.entry.id, "test_elisa");
    }

    #[test]
    fn test_related_question_text_matches() {
        let matcher = matcher();

        // Phrase lifted from test_general's related questions.
        let result = matcher
            .find_best_match("Où faire un test à Niamey ?")
            .expect("should match");
        assert!(result.score > ACCEPT_THRESHOLD);
    }
}
