//! Suggestion Engine - as-you-type and contextual follow-up questions.
//!
//! Two independent lookups over the same catalog:
//! - `for_input`: real-time suggestions while the user is still typing;
//! - `contextual`: follow-up questions after a bot answer, derived from the
//!   answered entry, the current category, or a fixed general list.

use crate::catalog::Catalog;

/// Maximum number of suggestions ever surfaced at once.
pub const MAX_SUGGESTIONS: usize = 4;

/// Inputs shorter than this (in characters, after trimming) produce no
/// real-time suggestions.
const MIN_INPUT_CHARS: usize = 2;

/// General-purpose suggestions used as the default list and as padding.
/// The first [`MAX_SUGGESTIONS`] entries are the fixed default set.
const GENERAL_SUGGESTIONS: [&str; 8] = [
    "Où faire un test de dépistage ?",
    "Le dépistage est-il gratuit ?",
    "Quels sont les symptômes du VIH ?",
    "Comment se protéger du VIH ?",
    "Combien de temps pour avoir les résultats ?",
    "Le test est-il confidentiel ?",
    "Qu'est-ce que la PrEP ?",
    "VIH et grossesse",
];

/// Produces suggestion lists from an immutable topic catalog.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    catalog: Catalog,
}

impl SuggestionEngine {
    /// Create a suggestion engine over a validated catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The fixed default suggestion list.
    pub fn defaults() -> Vec<String> {
        GENERAL_SUGGESTIONS[..MAX_SUGGESTIONS]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Real-time suggestions for a partial input.
    ///
    /// For each catalog entry in order: a keyword or synonym containing the
    /// input emits that entry's first related question; a related question
    /// containing the input is emitted directly. Deduplicated, first
    /// [`MAX_SUGGESTIONS`] kept. No ranking beyond first-found order.
    pub fn for_input(&self, input: &str) -> Vec<String> {
        let input = input.trim().to_lowercase();
        if input.chars().count() < MIN_INPUT_CHARS {
            return Vec::new();
        }

        let mut suggestions: Vec<String> = Vec::new();

        for entry in self.catalog.entries() {
            let term_hit = entry
                .keywords
                .iter()
                .chain(&entry.synonyms)
                .any(|term| term.to_lowercase().contains(&input));

            if term_hit {
                if let Some(question) = entry.related_questions.first() {
                    push_unique(&mut suggestions, question);
                }
            }

            for question in &entry.related_questions {
                if question.to_lowercase().contains(&input) {
                    push_unique(&mut suggestions, question);
                }
            }
        }

        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }

    /// Follow-up suggestions after a bot answer.
    ///
    /// When `last_response` is the verbatim response of a catalog entry, that
    /// entry's related questions are returned as-is. Otherwise one related
    /// question is taken from each entry of `category` (in catalog order) and
    /// the list is padded from [`GENERAL_SUGGESTIONS`] up to
    /// [`MAX_SUGGESTIONS`]. With neither, the fixed default list is returned.
    pub fn contextual(&self, last_response: &str, category: Option<&str>) -> Vec<String> {
        if let Some(entry) = self.catalog.by_response(last_response) {
            return entry.related_questions.clone();
        }

        let mut suggestions: Vec<String> = Vec::new();

        if let Some(category) = category {
            for entry in self.catalog.in_category(category) {
                if suggestions.len() >= MAX_SUGGESTIONS {
                    break;
                }
                if let Some(question) = entry.related_questions.first() {
                    push_unique(&mut suggestions, question);
                }
            }
        }

        for general in GENERAL_SUGGESTIONS {
            if suggestions.len() >= MAX_SUGGESTIONS {
                break;
            }
            push_unique(&mut suggestions, general);
        }

        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}

fn push_unique(suggestions: &mut Vec<String>, candidate: &str) {
    if !suggestions.iter().any(|s| s == candidate) {
        suggestions.push(candidate.to_string());
    }
}
