//! Chat Responder - orchestrates matching and suggestions into one reply.
//!
//! This is the whole in-process surface the conversation layer consumes:
//! given an utterance, produce the canned answer (or the fallback) together
//! with the follow-up questions for the next turn.

use tracing::debug;

use super::matcher::ResponseMatcher;
use super::suggestions::SuggestionEngine;
use crate::catalog::Catalog;
use crate::models::BotReply;

/// Fixed answer returned when no catalog entry clears the threshold.
pub const FALLBACK_RESPONSE: &str = "Je suis désolé, je n'ai pas bien compris votre question. \
    Pourriez-vous reformuler ou choisir l'une des questions fréquentes ci-dessous ? \
    Je suis là pour vous aider avec toutes vos questions sur le VIH au Niger.";

/// Produces complete bot replies from free-text input.
#[derive(Debug, Clone)]
pub struct ChatResponder {
    matcher: ResponseMatcher,
    suggestions: SuggestionEngine,
}

impl ChatResponder {
    /// Create a responder over a validated catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            matcher: ResponseMatcher::new(catalog.clone()),
            suggestions: SuggestionEngine::new(catalog),
        }
    }

    /// Build the reply for one user utterance.
    ///
    /// Never fails: when nothing matches, the fallback answer is returned
    /// with the default suggestion list.
    pub fn reply(&self, input: &str) -> BotReply {
        match self.matcher.find_best_match(input) {
            Some(result) => BotReply {
                response: result.entry.response.clone(),
                category: Some(result.entry.category.clone()),
                related_questions: result.entry.related_questions.clone(),
            },
            None => {
                debug!("falling back to default response");
                BotReply {
                    response: FALLBACK_RESPONSE.to_string(),
                    category: None,
                    related_questions: SuggestionEngine::defaults(),
                }
            }
        }
    }

    /// As-you-type suggestions for a partial input.
    pub fn typing_suggestions(&self, partial: &str) -> Vec<String> {
        self.suggestions.for_input(partial)
    }

    /// Follow-up suggestions based on the last bot answer and category.
    pub fn follow_ups(&self, last_response: &str, category: Option<&str>) -> Vec<String> {
        self.suggestions.contextual(last_response, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responder() -> ChatResponder {
        ChatResponder::new(Catalog::embedded().expect("embedded catalog must be valid"))
    }

    #[test]
    fn test_matched_reply_carries_entry_fields() {
        let responder = responder();

        let reply = responder.reply("bonjour");
        assert!(reply.response.contains("Amina"));
        assert_eq!(reply.category.as_deref(), Some("greeting"));
        assert_eq!(reply.related_questions.len(), 4);
    }

    #[test]
    fn test_unmatched_reply_uses_fallback() {
        let responder = responder();

        let reply = responder.reply("qsdfghjklm");
        assert_eq!(reply.response, FALLBACK_RESPONSE);
        assert_eq!(reply.category, None);
        assert_eq!(reply.related_questions, SuggestionEngine::defaults());
    }

    #[test]
    fn test_empty_input_uses_fallback() {
        let responder = responder();

        let reply = responder.reply("   ");
        assert_eq!(reply.response, FALLBACK_RESPONSE);
    }

    #[test]
    fn test_follow_ups_delegate_to_suggestions() {
        let responder = responder();

        let reply = responder.reply("prep");
        let follow_ups = responder.follow_ups(&reply.response, reply.category.as_deref());
        assert_eq!(follow_ups, reply.related_questions);
    }
}
