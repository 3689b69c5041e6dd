//! Chat Session - in-memory conversation state for one user.
//!
//! The engine itself is stateless; this layer is what remembers the
//! conversation. It keeps the message history for display, and carries the
//! last answer's suggestions and category into the next turn.

use tracing::info;

use crate::engine::ChatResponder;
use crate::models::{ChatMessage, Sender};

/// Opening message shown before the user says anything.
pub const WELCOME_MESSAGE: &str = "Bonjour ! Je suis Amina, votre assistante virtuelle \
    spécialisée dans les questions sur le VIH au Niger. \
    Comment puis-je vous aider aujourd'hui ? 🌟";

/// One conversation with Amina.
pub struct ChatSession {
    responder: ChatResponder,
    messages: Vec<ChatMessage>,
    suggestions: Vec<String>,
    last_category: Option<String>,
}

impl ChatSession {
    /// Open a session: history starts with the welcome message and the
    /// default suggestion set.
    pub fn new(responder: ChatResponder) -> Self {
        let suggestions = responder.follow_ups(WELCOME_MESSAGE, None);
        Self {
            responder,
            messages: vec![ChatMessage::bot(WELCOME_MESSAGE)],
            suggestions,
            last_category: None,
        }
    }

    /// Send a user message and record the bot's answer.
    ///
    /// Blank input is ignored and produces no turn at all. Returns the bot
    /// message appended to the history.
    pub fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::user(text));

        let reply = self.responder.reply(text);
        info!(
            category = reply.category.as_deref().unwrap_or("none"),
            "bot reply generated"
        );

        self.suggestions = if reply.related_questions.is_empty() {
            self.responder
                .follow_ups(&reply.response, reply.category.as_deref())
        } else {
            reply.related_questions.clone()
        };
        self.last_category = reply.category.clone();

        self.messages.push(ChatMessage::bot(reply.response));
        self.messages.last().filter(|m| m.sender == Sender::Bot)
    }

    /// As-you-type suggestions for the current partial input.
    pub fn typing_suggestions(&self, partial: &str) -> Vec<String> {
        self.responder.typing_suggestions(partial)
    }

    /// Suggested questions for the next turn.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Category of the last matched answer, if any.
    pub fn last_category(&self) -> Option<&str> {
        self.last_category.as_deref()
    }

    /// Full conversation history, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}
