//! # Amina Core
//!
//! Response engine for Amina, the virtual assistant answering HIV questions
//! for Niger. Matches free-text user input against a fixed catalog of canned
//! responses using lightweight string heuristics - no model, no network, no
//! persistence.
//!
//! The crate exposes three in-process operations, all pure over the catalog:
//! - best-match lookup ([`engine::ResponseMatcher`])
//! - as-you-type suggestions ([`engine::SuggestionEngine`])
//! - contextual follow-up questions ([`engine::SuggestionEngine`])
//!
//! [`session::ChatSession`] layers conversation history on top for callers
//! that want a ready-made chat loop.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod models;
pub mod session;

pub use catalog::{Catalog, TopicEntry};
pub use engine::{ChatResponder, MatchResult, ResponseMatcher, SuggestionEngine};
pub use error::EngineError;
pub use models::{BotReply, ChatMessage, Sender};
pub use session::ChatSession;

#[cfg(test)]
mod tests;
