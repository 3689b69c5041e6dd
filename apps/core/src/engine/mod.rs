//! # Response Engine
//!
//! Heuristic text-matching system for Amina. Maps a free-text utterance to
//! the best canned response in the topic catalog, without any model or
//! external service.
//!
//! ## Components
//! - `similarity`: string similarity primitives (exact / containment / token overlap)
//! - `matcher`: per-entry scoring and best-match selection
//! - `suggestions`: as-you-type and contextual follow-up questions
//! - `responder`: orchestrator producing complete replies
//!
//! Every operation is a pure function over (input, catalog): no session
//! state, no I/O, safe to call from concurrent callers.

pub mod matcher;
pub mod responder;
pub mod similarity;
pub mod suggestions;

pub use matcher::{MatchResult, ResponseMatcher, ACCEPT_THRESHOLD};
pub use responder::{ChatResponder, FALLBACK_RESPONSE};
pub use suggestions::{SuggestionEngine, MAX_SUGGESTIONS};
