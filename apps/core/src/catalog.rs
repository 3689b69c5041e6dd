//! Topic Catalog - the static canned-response database.
//!
//! The catalog is the only data the response engine ever consults: an ordered
//! list of topic entries, each carrying keywords, synonyms, a canned answer
//! and follow-up questions. It is loaded once, validated, and never mutated.
//! Declaration order matters: ties during matching are resolved in favor of
//! the earliest entry, so the order in the source document is part of the
//! observable behavior.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineError;

/// The catalog shipped with the application, embedded at compile time.
const EMBEDDED_CATALOG: &str = include_str!("data/catalog.json");

/// One static record in the canned-response catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicEntry {
    /// Unique identifier, stable across the catalog
    pub id: String,
    /// Short phrases/words associated with the topic (case-insensitive)
    pub keywords: Vec<String>,
    /// Alternate phrasings for the same topic
    pub synonyms: Vec<String>,
    /// Canned answer returned verbatim when this entry matches
    pub response: String,
    /// Follow-up questions surfaced as suggestions after this entry is chosen
    pub related_questions: Vec<String>,
    /// Coarse topic grouping, used only for fallback suggestion selection
    pub category: String,
}

/// Immutable, validated topic catalog.
///
/// Cheap to clone: the entry list is behind an `Arc`, so the matcher and the
/// suggestion engine can share one catalog without coordination.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Arc<Vec<TopicEntry>>,
}

impl Catalog {
    /// Load the catalog embedded in the binary.
    pub fn embedded() -> Result<Self, EngineError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Parse and validate a catalog from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let entries: Vec<TopicEntry> = serde_json::from_str(json)?;
        Self::validate(&entries)?;
        debug!(entries = entries.len(), "catalog loaded");
        Ok(Self {
            entries: Arc::new(entries),
        })
    }

    /// Load a catalog from an external JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn validate(entries: &[TopicEntry]) -> Result<(), EngineError> {
        if entries.is_empty() {
            return Err(EngineError::Catalog("catalog is empty".to_string()));
        }

        for (index, entry) in entries.iter().enumerate() {
            if entry.id.is_empty() {
                return Err(EngineError::Catalog(format!("entry #{} has no id", index)));
            }
            if entries[..index].iter().any(|e| e.id == entry.id) {
                return Err(EngineError::Catalog(format!("duplicate id '{}'", entry.id)));
            }
            if entry.keywords.is_empty() {
                return Err(EngineError::Catalog(format!(
                    "entry '{}' has no keywords",
                    entry.id
                )));
            }
            if entry.response.is_empty() {
                return Err(EngineError::Catalog(format!(
                    "entry '{}' has an empty response",
                    entry.id
                )));
            }
            if entry.related_questions.is_empty() {
                return Err(EngineError::Catalog(format!(
                    "entry '{}' has no related questions",
                    entry.id
                )));
            }
        }

        Ok(())
    }

    /// All entries, in declaration order.
    pub fn entries(&self) -> &[TopicEntry] {
        &self.entries
    }

    /// Number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty (never true after validation).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by id.
    pub fn entry(&self, id: &str) -> Option<&TopicEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Find the entry whose response text matches exactly.
    pub fn by_response(&self, response: &str) -> Option<&TopicEntry> {
        self.entries.iter().find(|e| e.response == response)
    }

    /// Entries belonging to a category, in declaration order.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a TopicEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().expect("embedded catalog must be valid");

        assert!(!catalog.is_empty());
        assert!(catalog.entry("greeting").is_some());
        assert!(catalog.entry("test_general").is_some());
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let result = Catalog::from_json("[]");
        assert!(matches!(result, Err(EngineError::Catalog(_))));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"[
            {"id": "a", "keywords": ["x"], "synonyms": [], "response": "r",
             "related_questions": ["q"], "category": "c"},
            {"id": "a", "keywords": ["y"], "synonyms": [], "response": "r2",
             "related_questions": ["q2"], "category": "c"}
        ]"#;

        let result = Catalog::from_json(json);
        assert!(matches!(result, Err(EngineError::Catalog(_))));
    }

    #[test]
    fn test_rejects_entry_without_keywords() {
        let json = r#"[
            {"id": "a", "keywords": [], "synonyms": [], "response": "r",
             "related_questions": ["q"], "category": "c"}
        ]"#;

        let result = Catalog::from_json(json);
        assert!(matches!(result, Err(EngineError::Catalog(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = Catalog::from_json("not json");
        assert!(matches!(result, Err(EngineError::Parse(_))));
    }

    #[test]
    fn test_category_lookup_preserves_order() {
        let catalog = Catalog::embedded().expect("embedded catalog must be valid");

        let testing: Vec<&str> = catalog
            .in_category("testing")
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(testing, vec!["test_general", "test_rapide", "test_elisa"]);
    }

    #[test]
    fn test_by_response_finds_entry() {
        let catalog = Catalog::embedded().expect("embedded catalog must be valid");

        let entry = catalog.entry("prep").expect("prep entry exists");
        let found = catalog.by_response(&entry.response).expect("lookup by response");
        assert_eq!(found.id, "prep");
    }
}
