use std::io;
use thiserror::Error;

/// Engine-wide error type, consolidating all possible errors into a single enum.
///
/// Everything here is a startup/configuration failure: once a catalog has been
/// loaded and validated, the matching operations themselves never fail
/// ("no match" is a normal outcome, not an error).
#[derive(Debug, Error)]
pub enum EngineError {
    /// Represents a catalog that failed integrity validation
    /// (duplicate ids, empty keyword lists, empty responses).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Represents a catalog document that could not be parsed.
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Represents standard input/output errors when reading an external
    /// catalog file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
