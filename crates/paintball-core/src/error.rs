//! Error types for the paintball engine.
//!
//! The taxonomy is narrow by design: only configuration-class failures are
//! fatal. Malformed input lines, lookup misses, and degraded nodes are
//! handled inline by the component that encounters them (logged and
//! skipped) and never surface as an `Err` here.

use thiserror::Error;

/// Result type alias for paintball operations.
pub type PaintballResult<T> = Result<T, PaintballError>;

/// Fatal errors that should be surfaced to the operator.
///
/// Non-fatal categories from the error taxonomy (malformed knowledge-source
/// lines, lemma/synset lookup misses, degraded nodes missing `lu`/`synset`
/// metadata) are not represented here — they are logged via `tracing` and
/// skipped at the point of occurrence, per policy.
#[derive(Error, Debug)]
pub enum PaintballError {
    /// Unreadable or malformed configuration, or a malformed data table
    /// (impedance CSV with missing cells, unsupported config extension).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O failure reading a data or config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure deserializing a JSON-backed graph or config document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PaintballError {
    /// Build a configuration error from any displayable message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_displays_message() {
        let err = PaintballError::config("impedance table malformed");
        assert_eq!(err.to_string(), "configuration error: impedance table malformed");
    }
}
