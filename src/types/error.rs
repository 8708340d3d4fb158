//! Unified error type for the crate.
//!
//! Two failure modes are terminal for a single extraction call:
//! an unknown language id and a source text the grammar cannot build a
//! clean tree for. Everything below that level (a node whose shape does not
//! match the profile) degrades a single field and is logged, never raised.

use thiserror::Error;

use crate::analyzer::Language;

#[derive(Debug, Error)]
pub enum LoomError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested language id has no registered profile. Never silently
    /// defaulted to another language.
    #[error("no profile registered for language '{0}'")]
    UnsupportedLanguage(String),

    /// The syntax tree could not be built. No partial result accompanies
    /// this error; the call is atomic.
    #[error("failed to parse {language} source: {message}")]
    Parse {
        language: Language,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, LoomError>;
