//! Error types for graph construction, lookups, and test-case input.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no such name in the graph: '{name}'")]
    NotFound { name: String },

    #[error("'{name}' cannot be paired with itself")]
    SelfPairing { name: String },

    // Test-case input errors
    #[error("missing the number of test cases")]
    MissingCaseCount,

    #[error("line {line}: expected a count, found '{text}'")]
    InvalidCount { line: usize, text: String },

    #[error("case {case}: missing the number of pairings")]
    MissingCase { case: usize },

    #[error("case {case}: expected {expected} pairings, found {found}")]
    MissingPairing {
        case: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: expected two names, found '{text}'")]
    MalformedPairing { line: usize, text: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn self_pairing(name: impl Into<String>) -> Self {
        Self::SelfPairing { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
