//! Error types for the Classifier
//!
//! These never cross `Classifier::classify`; they carry stage diagnostics
//! until they are folded into a failure record.

use thiserror::Error;

/// Errors that can occur while producing a classification record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    /// Input text was empty or whitespace-only
    #[error("Input text was empty")]
    EmptyText,

    /// Generation backend error
    #[error("Backend error: {0}")]
    Backend(String),

    /// Response is not strictly valid JSON
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Response is valid JSON but not a `{category, metadata}` object
    #[error("Unexpected response structure: {0}")]
    InvalidShape(String),

    /// No `{...}` span in the raw output
    #[error("No JSON object found in raw LLM output")]
    NoJsonObject,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ClassifierError {
    fn from(e: serde_json::Error) -> Self {
        ClassifierError::JsonParse(e.to_string())
    }
}
