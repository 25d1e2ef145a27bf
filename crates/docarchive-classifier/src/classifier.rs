//! Core Classifier implementation

use crate::config::ClassifierConfig;
use crate::error::ClassifierError;
use crate::parser::{extract_record, parse_structured_response};
use crate::prompt::PromptBuilder;
use crate::types::ClassificationRequest;
use docarchive_domain::{
    ClassificationRecord, FailureKind, GenerationBackend, Metadata, ResponseMode,
};
use serde_json::Value;
use std::fmt::Display;
use tracing::{debug, info, warn};

const SEVERE_ERROR_SUMMARY: &str = "Failed to fetch raw output from LLM.";
const PARSING_FAILURE_SUMMARY: &str =
    "Could not parse LLM response as JSON despite multiple attempts.";

/// The Classifier turns document text into a `{category, metadata}` record
///
/// `classify` is total: every outcome, including backend and parse failures,
/// is a [`ClassificationRecord`]. Failures carry a sentinel category (see
/// [`FailureKind`]). At most two backend calls are made per document.
pub struct Classifier<B>
where
    B: GenerationBackend,
{
    backend: B,
    config: ClassifierConfig,
    system_prompt: String,
}

impl<B> Classifier<B>
where
    B: GenerationBackend,
    B::Error: Display,
{
    /// Create a new Classifier
    pub fn new(backend: B, config: ClassifierConfig) -> Self {
        let system_prompt =
            PromptBuilder::new(config.suggested_categories.clone()).build_system_prompt();
        Self {
            backend,
            config,
            system_prompt,
        }
    }

    /// Create a Classifier with the default configuration
    pub fn default_config(backend: B) -> Self {
        Self::new(backend, ClassifierConfig::default())
    }

    /// The backend this classifier calls
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The system prompt sent with every request
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Classify document text
    ///
    /// 1. Structured request, strictly parsed.
    /// 2. On any failure, the same request again in raw mode and the first
    ///    `{` .. last `}` span of the output strictly parsed.
    /// 3. Otherwise a failure record holding the raw output.
    pub fn classify(&self, text: &str) -> ClassificationRecord {
        let request = match ClassificationRequest::new(text) {
            Ok(request) => request,
            Err(e) => {
                warn!("Received empty text, cannot classify");
                return empty_text_failure(&e);
            }
        };
        self.classify_request(&request)
    }

    /// Classify a validated request
    pub fn classify_request(&self, request: &ClassificationRequest) -> ClassificationRecord {
        info!(
            "Classifying text (first {} chars): {}...",
            self.config.text_preview_chars,
            preview(request.text(), self.config.text_preview_chars)
        );

        let user_message = PromptBuilder::build_user_message(request.text());

        let primary_error = match self.structured_attempt(&user_message) {
            Ok(record) => {
                info!("Successfully classified. Category: {}", record.category);
                return record;
            }
            Err(e) => e,
        };

        warn!(
            "Error during primary LLM classification or JSON parsing: {}",
            primary_error
        );
        info!("Attempting to get raw string output from LLM for manual JSON extraction...");

        let raw_output =
            match self
                .backend
                .generate(&self.system_prompt, &user_message, ResponseMode::Raw)
            {
                Ok(raw_output) => raw_output,
                Err(fetch_error) => {
                    warn!(
                        "Could not even fetch raw string output from LLM: {}",
                        fetch_error
                    );
                    return severe_failure(&primary_error, &fetch_error.to_string());
                }
            };

        debug!(
            "Raw LLM output received: {}...",
            preview(&raw_output, self.config.raw_preview_chars)
        );

        match extract_record(&raw_output) {
            Ok(record) => {
                info!(
                    "Successfully parsed extracted JSON from raw output. Category: {}",
                    record.category
                );
                record
            }
            Err(extraction_error) => {
                warn!("Manual JSON extraction failed: {}", extraction_error);
                warn!("All parsing attempts failed");
                parsing_failure(&primary_error, raw_output, &extraction_error)
            }
        }
    }

    fn structured_attempt(&self, user_message: &str) -> Result<ClassificationRecord, ClassifierError> {
        let response = self
            .backend
            .generate(&self.system_prompt, user_message, ResponseMode::Structured)
            .map_err(|e| ClassifierError::Backend(e.to_string()))?;

        debug!("Structured response length: {} chars", response.len());

        parse_structured_response(&response)
    }
}

fn empty_text_failure(error: &ClassifierError) -> ClassificationRecord {
    let mut metadata = Metadata::new();
    metadata.insert("error".to_string(), Value::String(error.to_string()));
    ClassificationRecord::failure(FailureKind::EmptyText, metadata)
}

fn severe_failure(primary_error: &ClassifierError, fetch_error: &str) -> ClassificationRecord {
    let mut metadata = Metadata::new();
    metadata.insert(
        "summary".to_string(),
        Value::String(SEVERE_ERROR_SUMMARY.to_string()),
    );
    metadata.insert(
        "primary_error".to_string(),
        Value::String(primary_error.to_string()),
    );
    metadata.insert(
        "fetch_error".to_string(),
        Value::String(fetch_error.to_string()),
    );
    ClassificationRecord::failure(FailureKind::SevereError, metadata)
}

fn parsing_failure(
    primary_error: &ClassifierError,
    raw_output: String,
    extraction_error: &ClassifierError,
) -> ClassificationRecord {
    let mut metadata = Metadata::new();
    metadata.insert(
        "summary".to_string(),
        Value::String(PARSING_FAILURE_SUMMARY.to_string()),
    );
    metadata.insert(
        "primary_error_message".to_string(),
        Value::String(primary_error.to_string()),
    );
    metadata.insert("raw_llm_output".to_string(), Value::String(raw_output));
    metadata.insert(
        "extraction_error".to_string(),
        Value::String(extraction_error.to_string()),
    );
    ClassificationRecord::failure(FailureKind::ParsingFailureAllAttempts, metadata)
}

/// First `max_chars` characters of `text`
fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docarchive_llm::MockProvider;

    #[test]
    fn test_preview_is_char_safe() {
        assert_eq!(preview("héllo wörld", 4), "héll");
        assert_eq!(preview("short", 100), "short");
        assert_eq!(preview("", 3), "");
    }

    #[test]
    fn test_system_prompt_uses_configured_categories() {
        let config = ClassifierConfig {
            suggested_categories: vec!["tax_return".to_string()],
            ..ClassifierConfig::default()
        };
        let classifier = Classifier::new(MockProvider::default(), config);
        assert!(classifier.system_prompt().contains("'tax_return'"));
        assert!(!classifier.system_prompt().contains("'receipt'"));
    }

    #[test]
    fn test_both_calls_send_the_same_prompt() {
        let llm = MockProvider::new("no json at all");
        let classifier = Classifier::default_config(llm.clone());

        classifier.classify("Meeting notes for Tuesday");

        let calls = llm.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].mode, ResponseMode::Structured);
        assert_eq!(calls[1].mode, ResponseMode::Raw);
        assert_eq!(calls[0].system_prompt, calls[1].system_prompt);
        assert_eq!(calls[0].user_text, calls[1].user_text);
        assert!(calls[0].user_text.ends_with("Meeting notes for Tuesday"));
    }

    #[test]
    fn test_primary_error_message_names_stage_one_cause() {
        let llm = MockProvider::new("nope").with_structured_error("model crashed");
        let record = Classifier::default_config(llm).classify("text");

        assert_eq!(
            record.metadata_str("primary_error_message"),
            Some("Backend error: LLM error: model crashed")
        );
        assert_eq!(
            record.metadata_str("extraction_error"),
            Some("No JSON object found in raw LLM output")
        );
    }
}
