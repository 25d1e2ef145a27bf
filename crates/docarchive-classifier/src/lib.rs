//! docarchive Classifier
//!
//! Classifies document text and extracts metadata through a generation
//! backend, coercing free-form model output into a strict
//! `{category, metadata}` record.
//!
//! # Architecture
//!
//! ```text
//! OCR text → Classifier → LLM (structured) ─ok──────────────→ record
//!                           │ parse/shape/backend error
//!                           └→ LLM (raw) → first `{` .. last `}` → record
//!                                │ fetch error        │ no valid object
//!                                ↓                    ↓
//!                      unknown_severe_error   unknown_parsing_failure_all_attempts
//! ```
//!
//! `classify` never fails: every outcome is a `ClassificationRecord`, and
//! failures are marked by a sentinel category (`FailureKind`).
//!
//! # Example Usage
//!
//! ```
//! use docarchive_classifier::Classifier;
//! use docarchive_llm::MockProvider;
//!
//! let llm = MockProvider::new(r#"{"category": "receipt", "metadata": {"amount": "$12.00"}}"#);
//! let classifier = Classifier::default_config(llm);
//!
//! let record = classifier.classify("Corner Cafe\nTotal: $12.00");
//! assert_eq!(record.category.as_str(), "receipt");
//! assert!(!record.is_failure());
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod error;
mod parser;
mod prompt;
mod types;

#[cfg(test)]
mod tests;

pub use classifier::Classifier;
pub use config::{ClassifierConfig, DEFAULT_CATEGORIES};
pub use error::ClassifierError;
pub use parser::{extract_object_span, extract_record, parse_record, parse_structured_response};
pub use prompt::PromptBuilder;
pub use types::ClassificationRequest;
