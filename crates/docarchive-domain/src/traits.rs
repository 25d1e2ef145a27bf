//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::record::Metadata;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// How the generation backend should shape its response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseMode {
    /// Ask the backend to constrain its output to a JSON object
    Structured,
    /// Plain text, returned verbatim
    Raw,
}

/// Trait for generation (LLM) backends
///
/// Implemented by the infrastructure layer (docarchive-llm)
pub trait GenerationBackend {
    /// Error type for backend operations
    type Error;

    /// Submit a system prompt and user text, returning the model's response text
    fn generate(
        &self,
        system_prompt: &str,
        user_text: &str,
        mode: ResponseMode,
    ) -> Result<String, Self::Error>;
}

impl<B: GenerationBackend + ?Sized> GenerationBackend for &B {
    type Error = B::Error;

    fn generate(
        &self,
        system_prompt: &str,
        user_text: &str,
        mode: ResponseMode,
    ) -> Result<String, Self::Error> {
        (**self).generate(system_prompt, user_text, mode)
    }
}

impl<B: GenerationBackend + ?Sized> GenerationBackend for Arc<B> {
    type Error = B::Error;

    fn generate(
        &self,
        system_prompt: &str,
        user_text: &str,
        mode: ResponseMode,
    ) -> Result<String, Self::Error> {
        (**self).generate(system_prompt, user_text, mode)
    }
}

/// Trait for text extraction (OCR) services
///
/// Implemented by the infrastructure layer (docarchive-ocr).
/// Failures are logged by the implementation and reported as `None`.
pub trait TextExtractor {
    /// Extract the text content of the file at `path`
    fn extract_text(&self, path: &Path) -> Option<String>;
}

/// Trait for filing classified documents
///
/// Implemented by the infrastructure layer (docarchive-store)
pub trait ArchiveStore {
    /// Error type for store operations
    type Error;

    /// File `source_path` under `category_path` as `document_name`
    ///
    /// Returns the path the document is filed at.
    fn store_document(
        &self,
        source_path: &Path,
        category_path: &str,
        document_name: &str,
        metadata: &Metadata,
    ) -> Result<PathBuf, Self::Error>;
}
