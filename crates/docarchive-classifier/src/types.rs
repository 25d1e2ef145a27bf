//! Request types for classification

use crate::error::ClassifierError;

/// Document text submitted for classification
///
/// Guaranteed to contain at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRequest {
    text: String,
}

impl ClassificationRequest {
    /// Create a request, rejecting empty or whitespace-only text
    pub fn new(text: impl Into<String>) -> Result<Self, ClassifierError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ClassifierError::EmptyText);
        }
        Ok(Self { text })
    }

    /// The document text
    pub fn text(&self) -> &str {
        &self.text
    }
}
