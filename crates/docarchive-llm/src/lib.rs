//! docarchive LLM Provider Layer
//!
//! Implementations of the `GenerationBackend` trait from `docarchive-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic, call-counting mock for testing
//! - `OllamaProvider`: Ollama `/api/generate` integration
//!
//! # Examples
//!
//! ```
//! use docarchive_llm::MockProvider;
//! use docarchive_domain::{GenerationBackend, ResponseMode};
//!
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = provider.generate("system", "user", ResponseMode::Raw).unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! ```

#![warn(missing_docs)]

pub mod ollama;

use docarchive_domain::{GenerationBackend, ResponseMode};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

pub use ollama::{OllamaConfig, OllamaProvider};

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Scripted outcome for one response mode
#[derive(Debug, Clone)]
enum Scripted {
    Respond(String),
    Fail(String),
}

/// A single request received by a [`MockProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    /// Mode the request was made in
    pub mode: ResponseMode,
    /// System prompt sent
    pub system_prompt: String,
    /// User text sent
    pub user_text: String,
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses (or errors) per [`ResponseMode`] without
/// making any network calls, and records every call it receives. Clones
/// share the call log.
///
/// # Examples
///
/// ```
/// use docarchive_llm::MockProvider;
/// use docarchive_domain::{GenerationBackend, ResponseMode};
///
/// let provider = MockProvider::new("fallback text")
///     .with_structured_error("unexpected token");
///
/// assert!(provider.generate("sys", "doc", ResponseMode::Structured).is_err());
/// assert_eq!(provider.generate("sys", "doc", ResponseMode::Raw).unwrap(), "fallback text");
/// assert_eq!(provider.call_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    structured: Scripted,
    raw: Scripted,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockProvider {
    /// Create a new MockProvider returning the same response in every mode
    pub fn new(response: impl Into<String>) -> Self {
        let response = response.into();
        Self {
            structured: Scripted::Respond(response.clone()),
            raw: Scripted::Respond(response),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the response for structured-mode requests
    pub fn with_structured_response(mut self, response: impl Into<String>) -> Self {
        self.structured = Scripted::Respond(response.into());
        self
    }

    /// Set the response for raw-mode requests
    pub fn with_raw_response(mut self, response: impl Into<String>) -> Self {
        self.raw = Scripted::Respond(response.into());
        self
    }

    /// Make structured-mode requests fail with the given message
    pub fn with_structured_error(mut self, message: impl Into<String>) -> Self {
        self.structured = Scripted::Fail(message.into());
        self
    }

    /// Make raw-mode requests fail with the given message
    pub fn with_raw_error(mut self, message: impl Into<String>) -> Self {
        self.raw = Scripted::Fail(message.into());
        self
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.log().len()
    }

    /// Get the number of calls made in a given mode
    pub fn calls_in_mode(&self, mode: ResponseMode) -> usize {
        self.log().iter().filter(|call| call.mode == mode).count()
    }

    /// Get a copy of every call received so far
    pub fn calls(&self) -> Vec<MockCall> {
        self.log().clone()
    }

    /// Reset the call log
    pub fn reset_call_count(&self) {
        self.log().clear();
    }

    fn log(&self) -> MutexGuard<'_, Vec<MockCall>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl GenerationBackend for MockProvider {
    type Error = LlmError;

    fn generate(
        &self,
        system_prompt: &str,
        user_text: &str,
        mode: ResponseMode,
    ) -> Result<String, Self::Error> {
        self.log().push(MockCall {
            mode,
            system_prompt: system_prompt.to_string(),
            user_text: user_text.to_string(),
        });

        let scripted = match mode {
            ResponseMode::Structured => &self.structured,
            ResponseMode::Raw => &self.raw,
        };

        match scripted {
            Scripted::Respond(response) => Ok(response.clone()),
            Scripted::Fail(message) => Err(LlmError::Other(message.clone())),
        }
    }
}
