//! Ollama Provider Implementation
//!
//! Provides integration with Ollama's `/api/generate` endpoint.
//!
//! # Features
//!
//! - Blocking HTTP communication with the Ollama API
//! - Configurable endpoint, model and timeout
//! - JSON mode (`"format": "json"`) for structured requests
//! - Retry logic with exponential backoff
//!
//! # Examples
//!
//! ```no_run
//! use docarchive_llm::OllamaProvider;
//! use docarchive_domain::{GenerationBackend, ResponseMode};
//!
//! let provider = OllamaProvider::new("http://localhost:11434", "qwen3:14b").unwrap();
//! let text = provider.generate("You are terse.", "Say hello", ResponseMode::Raw).unwrap();
//! println!("{}", text);
//! ```

use crate::LlmError;
use docarchive_domain::{GenerationBackend, ResponseMode};
use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default model
pub const DEFAULT_MODEL: &str = "qwen3:14b";

/// Default timeout for LLM requests (local models can be slow on long documents)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Connection settings for an Ollama backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Base URL of the Ollama API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier (must be pulled in the Ollama instance)
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Attempts per request before giving up
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

/// Ollama API provider
///
/// This provider communicates with an Ollama instance to generate text.
#[derive(Debug)]
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    client: reqwest::blocking::Client,
    max_retries: u32,
}

/// Request body for Ollama generate API
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    system: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'static str>,
}

/// Response from Ollama generate API
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
    #[allow(dead_code)]
    done: bool,
}

impl OllamaProvider {
    /// Create a new Ollama provider with default timeout and retries
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API endpoint (e.g., "http://localhost:11434")
    /// - `model`: Model to use (e.g., "qwen3:14b", "llama3")
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be constructed
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        Self::from_config(&OllamaConfig {
            endpoint: endpoint.into(),
            model: model.into(),
            ..OllamaConfig::default()
        })
    }

    /// Create a new Ollama provider at the default endpoint
    pub fn default_endpoint(model: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(DEFAULT_ENDPOINT, model)
    }

    /// Create a provider from configuration
    pub fn from_config(config: &OllamaConfig) -> Result<Self, LlmError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            client,
            max_retries: config.max_retries.max(1),
        })
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Model this provider sends requests to
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one generate request, retrying transient failures
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Ollama is not running
    /// - Model is not available
    /// - Network communication fails
    /// - Response format is invalid
    fn request(
        &self,
        system_prompt: &str,
        user_text: &str,
        mode: ResponseMode,
    ) -> Result<String, LlmError> {
        let url = format!("{}/api/generate", self.endpoint);

        let request_body = OllamaGenerateRequest {
            model: &self.model,
            system: system_prompt,
            prompt: user_text,
            stream: false,
            format: match mode {
                ResponseMode::Structured => Some("json"),
                ResponseMode::Raw => None,
            },
        };

        debug!(
            "Ollama request: model={}, mode={:?}, prompt length {}",
            self.model,
            mode,
            user_text.len()
        );

        // Retry logic with exponential backoff
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.post(&url).json(&request_body).send() {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response
                            .json::<OllamaGenerateResponse>()
                            .map(|body| body.response)
                            .map_err(|e| {
                                LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
                            });
                    } else if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(LlmError::RateLimitExceeded);
                    } else {
                        let error_text = response
                            .text()
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                warn!(
                    "Ollama request attempt {}/{} failed, retrying in {:?}",
                    attempts, self.max_retries, delay
                );
                thread::sleep(delay);
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

impl GenerationBackend for OllamaProvider {
    type Error = LlmError;

    fn generate(
        &self,
        system_prompt: &str,
        user_text: &str,
        mode: ResponseMode,
    ) -> Result<String, Self::Error> {
        self.request(system_prompt, user_text, mode)
    }
}
