//! Configuration for the Classifier

use crate::error::ClassifierError;
use serde::{Deserialize, Serialize};

/// Categories suggested to the model when none are configured
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "contractor_invoice",
    "health_prescription",
    "health_insurance",
    "receipt",
    "letter",
    "utility_bill",
    "other",
];

/// Configuration for the Classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Categories listed in the prompt as guidance (not enforced)
    #[serde(default = "default_categories")]
    pub suggested_categories: Vec<String>,

    /// Characters of input text shown in progress logs
    #[serde(default = "default_text_preview_chars")]
    pub text_preview_chars: usize,

    /// Characters of raw model output shown in fallback logs
    #[serde(default = "default_raw_preview_chars")]
    pub raw_preview_chars: usize,
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

fn default_text_preview_chars() -> usize {
    100
}

fn default_raw_preview_chars() -> usize {
    300
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            suggested_categories: default_categories(),
            text_preview_chars: default_text_preview_chars(),
            raw_preview_chars: default_raw_preview_chars(),
        }
    }
}

impl ClassifierConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.suggested_categories.is_empty() {
            return Err(ClassifierError::Config(
                "suggested_categories must not be empty".to_string(),
            ));
        }
        if let Some(idx) = self
            .suggested_categories
            .iter()
            .position(|c| c.trim().is_empty())
        {
            return Err(ClassifierError::Config(format!(
                "suggested_categories[{}] is blank",
                idx
            )));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ClassifierError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ClassifierError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ClassifierError> {
        toml::to_string_pretty(self)
            .map_err(|e| ClassifierError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
