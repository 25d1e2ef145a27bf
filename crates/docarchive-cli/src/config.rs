//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use docarchive_classifier::ClassifierConfig;
use docarchive_llm::OllamaConfig;
use docarchive_ocr::OcrConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Generation backend
    #[serde(default)]
    pub llm: OllamaConfig,

    /// Classification
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Text extraction
    #[serde(default)]
    pub ocr: OcrConfig,

    /// Archive layout
    #[serde(default)]
    pub archive: ArchiveSettings,
}

/// Where archived documents go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveSettings {
    /// Root directory of the archive
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ArchiveSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output_documents")
}

impl ArchiveConfig {
    /// Default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Could not find config directory".into()))?;
        Ok(config_dir.join("docarchive").join("config.toml"))
    }

    /// `explicit` if given, the default path otherwise.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load configuration from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Parse and validate.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Apply command-line or environment overrides.
    pub fn apply_overrides(&mut self, endpoint: Option<String>, model: Option<String>) {
        if let Some(endpoint) = endpoint {
            self.llm.endpoint = endpoint;
        }
        if let Some(model) = model {
            self.llm.model = model;
        }
    }

    /// Validate all sections.
    pub fn validate(&self) -> Result<()> {
        if self.llm.endpoint.trim().is_empty() {
            return Err(CliError::Config("llm.endpoint must not be empty".into()));
        }
        if self.llm.model.trim().is_empty() {
            return Err(CliError::Config("llm.model must not be empty".into()));
        }
        if self.ocr.tesseract_binary.trim().is_empty() {
            return Err(CliError::Config("ocr.tesseract_binary must not be empty".into()));
        }
        if self.archive.output_dir.as_os_str().is_empty() {
            return Err(CliError::Config("archive.output_dir must not be empty".into()));
        }
        self.classifier.validate()?;
        Ok(())
    }
}
