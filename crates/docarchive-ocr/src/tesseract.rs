//! Tesseract command-line OCR
//!
//! Runs `<binary> <image> stdout -l <language>` and captures stdout.

use crate::non_empty;
use docarchive_domain::TextExtractor;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info, warn};

/// OCR through the `tesseract` binary
#[derive(Debug, Clone)]
pub struct TesseractExtractor {
    binary: String,
    language: String,
}

impl TesseractExtractor {
    /// Create an extractor that runs `binary` with English as language
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            language: "eng".to_string(),
        }
    }

    /// Set the tesseract language code(s)
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    fn command(&self, path: &Path) -> Command {
        let mut command = Command::new(&self.binary);
        command
            .arg(path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language);
        command
    }
}

impl Default for TesseractExtractor {
    fn default() -> Self {
        Self::new("tesseract")
    }
}

impl TextExtractor for TesseractExtractor {
    fn extract_text(&self, path: &Path) -> Option<String> {
        info!("Processing image: {} with tesseract OCR", path.display());

        if !path.is_file() {
            warn!("Image not found: {}", path.display());
            return None;
        }

        let output = match self.command(path).output() {
            Ok(output) => output,
            Err(e) => {
                warn!(
                    "Error during OCR processing for {}: failed to run '{}': {}",
                    path.display(),
                    self.binary,
                    e
                );
                return None;
            }
        };

        if !output.status.success() {
            warn!(
                "tesseract could not process the document {} ({}): {}",
                path.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return None;
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("OCR produced {} chars for {}", text.len(), path.display());

        let text = non_empty(text);
        if text.is_none() {
            warn!("OCR found no text in {}", path.display());
        }
        text
    }
}
