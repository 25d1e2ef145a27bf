//! Configuration for text extraction

use serde::{Deserialize, Serialize};

/// Which extractor to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OcrEngine {
    /// `tesseract` command-line OCR
    #[default]
    Tesseract,
    /// Read the file as UTF-8 text
    Plaintext,
}

/// Configuration for text extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Extraction engine
    #[serde(default)]
    pub engine: OcrEngine,

    /// Path or name of the tesseract binary
    #[serde(default = "default_tesseract_binary")]
    pub tesseract_binary: String,

    /// Tesseract language code(s), e.g. "eng" or "eng+deu"
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_tesseract_binary() -> String {
    "tesseract".to_string()
}

fn default_language() -> String {
    "eng".to_string()
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            engine: OcrEngine::default(),
            tesseract_binary: default_tesseract_binary(),
            language: default_language(),
        }
    }
}
