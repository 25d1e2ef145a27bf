//! docarchive OCR Layer
//!
//! Implementations of the `TextExtractor` trait from `docarchive-domain`.
//!
//! # Extractors
//!
//! - `TesseractExtractor`: runs the `tesseract` command-line OCR engine
//! - `PlainTextExtractor`: reads already-textual files (useful for tests and
//!   for documents that were OCR'd elsewhere)
//!
//! Extraction never fails loudly: errors are logged and reported as `None`,
//! so one unreadable scan does not abort a batch.

#![warn(missing_docs)]

mod config;
mod plaintext;
mod tesseract;

pub use config::{OcrConfig, OcrEngine};
pub use plaintext::PlainTextExtractor;
pub use tesseract::TesseractExtractor;

use docarchive_domain::TextExtractor;

/// Build the extractor selected by `config`
pub fn extractor_from_config(config: &OcrConfig) -> Box<dyn TextExtractor> {
    match config.engine {
        OcrEngine::Tesseract => Box::new(
            TesseractExtractor::new(&config.tesseract_binary).with_language(&config.language),
        ),
        OcrEngine::Plaintext => Box::new(PlainTextExtractor::new()),
    }
}

/// Treat blank output as a failed extraction
pub(crate) fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
