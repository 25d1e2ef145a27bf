//! Plain-text "extraction" for documents that are already text

use crate::non_empty;
use docarchive_domain::TextExtractor;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Reads the file as UTF-8 text
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    /// Create a new plain-text extractor
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, path: &Path) -> Option<String> {
        info!("Reading text document: {}", path.display());
        match fs::read_to_string(path) {
            Ok(text) => {
                let text = non_empty(text);
                if text.is_none() {
                    warn!("Document contains no text: {}", path.display());
                }
                text
            }
            Err(e) => {
                warn!("Error reading {}: {}", path.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_text_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Dr. Smith - Health Clinic").unwrap();
        writeln!(file, "Rx: Amoxicillin 250mg").unwrap();

        let text = PlainTextExtractor::new().extract_text(file.path()).unwrap();
        assert!(text.contains("Amoxicillin"));
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = PlainTextExtractor::new().extract_text(&dir.path().join("missing.txt"));
        assert!(result.is_none());
    }

    #[test]
    fn test_blank_file_is_none() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "   \n\n").unwrap();
        assert!(PlainTextExtractor::new().extract_text(file.path()).is_none());
    }

    #[test]
    fn test_binary_file_is_none() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x89, 0x50, 0x4e, 0x47, 0xff, 0xfe]).unwrap();
        assert!(PlainTextExtractor::new().extract_text(file.path()).is_none());
    }
}
