//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use docarchive_domain::ClassificationRecord;
use std::path::Path;

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Pretty-printed JSON for a record.
    pub fn format_record(&self, record: &ClassificationRecord) -> Result<String> {
        Ok(serde_json::to_string_pretty(&record.to_value())?)
    }

    /// One line per archived document.
    pub fn document_stored(&self, source: &Path, record: &ClassificationRecord, target: &Path) -> String {
        let msg = format!(
            "{} -> {} [{}]",
            source.display(),
            target.display(),
            record.category
        );
        if record.is_failure() {
            self.warning(&msg)
        } else {
            self.success(&msg)
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
