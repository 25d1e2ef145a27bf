//! Parse LLM output into classification records
//!
//! Both paths share one strict parser (`serde_json`): trailing commas,
//! comments and single-quoted keys are rejected.

use crate::error::ClassifierError;
use docarchive_domain::ClassificationRecord;
use serde_json::Value;

/// Parse a structured-mode response
///
/// The whole response must be one JSON object, optionally wrapped in a
/// single markdown code block.
pub fn parse_structured_response(response: &str) -> Result<ClassificationRecord, ClassifierError> {
    let json_str = strip_code_fence(response);
    parse_record(&json_str)
}

/// Recover a record from raw-mode output that may surround the JSON with
/// prose, reasoning tags or other wrappers
pub fn extract_record(raw: &str) -> Result<ClassificationRecord, ClassifierError> {
    let span = extract_object_span(raw).ok_or(ClassifierError::NoJsonObject)?;
    parse_record(span)
}

/// Strictly parse `json_str` and check the record shape
pub fn parse_record(json_str: &str) -> Result<ClassificationRecord, ClassifierError> {
    let value: Value = serde_json::from_str(json_str)?;
    ClassificationRecord::from_value(value).map_err(ClassifierError::InvalidShape)
}

/// Span from the first `{` to the last `}` (inclusive)
///
/// Greedy on purpose: output is assumed to hold one target object, possibly
/// surrounded by text. A second brace-delimited object anywhere else in the
/// output widens the span and the parse then fails.
pub fn extract_object_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

/// Remove a markdown code block wrapper, if present
fn strip_code_fence(response: &str) -> String {
    let trimmed = response.trim();

    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }

    let lines: Vec<&str> = trimmed.lines().collect();
    // Skip first line (```json or ```) and the closing fence if there is one
    let end = if lines.len() > 1 && lines[lines.len() - 1].trim() == "```" {
        lines.len() - 1
    } else {
        lines.len()
    };
    lines.get(1..end).map(|body| body.join("\n")).unwrap_or_default()
}
