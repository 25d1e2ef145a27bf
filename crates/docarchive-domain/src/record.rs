//! Classification record and failure taxonomy
//!
//! Success and failure share one shape: `{category, metadata}`. A failure is
//! a record whose category is one of the [`FailureKind`] sentinel tokens and
//! whose metadata carries diagnostics.

use crate::category::Category;
use serde::Serialize;
use serde_json::{Map, Value};

/// Free-form metadata mapping extracted from a document
pub type Metadata = Map<String, Value>;

/// Sentinel failure categories
///
/// Callers tell success from failure by checking whether the record's
/// category is one of these tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Input text was empty or whitespace-only; no backend call was made
    EmptyText,
    /// The raw-text re-issue to the backend itself failed
    SevereError,
    /// No valid record could be recovered after both attempts
    ParsingFailureAllAttempts,
}

impl FailureKind {
    /// All sentinel kinds
    pub const ALL: [FailureKind; 3] = [
        FailureKind::EmptyText,
        FailureKind::SevereError,
        FailureKind::ParsingFailureAllAttempts,
    ];

    /// The sentinel category token
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::EmptyText => "unknown_empty_text",
            FailureKind::SevereError => "unknown_severe_error",
            FailureKind::ParsingFailureAllAttempts => "unknown_parsing_failure_all_attempts",
        }
    }

    /// Map a category token back to its sentinel kind, if it is one
    pub fn from_category(category: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == category)
    }
}

/// Structured result of classifying a document
///
/// Valid only when produced from a JSON object holding both `category`
/// (non-empty string) and `metadata` (object). Any other top-level keys the
/// backend emitted are kept in `extra` and serialised back flat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationRecord {
    /// Category token
    pub category: Category,

    /// Extracted fields (dates, amounts, identifiers, summary, ...)
    pub metadata: Metadata,

    /// Additional top-level keys, tolerated but not interpreted
    #[serde(flatten)]
    pub extra: Metadata,
}

impl ClassificationRecord {
    /// Create a record with no extra keys
    pub fn new(category: Category, metadata: Metadata) -> Self {
        Self {
            category,
            metadata,
            extra: Map::new(),
        }
    }

    /// Create a failure record tagged with a sentinel category
    pub fn failure(kind: FailureKind, metadata: Metadata) -> Self {
        Self::new(Category::sentinel(kind.as_str()), metadata)
    }

    /// Validate a JSON value against the record shape
    ///
    /// # Errors
    /// Returns a description of the first shape violation found
    pub fn from_value(value: Value) -> Result<Self, String> {
        let mut object = match value {
            Value::Object(object) => object,
            other => {
                return Err(format!(
                    "expected a JSON object, found {}",
                    json_kind(&other)
                ))
            }
        };

        let category = object
            .remove("category")
            .ok_or_else(|| "missing required key 'category'".to_string())?;
        let metadata = object
            .remove("metadata")
            .ok_or_else(|| "missing required key 'metadata'".to_string())?;

        let category = match category {
            Value::String(token) => Category::new(token)?,
            other => {
                return Err(format!(
                    "'category' must be a string, found {}",
                    json_kind(&other)
                ))
            }
        };

        let metadata = match metadata {
            Value::Object(metadata) => metadata,
            other => {
                return Err(format!(
                    "'metadata' must be a JSON object, found {}",
                    json_kind(&other)
                ))
            }
        };

        Ok(Self {
            category,
            metadata,
            extra: object,
        })
    }

    /// Convert back into a flat JSON object
    pub fn to_value(&self) -> Value {
        let mut object = self.extra.clone();
        object.insert(
            "category".to_string(),
            Value::String(self.category.as_str().to_string()),
        );
        object.insert("metadata".to_string(), Value::Object(self.metadata.clone()));
        Value::Object(object)
    }

    /// The sentinel kind, if this record reports a failure
    pub fn failure_kind(&self) -> Option<FailureKind> {
        FailureKind::from_category(self.category.as_str())
    }

    /// Whether this record reports a failure
    pub fn is_failure(&self) -> bool {
        self.failure_kind().is_some()
    }

    /// Look up a metadata value as a string
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(Value::as_str)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
