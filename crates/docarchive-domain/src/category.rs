//! Category module (open vocabulary, validated non-empty token)

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Category assigned to a classified document
///
/// The vocabulary is open-ended: the generation backend picks freely, guided
/// by the suggested list in the prompt. The only constraint is that the token
/// is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a new category
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    /// Returns error if the category is empty or whitespace-only
    pub fn new(value: impl Into<String>) -> Result<Self, String> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err("Category cannot be empty".to_string());
        }
        if trimmed.len() == value.len() {
            Ok(Self(value))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Build a category from a token already known to be non-empty
    pub(crate) fn sentinel(token: &'static str) -> Self {
        Self(token.to_string())
    }

    /// Get category as string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the category, returning the inner token
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Category::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let category = Category::new("receipt").unwrap();
        assert_eq!(category.as_str(), "receipt");
        assert_eq!(category.to_string(), "receipt");
    }

    #[test]
    fn test_category_is_trimmed() {
        let category = Category::new("  utility_bill\n").unwrap();
        assert_eq!(category.as_str(), "utility_bill");
    }

    #[test]
    fn test_empty_category_rejected() {
        assert!(Category::new("").is_err());
        assert!(Category::new("   \t").is_err());
    }

    #[test]
    fn test_open_vocabulary() {
        // Anything non-empty is accepted, including tokens outside the suggested list
        let category = Category::new("Steuerbescheid").unwrap();
        assert_eq!(category.as_str(), "Steuerbescheid");
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        let result: Result<Category, _> = serde_json::from_str(r#""  ""#);
        assert!(result.is_err());

        let category: Category = serde_json::from_str(r#""letter""#).unwrap();
        assert_eq!(category.as_str(), "letter");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Accepted categories are never blank and never carry outer whitespace
        #[test]
        fn test_category_trimmed_invariant(value in "\\PC*") {
            match Category::new(value.clone()) {
                Ok(category) => {
                    prop_assert!(!category.as_str().is_empty());
                    prop_assert_eq!(category.as_str(), value.trim());
                }
                Err(_) => prop_assert!(value.trim().is_empty()),
            }
        }
    }
}
