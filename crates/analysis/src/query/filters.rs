//! Filter sets over string properties.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// A sparse conjunction of optional predicates. An absent field means "no
/// constraint on that dimension".
///
/// Length bounds are signed: the interpreter's `shorter than N` rule derives
/// `N - 1`, which for `N = 0` is a legitimate (if unsatisfiable) `-1`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl StringFilters {
    /// Validates structured caller input. The natural-language interpreter
    /// bypasses the non-negativity checks (its rules may derive a negative
    /// bound) but shares the `min <= max` consistency check.
    pub fn validate(&self) -> Result<()> {
        if self.min_length.is_some_and(|n| n < 0) {
            return Err(AnalysisError::InvalidFilters(
                "min_length must be >= 0".to_string(),
            ));
        }
        if self.max_length.is_some_and(|n| n < 0) {
            return Err(AnalysisError::InvalidFilters(
                "max_length must be >= 0".to_string(),
            ));
        }
        if self.word_count.is_some_and(|n| n < 1) {
            return Err(AnalysisError::InvalidFilters(
                "word_count must be >= 1".to_string(),
            ));
        }
        self.check_length_bounds()
            .map_err(AnalysisError::InvalidFilters)
    }

    /// Errs with a description when both bounds are present and inverted.
    pub fn check_length_bounds(&self) -> std::result::Result<(), String> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(format!(
                    "min_length {min} is greater than max_length {max}"
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_constraints_and_validates() {
        assert_eq!(StringFilters::default(), StringFilters {
            is_palindrome: None,
            min_length: None,
            max_length: None,
            word_count: None,
            contains_character: None,
        });
        assert!(StringFilters::default().validate().is_ok());
    }

    #[test]
    fn rejects_negative_bounds() {
        let filters = StringFilters {
            min_length: Some(-1),
            ..Default::default()
        };
        assert!(matches!(
            filters.validate(),
            Err(AnalysisError::InvalidFilters(_))
        ));
    }

    #[test]
    fn rejects_zero_word_count() {
        let filters = StringFilters {
            word_count: Some(0),
            ..Default::default()
        };
        assert!(filters.validate().is_err());
    }

    #[test]
    fn rejects_inverted_bounds() {
        let filters = StringFilters {
            min_length: Some(5),
            max_length: Some(3),
            ..Default::default()
        };
        assert!(filters.validate().is_err());
        assert!(filters.check_length_bounds().is_err());
    }

    #[test]
    fn absent_fields_skip_serialization() {
        let filters = StringFilters {
            is_palindrome: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_value(&filters).expect("serialize");
        assert_eq!(json, serde_json::json!({ "is_palindrome": true }));
    }
}
