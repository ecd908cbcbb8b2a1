//! Natural-language query interpretation.
//!
//! The interpreter is not a parser: it is a fixed, ordered table of rules,
//! each matched independently against the whole query. Rules that fire merge
//! their effects into one [`StringFilters`]; a later rule overwrites an
//! earlier one targeting the same field. The only cross-rule validation is
//! the length-bound consistency check at the end.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{AnalysisError, Result};
use crate::query::filters::StringFilters;

/// The outcome of interpretation: the filters plus the original query text,
/// echoed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: StringFilters,
}

/// A rule receives the lower-cased query and reports whether it fired.
type Rule = fn(&str, &mut StringFilters) -> bool;

/// Evaluation order matters: `exactly N characters` runs after `longer than`
/// (overwriting its minimum) but before `shorter than`, whose maximum
/// survives and can surface a bound conflict.
const RULES: &[Rule] = &[
    palindrome_rule,
    word_count_rule,
    longer_than_rule,
    exact_length_rule,
    shorter_than_rule,
    contains_letter_rule,
    first_vowel_rule,
];

static LONGER_THAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"longer than (\d+)").expect("valid regex"));
static SHORTER_THAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"shorter than (\d+)").expect("valid regex"));
static EXACT_LENGTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"exactly (\d+) characters?").expect("valid regex"));
static CONTAINS_LETTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:contain|containing|includes?) the letter (\w)").expect("valid regex")
});

/// Interprets a free-text query against the rule table.
///
/// Fails with [`AnalysisError::QueryUnparseable`] when the query is empty or
/// no rule fires, and with [`AnalysisError::QueryConflicting`] when the
/// accumulated length bounds are inverted.
pub fn interpret_query(query: &str) -> Result<InterpretedQuery> {
    if query.trim().is_empty() {
        return Err(AnalysisError::QueryUnparseable(
            "query must not be empty".to_string(),
        ));
    }

    let lowered = query.to_lowercase();
    let mut filters = StringFilters::default();
    let mut fired = false;
    for rule in RULES {
        fired |= rule(&lowered, &mut filters);
    }

    if !fired {
        return Err(AnalysisError::QueryUnparseable(format!(
            "no recognized pattern in query: {query}"
        )));
    }
    filters
        .check_length_bounds()
        .map_err(AnalysisError::QueryConflicting)?;

    Ok(InterpretedQuery {
        original: query.to_string(),
        parsed_filters: filters,
    })
}

fn palindrome_rule(query: &str, filters: &mut StringFilters) -> bool {
    if query.contains("palindromic") || query.contains("palindrome") {
        filters.is_palindrome = Some(true);
        return true;
    }
    false
}

fn word_count_rule(query: &str, filters: &mut StringFilters) -> bool {
    // Mutually exclusive: a query naming both reads as single-word.
    if query.contains("single word") || query.contains("one word") {
        filters.word_count = Some(1);
        true
    } else if query.contains("two word") || query.contains("double word") {
        filters.word_count = Some(2);
        true
    } else {
        false
    }
}

fn longer_than_rule(query: &str, filters: &mut StringFilters) -> bool {
    // checked_add: a bound that cannot be represented is treated like a
    // number that cannot be parsed, and the rule does not fire.
    match captured_number(&LONGER_THAN, query).and_then(|n| n.checked_add(1)) {
        Some(min) => {
            filters.min_length = Some(min);
            true
        }
        None => false,
    }
}

fn shorter_than_rule(query: &str, filters: &mut StringFilters) -> bool {
    match captured_number(&SHORTER_THAN, query) {
        Some(n) => {
            // `shorter than 0` derives -1, satisfiable by nothing.
            filters.max_length = Some(n - 1);
            true
        }
        None => false,
    }
}

fn exact_length_rule(query: &str, filters: &mut StringFilters) -> bool {
    match captured_number(&EXACT_LENGTH, query) {
        Some(n) => {
            filters.min_length = Some(n);
            filters.max_length = Some(n);
            true
        }
        None => false,
    }
}

fn contains_letter_rule(query: &str, filters: &mut StringFilters) -> bool {
    match CONTAINS_LETTER
        .captures(query)
        .and_then(|caps| caps[1].chars().next())
    {
        Some(letter) => {
            filters.contains_character = Some(letter);
            true
        }
        None => false,
    }
}

fn first_vowel_rule(query: &str, filters: &mut StringFilters) -> bool {
    // Historical heuristic: binds the literal 'a', not an actual vowel scan.
    if query.contains("first vowel") {
        filters.contains_character = Some('a');
        return true;
    }
    false
}

fn captured_number(pattern: &Regex, query: &str) -> Option<i64> {
    pattern
        .captures(query)
        .and_then(|caps| caps[1].parse::<i64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(query: &str) -> StringFilters {
        interpret_query(query).expect("interpretable query").parsed_filters
    }

    #[test]
    fn longer_than_derives_exclusive_minimum() {
        assert_eq!(
            filters("strings longer than 10 characters"),
            StringFilters {
                min_length: Some(11),
                ..Default::default()
            }
        );
    }

    #[test]
    fn shorter_than_derives_exclusive_maximum() {
        assert_eq!(
            filters("shorter than 4"),
            StringFilters {
                max_length: Some(3),
                ..Default::default()
            }
        );
    }

    #[test]
    fn shorter_than_zero_goes_negative() {
        assert_eq!(filters("shorter than 0").max_length, Some(-1));
    }

    #[test]
    fn longer_than_i64_max_does_not_fire() {
        // The derived bound would overflow, so the rule is skipped and the
        // query fails like any other unrecognized one instead of panicking.
        assert!(matches!(
            interpret_query("longer than 9223372036854775807 characters"),
            Err(AnalysisError::QueryUnparseable(_))
        ));
    }

    #[test]
    fn single_word_palindromes() {
        assert_eq!(
            filters("all single word palindromic strings"),
            StringFilters {
                is_palindrome: Some(true),
                word_count: Some(1),
                ..Default::default()
            }
        );
    }

    #[test]
    fn single_word_wins_over_two_word() {
        assert_eq!(filters("one word or two word strings").word_count, Some(1));
    }

    #[test]
    fn double_word() {
        assert_eq!(filters("double word strings").word_count, Some(2));
    }

    #[test]
    fn containing_the_letter() {
        assert_eq!(
            filters("strings containing the letter z"),
            StringFilters {
                contains_character: Some('z'),
                ..Default::default()
            }
        );
        assert_eq!(
            filters("must include the letter q").contains_character,
            Some('q')
        );
    }

    #[test]
    fn letter_is_lowercased_with_the_query() {
        assert_eq!(
            filters("strings containing the letter Z").contains_character,
            Some('z')
        );
    }

    #[test]
    fn exact_length_sets_both_bounds() {
        assert_eq!(
            filters("exactly 5 characters"),
            StringFilters {
                min_length: Some(5),
                max_length: Some(5),
                ..Default::default()
            }
        );
    }

    #[test]
    fn exact_length_overwrites_longer_than_bound() {
        let parsed = filters("longer than 2 but exactly 5 characters");
        assert_eq!(parsed.min_length, Some(5));
        assert_eq!(parsed.max_length, Some(5));
    }

    #[test]
    fn shorter_than_survives_exact_length() {
        // `shorter` evaluates after `exactly`, so its maximum wins and the
        // resulting bounds are checked for consistency.
        assert!(matches!(
            interpret_query("exactly 3 characters and shorter than 5"),
            Ok(ref interpreted) if interpreted.parsed_filters.max_length == Some(4)
        ));
    }

    #[test]
    fn first_vowel_binds_literal_a() {
        assert_eq!(filters("strings with the first vowel").contains_character, Some('a'));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            filters("Strings LONGER THAN 3 Characters").min_length,
            Some(4)
        );
    }

    #[test]
    fn empty_query_is_unparseable() {
        assert!(matches!(
            interpret_query(""),
            Err(AnalysisError::QueryUnparseable(_))
        ));
        assert!(matches!(
            interpret_query("   \t "),
            Err(AnalysisError::QueryUnparseable(_))
        ));
    }

    #[test]
    fn unrecognized_query_is_unparseable() {
        assert!(matches!(
            interpret_query("sort by creation date"),
            Err(AnalysisError::QueryUnparseable(_))
        ));
    }

    #[test]
    fn inverted_bounds_conflict() {
        assert!(matches!(
            interpret_query("exactly 3 characters and shorter than 2"),
            Err(AnalysisError::QueryConflicting(_))
        ));
    }

    #[test]
    fn echoes_original_query() {
        let interpreted = interpret_query("All Palindromic Strings").expect("interpretable");
        assert_eq!(interpreted.original, "All Palindromic Strings");
    }
}
