//! Structural analysis of string values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::identity::content_address;

/// Structural properties derived from a string value.
///
/// Properties are a pure function of the value and are recomputed on every
/// read rather than cached, so two reads can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    /// Character count (unicode scalar values), no trimming.
    pub length: usize,
    /// Whether the cleaned value reads the same in reverse. Cleaning
    /// lower-cases and removes literal spaces only; tabs, newlines and
    /// punctuation are kept. This intentionally matches the historical
    /// behavior, not a linguistic palindrome check.
    pub is_palindrome: bool,
    /// Distinct characters in the raw value.
    pub unique_characters: usize,
    /// Whitespace-delimited token count.
    pub word_count: usize,
    /// Content identity; equals the record id.
    pub sha256_hash: String,
    /// Occurrence count per character, whitespace included.
    pub character_frequency_map: BTreeMap<char, usize>,
}

/// Analyzes a string. Total for any finite input, including the empty string
/// (length 0, palindrome by convention, empty frequency map).
pub fn analyze(value: &str) -> Properties {
    let mut character_frequency_map = BTreeMap::new();
    for ch in value.chars() {
        *character_frequency_map.entry(ch).or_insert(0) += 1;
    }

    Properties {
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        unique_characters: character_frequency_map.len(),
        word_count: value.split_whitespace().count(),
        sha256_hash: content_address(value),
        character_frequency_map,
    }
}

fn is_palindrome(value: &str) -> bool {
    let cleaned: Vec<char> = value
        .to_lowercase()
        .chars()
        .filter(|&c| c != ' ')
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}
