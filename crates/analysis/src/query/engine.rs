//! Filter evaluation over a corpus snapshot.

use crate::error::Result;
use crate::properties::{analyze, Properties};
use crate::query::filters::StringFilters;
use crate::record::StringRecord;

/// The records that passed every present predicate, paired with their freshly
/// computed properties. Input order is preserved (stable filter, no re-sort).
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub matches: Vec<(StringRecord, Properties)>,
    pub count: usize,
}

/// Applies a filter set to a sequence of records.
///
/// Properties are recomputed from each record's value on every call; the
/// engine never trusts a persisted cache. All present predicates must pass
/// (logical AND). `contains_character` is a case-sensitive literal membership
/// test against the raw value, not the palindrome-cleaned projection.
pub fn apply_filters(filters: &StringFilters, records: Vec<StringRecord>) -> Result<MatchResult> {
    let mut matches = Vec::new();
    for record in records {
        let properties = analyze(&record.value);
        if matches_filters(filters, &record, &properties) {
            matches.push((record, properties));
        }
    }
    Ok(MatchResult {
        count: matches.len(),
        matches,
    })
}

fn matches_filters(filters: &StringFilters, record: &StringRecord, props: &Properties) -> bool {
    let length = props.length as i64;
    if filters
        .is_palindrome
        .is_some_and(|want| props.is_palindrome != want)
    {
        return false;
    }
    if filters.min_length.is_some_and(|min| length < min) {
        return false;
    }
    if filters.max_length.is_some_and(|max| length > max) {
        return false;
    }
    if filters
        .word_count
        .is_some_and(|want| props.word_count as i64 != want)
    {
        return false;
    }
    if filters
        .contains_character
        .is_some_and(|ch| !record.value.contains(ch))
    {
        return false;
    }
    true
}
