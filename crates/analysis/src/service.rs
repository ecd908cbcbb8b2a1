//! Orchestration over the store and the analysis core.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::identity::content_address;
use crate::properties::{analyze, Properties};
use crate::query::engine::{apply_filters, MatchResult};
use crate::query::filters::StringFilters;
use crate::query::interpreter::{interpret_query, InterpretedQuery};
use crate::record::StringRecord;
use crate::store::StringStore;

/// Stateless service tying the analysis core to a [`StringStore`].
#[derive(Clone)]
pub struct StringService {
    store: Arc<dyn StringStore>,
}

impl StringService {
    pub fn new(store: Arc<dyn StringStore>) -> Self {
        Self { store }
    }

    /// Creates a record for `value`, rejecting empty values and duplicates.
    /// The duplicate check and the insert are one atomic store operation.
    pub fn create(&self, value: &str) -> Result<(StringRecord, Properties)> {
        if value.is_empty() {
            return Err(AnalysisError::EmptyValue);
        }
        let record = StringRecord {
            id: content_address(value),
            value: value.to_string(),
            created_at: Utc::now(),
        };
        if !self.store.insert_if_absent(record.clone())? {
            return Err(AnalysisError::DuplicateValue);
        }
        debug!(id = %record.id, "stored new string");
        Ok((record, analyze(value)))
    }

    /// Looks up a record by its raw value, recomputing properties on read.
    pub fn get_by_value(&self, value: &str) -> Result<(StringRecord, Properties)> {
        let record = self
            .store
            .get(&content_address(value))?
            .ok_or(AnalysisError::StringNotFound)?;
        let properties = analyze(&record.value);
        Ok((record, properties))
    }

    /// Lists all records matching a structured filter set.
    pub fn list(&self, filters: &StringFilters) -> Result<MatchResult> {
        filters.validate()?;
        let records = self.store.list_all()?;
        apply_filters(filters, records)
            .map_err(|err| AnalysisError::FilterEvaluation(err.to_string()))
    }

    /// Interprets a natural-language query and evaluates it over the corpus.
    pub fn query(&self, text: &str) -> Result<(InterpretedQuery, MatchResult)> {
        let interpreted = interpret_query(text)?;
        debug!(filters = ?interpreted.parsed_filters, "interpreted query");
        let records = self.store.list_all()?;
        let result = apply_filters(&interpreted.parsed_filters, records)
            .map_err(|err| AnalysisError::FilterEvaluation(err.to_string()))?;
        Ok((interpreted, result))
    }

    /// Deletes a record by its raw value.
    pub fn delete_by_value(&self, value: &str) -> Result<()> {
        if !self.store.remove(&content_address(value))? {
            return Err(AnalysisError::StringNotFound);
        }
        Ok(())
    }
}
