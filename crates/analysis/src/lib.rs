//! String analysis core library.
//!
//! This crate provides the engine behind the strand service:
//! - Deterministic structural analysis of strings ([`analyze`])
//! - Content-derived identities ([`content_address`])
//! - Natural-language query interpretation ([`interpret_query`])
//! - Filter evaluation over a stored corpus ([`query::engine`])
//! - The storage trait and in-memory implementation ([`store`])

pub mod error;
pub mod identity;
pub mod properties;
pub mod query;
pub mod record;
pub mod service;
pub mod store;

// Re-export main types
pub use error::{AnalysisError, Result};
pub use identity::content_address;
pub use properties::{analyze, Properties};
pub use query::engine::{apply_filters, MatchResult};
pub use query::filters::StringFilters;
pub use query::interpreter::{interpret_query, InterpretedQuery};
pub use record::StringRecord;
pub use service::StringService;
pub use store::{MemoryStringStore, StringStore};
