#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalysisError {
    #[error("value must not be empty")]
    EmptyValue,

    #[error("value must be a string")]
    NotAString,

    #[error("string already exists in the system")]
    DuplicateValue,

    #[error("string not found")]
    StringNotFound,

    #[error("unable to interpret query: {0}")]
    QueryUnparseable(String),

    #[error("conflicting filters: {0}")]
    QueryConflicting(String),

    #[error("invalid filters: {0}")]
    InvalidFilters(String),

    #[error("filter evaluation failed: {0}")]
    FilterEvaluation(String),

    #[error("store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
