//! Query interpretation and filter evaluation.

pub mod engine;
pub mod filters;
pub mod interpreter;
