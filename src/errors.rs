//! Error types for the analysis core
//!
//! Only two conditions are fatal for an invocation: an unrecognized audience
//! tier (caught at the boundary, before analysis starts) and input with
//! nothing to analyze at all. Per-metric shortfalls are modeled as data
//! (`Measured::InsufficientContent`, `CodeRatio::NotApplicable`), not errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("unknown audience tier '{0}' (valid tiers: beginner, intermediate, expert, mixed)")]
    InvalidAudience(String),

    #[error("document contains no prose or code to analyze")]
    EmptyInput,
}
