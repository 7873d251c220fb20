//! Prosegrade - audience-calibrated readability analysis
//!
//! Scores prose documentation against the expectations of a target audience
//! tier and emits prioritized revision suggestions. The library entry point
//! is [`analyze`]; [`Analyzer`] adds configuration (profile overrides,
//! project jargon) on top of it.
//!
//! ```no_run
//! use prosegrade::{analyze, Audience};
//!
//! let result = analyze("The cat sat on the mat.", Audience::Beginner)?;
//! assert!(result.passed);
//! # Ok::<(), prosegrade::AnalysisError>(())
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod lexicon;
pub mod metrics;
pub mod models;
pub mod profiles;
pub mod reporters;
pub mod segment;
pub mod syllables;

pub use engine::{analyze, Analyzer};
pub use errors::AnalysisError;
pub use models::{AnalysisResult, Priority, Suggestion, Verdict};
pub use profiles::{Audience, AudienceProfile};
