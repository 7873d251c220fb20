//! Static lexical catalogs used by the metric calculators
//!
//! All tables are immutable and built once behind `OnceLock`, so concurrent
//! analyses share them without locking and never observe mutation.

mod hedges;
mod jargon;
mod passive;

pub use hedges::{filler_phrases, hedge_words};
pub use jargon::{jargon_catalog, JargonTerm};
pub use passive::passive_exceptions;
