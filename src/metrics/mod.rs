//! Metric calculators
//!
//! Eight independent analyzers, each a stateless function of
//! `(SegmentedText, AudienceProfile)` plus the static lexicon tables. No
//! calculator reads another calculator's output, which keeps them
//! individually testable and lets the engine add or drop one without
//! touching the rest.

pub mod code_ratio;
pub mod hedging;
pub mod jargon;
pub mod paragraphs;
pub mod passive;
pub mod readability;
pub mod sentences;
pub mod structure;

/// Char-boundary-safe preview of the first `max` characters
pub(crate) fn preview(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
