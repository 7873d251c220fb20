//! Passive-voice exception set
//!
//! Past participles that usually function as plain adjectives in technical
//! prose ("the field is required", "I was excited"). Matches whose participle
//! is in this set are suppressed before they ever count as passive voice.

use std::collections::HashSet;
use std::sync::OnceLock;

const EXCEPTIONS: &[&str] = &[
    "used",
    "based",
    "called",
    "named",
    "required",
    "needed",
    "interested",
    "excited",
    "concerned",
    "supposed",
    "expected",
    "tired",
    "bored",
    "worried",
    "pleased",
    "satisfied",
];

pub fn passive_exceptions() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| EXCEPTIONS.iter().copied().collect())
}
