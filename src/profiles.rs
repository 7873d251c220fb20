//! Audience profile registry
//!
//! Each audience tier carries the full set of grading thresholds. Calculators
//! consult the profile structurally (never the tier itself), so a new tier is
//! a new table entry here and nothing else.

use crate::errors::AnalysisError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Target audience tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Beginner,
    #[default]
    Intermediate,
    Expert,
    Mixed,
}

impl Audience {
    pub const ALL: [Audience; 4] = [
        Audience::Beginner,
        Audience::Intermediate,
        Audience::Expert,
        Audience::Mixed,
    ];

    /// Resolve the grading profile for this tier
    pub fn profile(&self) -> AudienceProfile {
        match self {
            Audience::Beginner => AudienceProfile {
                name: "Beginner".into(),
                max_grade: 8.0,
                target_ease: 70.0,
                max_sentence_words: 20,
                max_paragraph_words: 100,
                jargon_tolerance: 2.0,
                code_explanation_ratio: 2.0,
                passive_threshold: 15.0,
                requires_definitions: true,
                assumed_known: to_strings(&["computer", "file", "folder", "click", "type"]),
            },
            Audience::Intermediate => AudienceProfile {
                name: "Intermediate".into(),
                max_grade: 12.0,
                target_ease: 55.0,
                max_sentence_words: 25,
                max_paragraph_words: 150,
                jargon_tolerance: 4.0,
                code_explanation_ratio: 1.0,
                passive_threshold: 15.0,
                requires_definitions: true,
                assumed_known: to_strings(&[
                    "API", "function", "variable", "loop", "array", "object", "class", "method",
                    "parameter", "return", "import", "export",
                ]),
            },
            Audience::Expert => AudienceProfile {
                name: "Expert".into(),
                max_grade: 16.0,
                target_ease: 40.0,
                max_sentence_words: 35,
                max_paragraph_words: 200,
                jargon_tolerance: 8.0,
                code_explanation_ratio: 0.5,
                // Passive constructions are routine in formal technical prose
                passive_threshold: 25.0,
                requires_definitions: false,
                assumed_known: to_strings(&[
                    "API",
                    "REST",
                    "GraphQL",
                    "microservices",
                    "containerization",
                    "CI/CD",
                    "dependency injection",
                    "singleton",
                    "factory pattern",
                    "async",
                    "await",
                    "promise",
                    "callback",
                    "middleware",
                    "ORM",
                    "schema",
                    "migration",
                    "index",
                    "query optimization",
                ]),
            },
            Audience::Mixed => AudienceProfile {
                name: "Mixed".into(),
                max_grade: 10.0,
                target_ease: 60.0,
                max_sentence_words: 22,
                max_paragraph_words: 120,
                jargon_tolerance: 3.0,
                code_explanation_ratio: 1.5,
                passive_threshold: 15.0,
                requires_definitions: true,
                assumed_known: to_strings(&["computer", "file", "code"]),
            },
        }
    }
}

impl FromStr for Audience {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Audience::Beginner),
            "intermediate" => Ok(Audience::Intermediate),
            "expert" => Ok(Audience::Expert),
            "mixed" => Ok(Audience::Mixed),
            _ => Err(AnalysisError::InvalidAudience(s.to_string())),
        }
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Audience::Beginner => write!(f, "beginner"),
            Audience::Intermediate => write!(f, "intermediate"),
            Audience::Expert => write!(f, "expert"),
            Audience::Mixed => write!(f, "mixed"),
        }
    }
}

/// Grading thresholds for one audience tier
///
/// Resolved once per analysis and never mutated afterwards. Config-file
/// overrides are applied to a clone before analysis starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceProfile {
    pub name: String,
    /// Maximum acceptable Flesch-Kincaid grade level
    pub max_grade: f64,
    /// Target Flesch reading ease
    pub target_ease: f64,
    pub max_sentence_words: usize,
    pub max_paragraph_words: usize,
    /// Acceptable jargon density, percent of total words
    pub jargon_tolerance: f64,
    /// Expected prose lines per code line
    pub code_explanation_ratio: f64,
    /// Maximum percentage of sentences allowed to use passive voice
    pub passive_threshold: f64,
    /// Whether jargon should be defined on first use
    pub requires_definitions: bool,
    /// Terms this audience is assumed to know without a definition
    pub assumed_known: Vec<String>,
}

impl AudienceProfile {
    /// Case-insensitive membership test for the assumed-known set
    pub fn assumes_known(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.assumed_known.iter().any(|t| t.to_lowercase() == lower)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_tiers() {
        assert_eq!("beginner".parse::<Audience>().unwrap(), Audience::Beginner);
        assert_eq!("EXPERT".parse::<Audience>().unwrap(), Audience::Expert);
        assert_eq!("Mixed".parse::<Audience>().unwrap(), Audience::Mixed);
    }

    #[test]
    fn parse_invalid_tier_is_fatal() {
        let err = "novice".parse::<Audience>().unwrap_err();
        assert!(err.to_string().contains("novice"));
    }

    #[test]
    fn beginner_is_stricter_than_expert() {
        let b = Audience::Beginner.profile();
        let e = Audience::Expert.profile();
        assert!(b.max_grade < e.max_grade);
        assert!(b.jargon_tolerance < e.jargon_tolerance);
        assert!(b.passive_threshold < e.passive_threshold);
        assert!(b.requires_definitions);
        assert!(!e.requires_definitions);
    }

    #[test]
    fn assumed_known_is_case_insensitive() {
        let p = Audience::Intermediate.profile();
        assert!(p.assumes_known("api"));
        assert!(p.assumes_known("Function"));
        assert!(!p.assumes_known("kubernetes"));
    }

    #[test]
    fn profile_serde_round_trip() {
        let p = Audience::Mixed.profile();
        let json = serde_json::to_string(&p).unwrap();
        let back: AudienceProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
