//! Core data models for prosegrade
//!
//! These records are what the metric calculators produce and what the
//! assessment engine aggregates into the final `AnalysisResult`. Everything
//! here is plain serde data: serializing a result and reading it back yields
//! the same scores, since nothing in the scoring path carries timestamps or
//! other run-dependent state.

use crate::profiles::{Audience, AudienceProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Priority levels for revision suggestions
///
/// Variant order matters: a stable sort by `Priority` puts high-priority
/// suggestions first while keeping generation order within each level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// An actionable revision suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: String,
    pub priority: Priority,
    pub issue: String,
    pub fix: String,
}

/// Qualitative band for density-style metrics (passive voice, jargon, hedging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Low => write!(f, "Low"),
            Level::Medium => write!(f, "Medium"),
            Level::High => write!(f, "High"),
        }
    }
}

/// Outcome of a calculator that needs a minimum amount of prose.
///
/// `InsufficientContent` is a first-class result, not an error: the assessment
/// engine drops the metric from the scored checks instead of counting it as a
/// pass or a fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Measured<T> {
    Ok(T),
    InsufficientContent,
}

impl<T> Measured<T> {
    pub fn as_ok(&self) -> Option<&T> {
        match self {
            Measured::Ok(v) => Some(v),
            Measured::InsufficientContent => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Measured::InsufficientContent)
    }
}

/// Readability scores over the cleaned prose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScores {
    pub word_count: usize,
    pub sentence_count: usize,
    pub syllable_count: u32,
    pub avg_sentence_length: f64,
    pub avg_syllables_per_word: f64,
    /// Flesch Reading Ease, clamped to [0, 100]
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid grade level, floored at 0
    pub flesch_kincaid_grade: f64,
    /// General band, independent of audience ("Easy to read (plain English)", ...)
    pub general_band: String,
    /// Audience-relative verdict ("Good fit for Beginner audience", ...)
    pub audience_fit: String,
    pub meets_audience_target: bool,
}

/// A sentence or paragraph exceeding the audience's length limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongUnit {
    pub preview: String,
    pub word_count: usize,
    pub over_limit_by: usize,
}

/// Sentence shape statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceMetrics {
    pub total: usize,
    pub avg_length: f64,
    pub max_allowed: usize,
    pub shortest: usize,
    pub longest: usize,
    pub over_limit: usize,
    /// First few offenders, for direct citation in suggestions
    pub long_sentences: Vec<LongUnit>,
    /// stddev / mean, capped at 1.0; low values flag monotonous rhythm
    pub variation_score: f64,
    pub variation_assessment: String,
}

/// Paragraph shape statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphMetrics {
    pub total: usize,
    pub avg_length: f64,
    pub max_allowed: usize,
    pub shortest: usize,
    pub longest: usize,
    pub over_limit: usize,
    pub long_paragraphs: Vec<LongUnit>,
}

/// One passive-voice construction with its surrounding context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassiveInstance {
    pub matched: String,
    pub context: String,
}

/// Passive voice detection results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassiveMetrics {
    pub instances: usize,
    /// Percentage of sentences containing at least one non-excepted match
    pub percentage: f64,
    pub examples: Vec<PassiveInstance>,
    pub assessment: Level,
    pub threshold: f64,
    pub within_threshold: bool,
}

/// A term and how often it appeared
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// A catalog term used without an in-text definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndefinedTerm {
    pub term: String,
    pub category: String,
    pub complexity: u8,
    pub suggestion: String,
}

/// Jargon analysis results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JargonMetrics {
    pub instances: usize,
    pub unique_terms: usize,
    /// Jargon instances / total words, as a percentage
    pub density: f64,
    pub tolerance: f64,
    pub within_tolerance: bool,
    pub most_used: Vec<TermCount>,
    pub undefined: Vec<UndefinedTerm>,
    pub assessment: Level,
}

/// A wordy phrase with its shorter replacement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillerMatch {
    pub phrase: String,
    pub replacement: String,
    pub offset: usize,
}

/// Hedge word and filler phrase results (one calculator, two views)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HedgeFillerMetrics {
    pub total_hedge_words: usize,
    pub hedge_density: f64,
    pub by_category: BTreeMap<String, usize>,
    pub most_common: Vec<TermCount>,
    pub hedge_assessment: Level,
    pub total_filler_phrases: usize,
    /// Sum of (phrase word count - 1) across matches
    pub words_saveable: usize,
    pub filler_matches: Vec<FillerMatch>,
}

/// Code-to-prose balance band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioBand {
    Good,
    Low,
    VeryLow,
}

impl std::fmt::Display for RatioBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatioBand::Good => write!(f, "Good"),
            RatioBand::Low => write!(f, "Low"),
            RatioBand::VeryLow => write!(f, "Very low"),
        }
    }
}

/// Code ratio statistics for documents that contain code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeRatioMetrics {
    pub code_blocks: usize,
    pub code_lines: usize,
    pub prose_lines: usize,
    /// Prose lines per code line
    pub ratio: f64,
    pub expected_ratio: f64,
    pub assessment: RatioBand,
    /// Fence-tag language counts, e.g. {"rust": 2}
    pub languages: BTreeMap<String, usize>,
}

/// Code ratio outcome; a document without code is not a failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum CodeRatio {
    NotApplicable,
    Measured(CodeRatioMetrics),
}

impl CodeRatio {
    pub fn as_measured(&self) -> Option<&CodeRatioMetrics> {
        match self {
            CodeRatio::Measured(m) => Some(m),
            CodeRatio::NotApplicable => None,
        }
    }
}

/// Heading counts by level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub h4: usize,
    pub total: usize,
}

/// Structural scannability results (advisory, never scored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureMetrics {
    pub headings: HeadingCounts,
    pub bullet_items: usize,
    pub numbered_items: usize,
    pub total_list_items: usize,
    pub links: usize,
    pub images: usize,
    /// min(1.0, structural elements / (words / 100))
    pub scannability: f64,
    pub scannable: bool,
}

/// Overall verdict bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Excellent,
    Good,
    NeedsImprovement,
    SignificantRevision,
}

impl Verdict {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Verdict::Excellent
        } else if score >= 60.0 {
            Verdict::Good
        } else if score >= 40.0 {
            Verdict::NeedsImprovement
        } else {
            Verdict::SignificantRevision
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Excellent => write!(f, "Excellent"),
            Verdict::Good => write!(f, "Good"),
            Verdict::NeedsImprovement => write!(f, "Needs improvement"),
            Verdict::SignificantRevision => write!(f, "Significant revision needed"),
        }
    }
}

/// Aggregated audience-fit assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub overall: Verdict,
    /// checks_passed / checks_applicable, as a percentage
    pub score: f64,
    pub checks_passed: usize,
    /// Checks with enough content to be scored; insufficient-content metrics
    /// and a no-code code ratio are excluded rather than counted either way
    pub checks_applicable: usize,
    pub strengths: Vec<String>,
    pub issues: Vec<String>,
}

/// Terminal output of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub source: String,
    pub audience: Audience,
    pub profile: AudienceProfile,
    pub total_chars: usize,
    pub prose_chars: usize,
    pub readability: Measured<ReadabilityScores>,
    pub sentences: Measured<SentenceMetrics>,
    pub paragraphs: Measured<ParagraphMetrics>,
    pub passive: PassiveMetrics,
    pub jargon: JargonMetrics,
    pub hedging: HedgeFillerMetrics,
    pub code: CodeRatio,
    pub structure: StructureMetrics,
    pub assessment: Assessment,
    /// Stable-sorted by priority; ties keep generation order
    pub suggestions: Vec<Suggestion>,
    pub passed: bool,
}

/// Round to one decimal place for presentation-stable scores
pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Round to two decimal places
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
