//! Analysis pipeline and assessment engine
//!
//! Orchestrates the calculators and aggregates their results into an overall
//! verdict plus a prioritized suggestion list. Each calculator sees the same
//! `SegmentedText` and profile; none sees another's output.
//!
//! Scoring: six checks are eligible (readability, sentence length, paragraph
//! length, passive voice, jargon, code ratio). A check whose metric reported
//! insufficient content, or a code ratio with no code present, is excluded
//! from both sides of the fraction. Score = passed / applicable * 100;
//! pass/fail cuts at 60. Structure is advisory and never scored.

use crate::errors::AnalysisError;
use crate::metrics::jargon::CustomTerm;
use crate::metrics::{
    code_ratio, hedging, jargon, paragraphs, passive, readability, sentences, structure,
};
use crate::models::{
    round1, AnalysisResult, Assessment, CodeRatio, HedgeFillerMetrics, JargonMetrics, Measured,
    ParagraphMetrics, PassiveMetrics, Priority, RatioBand, ReadabilityScores, SentenceMetrics,
    StructureMetrics, Suggestion, Verdict,
};
use crate::profiles::{Audience, AudienceProfile};
use crate::segment::segment;
use std::collections::HashMap;
use tracing::{debug, info};

/// Score below which content needs revision for its audience
const PASSING_SCORE: f64 = 60.0;
/// Hedge density (%) above which a confidence suggestion fires
const HEDGE_SUGGESTION_THRESHOLD: f64 = 2.0;
/// Filler phrase count above which a conciseness suggestion fires
const FILLER_SUGGESTION_THRESHOLD: usize = 2;

/// Configured analysis entry point
///
/// Holds the resolved profile (registry values plus any project overrides)
/// and project-defined jargon. Cheap to build, reusable across documents.
pub struct Analyzer {
    audience: Audience,
    profile: AudienceProfile,
    extra_jargon: HashMap<String, CustomTerm>,
}

impl Analyzer {
    pub fn new(audience: Audience) -> Self {
        Self {
            audience,
            profile: audience.profile(),
            extra_jargon: HashMap::new(),
        }
    }

    /// Replace the registry profile, e.g. with config-file overrides applied
    pub fn with_profile(mut self, profile: AudienceProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Add project-defined jargon terms on top of the static catalog
    pub fn with_custom_terms(mut self, terms: impl IntoIterator<Item = CustomTerm>) -> Self {
        for term in terms {
            self.extra_jargon.insert(term.term.to_lowercase(), term);
        }
        self
    }

    /// Analyze one document. `source` is a label for reports (file name).
    pub fn analyze(&self, text: &str, source: &str) -> Result<AnalysisResult, AnalysisError> {
        let seg = segment(text);
        if seg.code_blocks.is_empty() && seg.words.is_empty() && seg.sentences.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let profile = &self.profile;
        let readability = readability::analyze(&seg, profile);
        let sentences = sentences::analyze(&seg, profile);
        let paragraphs = paragraphs::analyze(&seg, profile);
        let passive = passive::analyze(&seg, profile);
        let jargon = jargon::analyze(&seg, profile, &self.extra_jargon);
        let hedging = hedging::analyze(&seg);
        let code = code_ratio::analyze(&seg, profile);
        let structure = structure::analyze(&seg);

        let assessment = assess(
            profile,
            &readability,
            &sentences,
            &paragraphs,
            &passive,
            &jargon,
            &code,
        );
        let suggestions = suggest(
            profile,
            &readability,
            &sentences,
            &paragraphs,
            &passive,
            &jargon,
            &hedging,
            &code,
            &structure,
        );

        let passed = assessment.score >= PASSING_SCORE;
        info!(
            source,
            audience = %self.audience,
            score = assessment.score,
            passed,
            suggestions = suggestions.len(),
            "analysis complete"
        );

        Ok(AnalysisResult {
            source: source.to_string(),
            audience: self.audience,
            profile: profile.clone(),
            total_chars: text.chars().count(),
            prose_chars: seg.prose.chars().count(),
            readability,
            sentences,
            paragraphs,
            passive,
            jargon,
            hedging,
            code,
            structure,
            assessment,
            suggestions,
            passed,
        })
    }
}

/// Analyze `text` for the given audience tier with registry defaults.
///
/// This is the single entry point the rest of the world needs; everything
/// else on [`Analyzer`] is configuration.
pub fn analyze(text: &str, audience: Audience) -> Result<AnalysisResult, AnalysisError> {
    Analyzer::new(audience).analyze(text, "document")
}

fn assess(
    profile: &AudienceProfile,
    readability: &Measured<ReadabilityScores>,
    sentences: &Measured<SentenceMetrics>,
    paragraphs: &Measured<ParagraphMetrics>,
    passive: &PassiveMetrics,
    jargon: &JargonMetrics,
    code: &CodeRatio,
) -> Assessment {
    let mut c = Checks::default();

    match readability.as_ok() {
        Some(r) => c.record(
            r.meets_audience_target,
            "Readability matches audience level".into(),
            format!("Content may be too complex for {} audience", profile.name),
        ),
        None => c.note("Too little prose to measure readability".into()),
    }

    match sentences.as_ok() {
        Some(s) => c.record(
            s.over_limit == 0,
            "Sentence lengths are appropriate".into(),
            format!("{} sentences exceed recommended length", s.over_limit),
        ),
        None => c.note("Too little prose to measure sentence shape".into()),
    }

    match paragraphs.as_ok() {
        Some(p) => c.record(
            p.over_limit == 0,
            "Paragraph lengths are appropriate".into(),
            format!("{} paragraphs are too long", p.over_limit),
        ),
        None => c.note("Too little prose to measure paragraph shape".into()),
    }

    c.record(
        passive.within_threshold,
        "Active voice usage is good".into(),
        "Consider reducing passive voice".into(),
    );

    c.record(
        jargon.within_tolerance,
        "Jargon level is appropriate for audience".into(),
        "Jargon density may be too high for audience".into(),
    );
    if !jargon.undefined.is_empty() {
        c.note(format!(
            "{} terms may need definitions",
            jargon.undefined.len()
        ));
    }

    if let Some(m) = code.as_measured() {
        c.record(
            m.assessment == RatioBand::Good,
            "Good balance of code and explanation".into(),
            "May need more explanation around code blocks".into(),
        );
    }

    debug!(
        passed = c.passed,
        applicable = c.applicable,
        "audience checks evaluated"
    );

    let score = if c.applicable > 0 {
        round1(c.passed as f64 / c.applicable as f64 * 100.0)
    } else {
        0.0
    };

    Assessment {
        overall: Verdict::from_score(score),
        score,
        checks_passed: c.passed,
        checks_applicable: c.applicable,
        strengths: c.strengths,
        issues: c.issues,
    }
}

/// Running tally of scored checks plus narrative strengths and issues
#[derive(Default)]
struct Checks {
    passed: usize,
    applicable: usize,
    strengths: Vec<String>,
    issues: Vec<String>,
}

impl Checks {
    /// One scored check: counts toward the denominator either way
    fn record(&mut self, ok: bool, strength: String, issue: String) {
        self.applicable += 1;
        if ok {
            self.passed += 1;
            self.strengths.push(strength);
        } else {
            self.issues.push(issue);
        }
    }

    /// An unscored observation; shows in issues but never in the score
    fn note(&mut self, issue: String) {
        self.issues.push(issue);
    }
}

#[allow(clippy::too_many_arguments)]
fn suggest(
    profile: &AudienceProfile,
    readability: &Measured<ReadabilityScores>,
    sentences: &Measured<SentenceMetrics>,
    paragraphs: &Measured<ParagraphMetrics>,
    passive: &PassiveMetrics,
    jargon: &JargonMetrics,
    hedging: &HedgeFillerMetrics,
    code: &CodeRatio,
    structure: &StructureMetrics,
) -> Vec<Suggestion> {
    let mut out = Vec::new();
    let mut push = |category: &str, priority: Priority, issue: String, fix: &str| {
        out.push(Suggestion {
            category: category.to_string(),
            priority,
            issue,
            fix: fix.to_string(),
        });
    };

    if let Some(r) = readability.as_ok() {
        if !r.meets_audience_target {
            push(
                "Readability",
                Priority::High,
                format!(
                    "Grade level {} exceeds target {}",
                    r.flesch_kincaid_grade, profile.max_grade
                ),
                "Use shorter sentences and simpler words. Break complex ideas into steps.",
            );
        }
    }

    if let Some(s) = sentences.as_ok() {
        if s.over_limit > 0 {
            push(
                "Sentence Length",
                Priority::Medium,
                format!(
                    "{} sentences exceed {} words",
                    s.over_limit, profile.max_sentence_words
                ),
                "Break long sentences at natural pause points. One idea per sentence.",
            );
        }
        if s.variation_score < 0.3 {
            push(
                "Sentence Variety",
                Priority::Low,
                "Sentences have similar lengths".into(),
                "Mix short punchy sentences with longer explanatory ones.",
            );
        }
    }

    if let Some(p) = paragraphs.as_ok() {
        if p.over_limit > 0 {
            push(
                "Paragraph Length",
                Priority::Medium,
                format!(
                    "{} paragraphs exceed {} words",
                    p.over_limit, profile.max_paragraph_words
                ),
                "Break paragraphs at topic shifts. One main point per paragraph.",
            );
        }
    }

    if !passive.within_threshold {
        push(
            "Active Voice",
            Priority::Medium,
            format!(
                "{}% passive voice (target: <{}%)",
                passive.percentage, passive.threshold
            ),
            "Rewrite passive sentences. 'X is done by Y' -> 'Y does X'",
        );
    }

    if !jargon.within_tolerance {
        push(
            "Jargon",
            Priority::High,
            format!(
                "Jargon density {}% exceeds tolerance {}%",
                jargon.density, jargon.tolerance
            ),
            "Define technical terms on first use or use simpler alternatives.",
        );
    }
    if profile.requires_definitions && !jargon.undefined.is_empty() {
        let terms: Vec<&str> = jargon
            .undefined
            .iter()
            .take(3)
            .map(|u| u.term.as_str())
            .collect();
        push(
            "Definitions",
            Priority::Medium,
            format!("Terms may need definitions: {}", terms.join(", ")),
            "Add brief definitions on first use: 'X (a type of Y that does Z)'",
        );
    }

    if hedging.hedge_density > HEDGE_SUGGESTION_THRESHOLD {
        push(
            "Confidence",
            Priority::Low,
            "Writing contains many hedge words (maybe, perhaps, somewhat)".into(),
            "Be more direct. State things confidently or omit uncertain claims.",
        );
    }
    if hedging.total_filler_phrases > FILLER_SUGGESTION_THRESHOLD {
        push(
            "Conciseness",
            Priority::Low,
            format!("{} filler phrases found", hedging.total_filler_phrases),
            "Replace wordy phrases: 'in order to' -> 'to', 'due to the fact that' -> 'because'",
        );
    }

    let word_count = readability.as_ok().map(|r| r.word_count).unwrap_or(0);
    if word_count > 500 && structure.headings.total < 3 {
        push(
            "Structure",
            Priority::Medium,
            "Few headings for content length".into(),
            "Add subheadings every 200-300 words for scannability.",
        );
    }
    if word_count > 300 && structure.total_list_items == 0 {
        push(
            "Formatting",
            Priority::Low,
            "No lists found in long content".into(),
            "Use bullet points for sequences, features, or key points.",
        );
    }

    if let Some(c) = code.as_measured() {
        if c.assessment == RatioBand::VeryLow {
            push(
                "Code Explanation",
                Priority::High,
                "Insufficient explanation around code blocks".into(),
                &format!(
                    "Add {:.0} lines of explanation per line of code for {} readers.",
                    profile.code_explanation_ratio, profile.name
                ),
            );
        }
    }

    // Stable sort: high first, generation order within a level
    out.sort_by_key(|s| s.priority);
    out
}
