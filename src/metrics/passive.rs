//! Passive voice detection
//!
//! Four construction families matched against the cleaned prose. The
//! adjectival-participle exception set suppresses matches like "is required"
//! or "was excited" at match time, before anything is counted. This is a
//! lexical heuristic and tolerates both false positives and negatives.

use crate::lexicon::passive_exceptions;
use crate::models::{round1, Level, PassiveInstance, PassiveMetrics};
use crate::profiles::AudienceProfile;
use crate::segment::SegmentedText;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

const MAX_EXAMPLES: usize = 5;
/// Dedup key length: two matches sharing their first 50 context chars are one
const DEDUP_KEY_CHARS: usize = 50;

fn passive_patterns() -> &'static Vec<Regex> {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // Direct passive: "is/was deployed"
            r"(?i)\b(is|are|was|were|be|been|being)\s+(\w+ed)\b",
            // Perfect passive: "has been deployed"
            r"(?i)\b(has|have|had)\s+been\s+(\w+ed)\b",
            // Modal passive: "should be deployed"
            r"(?i)\b(will|would|should|could|might|may|must)\s+be\s+(\w+ed)\b",
            // Getting passive: "got deployed"
            r"(?i)\b(got|gets|getting)\s+(\w+ed)\b",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("valid passive pattern"))
        .collect()
    })
}

/// Context window around a match, clamped to char boundaries
fn context_snippet(text: &str, start: usize, end: usize) -> String {
    let mut s = start.saturating_sub(30);
    while s > 0 && !text.is_char_boundary(s) {
        s -= 1;
    }
    let mut e = (end + 30).min(text.len());
    while e < text.len() && !text.is_char_boundary(e) {
        e += 1;
    }
    text[s..e].trim().to_string()
}

/// Whether a sentence contains at least one non-excepted passive construction
fn has_passive(sentence: &str) -> bool {
    let exceptions = passive_exceptions();
    passive_patterns().iter().any(|pattern| {
        pattern.captures_iter(sentence).any(|caps| {
            caps.get(2)
                .map(|m| !exceptions.contains(m.as_str().to_lowercase().as_str()))
                .unwrap_or(false)
        })
    })
}

pub fn analyze(seg: &SegmentedText, profile: &AudienceProfile) -> PassiveMetrics {
    let clean = &seg.clean;
    let exceptions = passive_exceptions();

    let mut instances = Vec::new();
    for pattern in passive_patterns() {
        for caps in pattern.captures_iter(clean) {
            let Some(participle) = caps.get(2) else {
                continue;
            };
            if exceptions.contains(participle.as_str().to_lowercase().as_str()) {
                continue;
            }
            let whole = caps.get(0).expect("match group 0");
            instances.push(PassiveInstance {
                matched: whole.as_str().to_string(),
                context: context_snippet(clean, whole.start(), whole.end()),
            });
        }
    }

    // Deduplicate overlapping family matches by context
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::new();
    for inst in instances {
        let key: String = inst.context.chars().take(DEDUP_KEY_CHARS).collect();
        if seen.insert(key) {
            unique.push(inst);
        }
    }

    let passive_sentences = seg.sentences.iter().filter(|s| has_passive(s)).count();
    let percentage = if seg.sentences.is_empty() {
        0.0
    } else {
        passive_sentences as f64 / seg.sentences.len() as f64 * 100.0
    };

    let threshold = profile.passive_threshold;
    let assessment = if percentage > threshold {
        Level::High
    } else if percentage > threshold / 2.0 {
        Level::Medium
    } else {
        Level::Low
    };

    let within_threshold = percentage <= threshold;
    let instances_found = unique.len();
    unique.truncate(MAX_EXAMPLES);

    PassiveMetrics {
        instances: instances_found,
        percentage: round1(percentage),
        examples: unique,
        assessment,
        threshold,
        within_threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::Audience;
    use crate::segment::segment;

    fn run(text: &str, audience: Audience) -> PassiveMetrics {
        analyze(&segment(text), &audience.profile())
    }

    #[test]
    fn direct_passive_detected() {
        let m = run("The service was deployed by the team.", Audience::Beginner);
        assert_eq!(m.instances, 1);
        assert!(m.examples[0].matched.contains("deployed"));
    }

    #[test]
    fn perfect_passive_detected_once() {
        // "been invalidated" also matches the direct family; same context, one hit
        let m = run("The cache has been invalidated.", Audience::Intermediate);
        assert_eq!(m.instances, 1);
        assert_eq!(m.percentage, 100.0);
    }

    #[test]
    fn modal_passive_detected_once() {
        // "be removed" also matches the direct family; same context, one hit
        let m = run("The index should be removed soon.", Audience::Intermediate);
        assert_eq!(m.instances, 1);
        assert_eq!(m.percentage, 100.0);
    }

    #[test]
    fn irregular_participles_are_accepted_false_negatives() {
        // "rebuilt" has no -ed suffix, so no family can match it
        let m = run("The index should be rebuilt soon.", Audience::Intermediate);
        assert_eq!(m.instances, 0);
        assert_eq!(m.percentage, 0.0);
    }

    #[test]
    fn excepted_participles_do_not_count() {
        let m = run(
            "I was excited and interested. The field is required.",
            Audience::Beginner,
        );
        assert_eq!(m.instances, 0);
        assert_eq!(m.percentage, 0.0);
        assert_eq!(m.assessment, Level::Low);
        assert!(m.within_threshold);
    }

    #[test]
    fn expert_threshold_is_more_tolerant() {
        let beginner = run("x.", Audience::Beginner);
        let expert = run("x.", Audience::Expert);
        assert_eq!(beginner.threshold, 15.0);
        assert_eq!(expert.threshold, 25.0);
    }

    #[test]
    fn duplicate_context_counted_once() {
        // "has been deployed" also matches the direct family ("been deployed")
        let m = run("The feature has been deployed.", Audience::Mixed);
        assert_eq!(m.instances, 1);
    }

    #[test]
    fn percentage_counts_sentences_not_matches() {
        let m = run(
            "It was tested and was verified today. The docs are fine.",
            Audience::Intermediate,
        );
        // One of two sentences is passive, regardless of two matches in it
        assert_eq!(m.percentage, 50.0);
    }

    #[test]
    fn active_voice_is_low() {
        let m = run(
            "The team deploys the service. We verify every release.",
            Audience::Beginner,
        );
        assert_eq!(m.instances, 0);
        assert_eq!(m.assessment, Level::Low);
    }
}
