//! Jargon density and first-use definition analysis
//!
//! Scans prose words against the static catalog (plus any project-configured
//! extra terms) and, for audiences that require definitions, probes for an
//! in-text definition near the term. The definition heuristic is proximity
//! patterns only; definitions phrased differently are missed and that is an
//! accepted limitation.

use crate::lexicon::{jargon_catalog, JargonTerm};
use crate::models::{round2, JargonMetrics, Level, TermCount, UndefinedTerm};
use crate::profiles::AudienceProfile;
use crate::segment::{alpha_words, SegmentedText};
use regex::Regex;
use std::collections::HashMap;

const MAX_MOST_USED: usize = 10;
const MAX_UNDEFINED: usize = 10;

/// A project-defined jargon term loaded from config
#[derive(Debug, Clone)]
pub struct CustomTerm {
    pub term: String,
    pub category: String,
    pub complexity: u8,
}

/// Resolved catalog entry, from either the static catalog or config
struct Entry<'a> {
    term: &'a str,
    category: &'a str,
    complexity: u8,
}

fn lookup<'a>(word: &str, extra: &'a HashMap<String, CustomTerm>) -> Option<Entry<'a>> {
    if let Some(t) = jargon_catalog().get(word) {
        let JargonTerm {
            term,
            category,
            complexity,
            ..
        } = *t;
        return Some(Entry {
            term,
            category,
            complexity,
        });
    }
    extra.get(word).map(|t| Entry {
        term: t.term.as_str(),
        category: t.category.as_str(),
        complexity: t.complexity,
    })
}

/// Whether `clean` defines `word` nearby, using proximity patterns:
/// "term is/are/refers to/means", "term, which/that is/are",
/// "called/known as/termed term"
fn is_defined(clean: &str, word: &str) -> bool {
    let escaped = regex::escape(word);
    let patterns = [
        format!(r"(?i)\b{escaped}\b[,\s]+(?:is|are|refers? to|means?)"),
        format!(r"(?i)\b{escaped}\b[,\s]+(?:which|that)\s+(?:is|are)"),
        format!(r"(?i)(?:called|known as|termed)\s+\b{escaped}\b"),
    ];
    patterns.iter().any(|p| {
        Regex::new(p)
            .map(|re| re.is_match(clean))
            .unwrap_or(false)
    })
}

pub fn analyze(
    seg: &SegmentedText,
    profile: &AudienceProfile,
    extra: &HashMap<String, CustomTerm>,
) -> JargonMetrics {
    let words = alpha_words(&seg.clean);

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut undefined: Vec<UndefinedTerm> = Vec::new();
    // One definition probe per unique term, however often it repeats
    let mut definition_cache: HashMap<String, bool> = HashMap::new();

    for word in &words {
        let lower = word.to_lowercase();
        let Some(entry) = lookup(&lower, extra) else {
            continue;
        };
        *counts.entry(entry.term.to_string()).or_insert(0) += 1;

        if profile.requires_definitions
            && !profile.assumes_known(&lower)
            && !undefined.iter().any(|u| u.term == entry.term)
        {
            let defined = *definition_cache
                .entry(lower.clone())
                .or_insert_with(|| is_defined(&seg.clean, &lower));
            if !defined {
                undefined.push(UndefinedTerm {
                    term: entry.term.to_string(),
                    category: entry.category.to_string(),
                    complexity: entry.complexity,
                    suggestion: format!("Define '{}' on first use", entry.term),
                });
            }
        }
    }

    let instances: usize = counts.values().sum();
    let density = if words.is_empty() {
        0.0
    } else {
        instances as f64 / words.len() as f64 * 100.0
    };

    let tolerance = profile.jargon_tolerance;
    let assessment = if density > tolerance * 1.5 {
        Level::High
    } else if density > tolerance {
        Level::Medium
    } else {
        Level::Low
    };

    // Deterministic top-N: count descending, then term ascending
    let mut most_used: Vec<TermCount> = counts
        .iter()
        .map(|(term, &count)| TermCount {
            term: term.clone(),
            count,
        })
        .collect();
    most_used.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
    most_used.truncate(MAX_MOST_USED);

    undefined.truncate(MAX_UNDEFINED);

    JargonMetrics {
        instances,
        unique_terms: counts.len(),
        density: round2(density),
        tolerance,
        within_tolerance: density <= tolerance,
        most_used,
        undefined,
        assessment,
    }
}
