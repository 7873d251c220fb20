//! Hedge word and filler phrase detection
//!
//! Hedging makes technical writing sound uncertain; fillers pad it. Both are
//! matched against the lowercased clean prose: single words as whole words,
//! multi-word entries as whole phrases.

use crate::lexicon::{filler_phrases, hedge_words};
use crate::models::{round2, FillerMatch, HedgeFillerMetrics, Level, TermCount};
use crate::segment::{alpha_words, SegmentedText};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

const MAX_COMMON: usize = 5;
const MAX_FILLER_SHOWN: usize = 10;

fn hedge_matchers() -> &'static Vec<(&'static str, &'static str, Regex)> {
    static MATCHERS: OnceLock<Vec<(&'static str, &'static str, Regex)>> = OnceLock::new();
    MATCHERS.get_or_init(|| {
        hedge_words()
            .iter()
            .map(|&(word, category)| {
                let re = Regex::new(&format!(r"\b{}\b", regex::escape(word)))
                    .expect("valid hedge pattern");
                (word, category, re)
            })
            .collect()
    })
}

fn filler_matchers() -> &'static Vec<(&'static str, &'static str, Regex)> {
    static MATCHERS: OnceLock<Vec<(&'static str, &'static str, Regex)>> = OnceLock::new();
    MATCHERS.get_or_init(|| {
        filler_phrases()
            .iter()
            .map(|&(phrase, replacement)| {
                let re = Regex::new(&format!(r"\b{}\b", regex::escape(phrase)))
                    .expect("valid filler pattern");
                (phrase, replacement, re)
            })
            .collect()
    })
}

pub fn analyze(seg: &SegmentedText) -> HedgeFillerMetrics {
    let clean_lower = seg.clean.to_lowercase();

    let mut found: Vec<TermCount> = Vec::new();
    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    for (word, category, re) in hedge_matchers() {
        let count = re.find_iter(&clean_lower).count();
        if count > 0 {
            found.push(TermCount {
                term: word.to_string(),
                count,
            });
            *by_category.entry(category.to_string()).or_insert(0) += count;
        }
    }

    let total_hedges: usize = found.iter().map(|t| t.count).sum();
    let word_count = alpha_words(&seg.clean).len();
    let density = if word_count == 0 {
        0.0
    } else {
        total_hedges as f64 / word_count as f64 * 100.0
    };

    let assessment = if density > 3.0 {
        Level::High
    } else if density > 1.5 {
        Level::Medium
    } else {
        Level::Low
    };

    found.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
    found.truncate(MAX_COMMON);

    let mut fillers: Vec<FillerMatch> = Vec::new();
    for (phrase, replacement, re) in filler_matchers() {
        for m in re.find_iter(&clean_lower) {
            fillers.push(FillerMatch {
                phrase: phrase.to_string(),
                replacement: replacement.to_string(),
                offset: m.start(),
            });
        }
    }

    // Most replacements collapse the phrase to one word or nothing
    let words_saveable: usize = fillers
        .iter()
        .map(|f| f.phrase.split_whitespace().count().saturating_sub(1))
        .sum();
    let total_filler_phrases = fillers.len();
    fillers.sort_by_key(|f| f.offset);
    fillers.truncate(MAX_FILLER_SHOWN);

    HedgeFillerMetrics {
        total_hedge_words: total_hedges,
        hedge_density: round2(density),
        by_category,
        most_common: found,
        hedge_assessment: assessment,
        total_filler_phrases,
        words_saveable,
        filler_matches: fillers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::segment;

    fn run(text: &str) -> HedgeFillerMetrics {
        analyze(&segment(text))
    }

    #[test]
    fn hedge_words_counted_by_category() {
        let m = run("Maybe this works. It is probably fine, really.");
        assert_eq!(m.total_hedge_words, 3);
        assert_eq!(m.by_category.get("uncertainty"), Some(&2));
        assert_eq!(m.by_category.get("intensifier"), Some(&1));
    }

    #[test]
    fn multi_word_hedges_match_as_phrases() {
        let m = run("This is kind of slow and a bit awkward.");
        assert_eq!(m.total_hedge_words, 2);
        assert!(m.most_common.iter().any(|t| t.term == "kind of"));
    }

    #[test]
    fn hedge_density_bands() {
        // 2 hedges in 8 words -> 25% -> High
        let high = run("This is maybe fine and probably works anyway.");
        assert_eq!(high.hedge_assessment, Level::High);

        let low = run(
            "The compiler rejects invalid programs. The linker resolves symbols. \
             The loader maps segments. Tests cover each stage in the deployment pipeline \
             and every failure stops the release train immediately.",
        );
        assert_eq!(low.hedge_assessment, Level::Low);
    }

    #[test]
    fn filler_phrases_record_replacement_and_offset() {
        let m = run("In order to deploy, push the tag.");
        assert_eq!(m.total_filler_phrases, 1);
        assert_eq!(m.filler_matches[0].phrase, "in order to");
        assert_eq!(m.filler_matches[0].replacement, "to");
        assert_eq!(m.filler_matches[0].offset, 0);
        // "in order to" -> "to" saves two words
        assert_eq!(m.words_saveable, 2);
    }

    #[test]
    fn multiple_fillers_sum_savings() {
        let m = run("It should be noted that we rolled back in order to recover.");
        assert_eq!(m.total_filler_phrases, 2);
        assert_eq!(m.words_saveable, 4 + 2);
    }

    #[test]
    fn empty_prose_is_quiet() {
        let m = run("");
        assert_eq!(m.total_hedge_words, 0);
        assert_eq!(m.hedge_density, 0.0);
        assert_eq!(m.hedge_assessment, Level::Low);
        assert_eq!(m.total_filler_phrases, 0);
    }
}
