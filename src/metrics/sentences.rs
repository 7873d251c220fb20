//! Sentence shape analysis
//!
//! Word-count distribution plus a normalized variation score. Good prose
//! mixes short and long sentences; a low variation score flags monotonous
//! rhythm.

use crate::metrics::preview;
use crate::models::{round1, round2, LongUnit, Measured, SentenceMetrics};
use crate::profiles::AudienceProfile;
use crate::segment::{whitespace_words, SegmentedText};

/// How many offenders to keep for citation in suggestions
const MAX_CITED: usize = 5;

pub fn analyze(seg: &SegmentedText, profile: &AudienceProfile) -> Measured<SentenceMetrics> {
    if seg.sentences.is_empty() {
        return Measured::InsufficientContent;
    }

    let lengths: Vec<usize> = seg.sentences.iter().map(|s| whitespace_words(s)).collect();
    let max_allowed = profile.max_sentence_words;

    let mut long_sentences = Vec::new();
    let mut over_limit = 0;
    for (sentence, &len) in seg.sentences.iter().zip(&lengths) {
        if len > max_allowed {
            over_limit += 1;
            if long_sentences.len() < MAX_CITED {
                long_sentences.push(LongUnit {
                    preview: preview(sentence, 100),
                    word_count: len,
                    over_limit_by: len - max_allowed,
                });
            }
        }
    }

    let mean = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
    let variance = lengths
        .iter()
        .map(|&l| (l as f64 - mean).powi(2))
        .sum::<f64>()
        / lengths.len() as f64;
    let std_dev = variance.sqrt();
    let variation_score = if mean > 0.0 {
        (std_dev / mean).min(1.0)
    } else {
        0.0
    };

    Measured::Ok(SentenceMetrics {
        total: seg.sentences.len(),
        avg_length: round1(mean),
        max_allowed,
        shortest: lengths.iter().copied().min().unwrap_or(0),
        longest: lengths.iter().copied().max().unwrap_or(0),
        over_limit,
        long_sentences,
        variation_score: round2(variation_score),
        variation_assessment: if variation_score > 0.3 {
            "Good variety".to_string()
        } else {
            "Could use more variety".to_string()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::Audience;
    use crate::segment::segment;

    #[test]
    fn counts_over_limit_with_exact_overage() {
        // 25 words in one sentence against beginner's limit of 20
        let long = format!("{} done.", ["word"; 24].join(" "));
        let seg = segment(&format!("Short one. {long}"));
        let profile = Audience::Beginner.profile();
        let m = analyze(&seg, &profile);
        let m = m.as_ok().expect("has metrics");
        assert_eq!(m.over_limit, 1);
        assert_eq!(m.long_sentences.len(), 1);
        assert_eq!(m.long_sentences[0].word_count, 25);
        assert_eq!(m.long_sentences[0].over_limit_by, 5);
    }

    #[test]
    fn uniform_lengths_score_low_variation() {
        let seg = segment("One two three. Four five six. Seven eight nine.");
        let profile = Audience::Intermediate.profile();
        let m = analyze(&seg, &profile);
        let m = m.as_ok().expect("has metrics");
        assert_eq!(m.variation_score, 0.0);
        assert_eq!(m.variation_assessment, "Could use more variety");
    }

    #[test]
    fn varied_lengths_score_high_variation() {
        let seg = segment(
            "Yes. The deployment pipeline validates every artifact before anything \
             reaches production and rolls back automatically on failure. No.",
        );
        let profile = Audience::Expert.profile();
        let m = analyze(&seg, &profile);
        let m = m.as_ok().expect("has metrics");
        assert!(m.variation_score > 0.3);
        assert_eq!(m.variation_assessment, "Good variety");
    }

    #[test]
    fn no_sentences_is_insufficient() {
        let seg = segment("```\ncode only\n```");
        let profile = Audience::Mixed.profile();
        assert!(analyze(&seg, &profile).is_insufficient());
    }

    #[test]
    fn cited_offenders_capped() {
        let long = format!("{} end.", ["token"; 30].join(" "));
        let text = std::iter::repeat(long.as_str())
            .take(8)
            .collect::<Vec<_>>()
            .join(" ");
        let seg = segment(&text);
        let profile = Audience::Beginner.profile();
        let m = analyze(&seg, &profile);
        let m = m.as_ok().expect("has metrics");
        assert_eq!(m.over_limit, 8);
        assert_eq!(m.long_sentences.len(), 5);
    }
}
