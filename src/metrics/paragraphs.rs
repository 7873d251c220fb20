//! Paragraph shape analysis

use crate::metrics::preview;
use crate::models::{round1, LongUnit, Measured, ParagraphMetrics};
use crate::profiles::AudienceProfile;
use crate::segment::{whitespace_words, SegmentedText};

const MAX_CITED: usize = 3;

pub fn analyze(seg: &SegmentedText, profile: &AudienceProfile) -> Measured<ParagraphMetrics> {
    if seg.paragraphs.is_empty() {
        return Measured::InsufficientContent;
    }

    let lengths: Vec<usize> = seg.paragraphs.iter().map(|p| whitespace_words(p)).collect();
    let max_allowed = profile.max_paragraph_words;

    let mut long_paragraphs = Vec::new();
    let mut over_limit = 0;
    for (paragraph, &len) in seg.paragraphs.iter().zip(&lengths) {
        if len > max_allowed {
            over_limit += 1;
            if long_paragraphs.len() < MAX_CITED {
                long_paragraphs.push(LongUnit {
                    preview: preview(paragraph, 80),
                    word_count: len,
                    over_limit_by: len - max_allowed,
                });
            }
        }
    }

    let mean = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;

    Measured::Ok(ParagraphMetrics {
        total: seg.paragraphs.len(),
        avg_length: round1(mean),
        max_allowed,
        shortest: lengths.iter().copied().min().unwrap_or(0),
        longest: lengths.iter().copied().max().unwrap_or(0),
        over_limit,
        long_paragraphs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::Audience;
    use crate::segment::segment;

    #[test]
    fn paragraphs_within_limit_pass() {
        let seg = segment("First paragraph with a few words.\n\nSecond paragraph, also short.");
        let profile = Audience::Beginner.profile();
        let m = analyze(&seg, &profile);
        let m = m.as_ok().expect("has metrics");
        assert_eq!(m.total, 2);
        assert_eq!(m.over_limit, 0);
        assert!(m.long_paragraphs.is_empty());
    }

    #[test]
    fn oversized_paragraph_reports_overage() {
        // 110 words against beginner's limit of 100
        let body = ["word"; 110].join(" ");
        let seg = segment(&body);
        let profile = Audience::Beginner.profile();
        let m = analyze(&seg, &profile);
        let m = m.as_ok().expect("has metrics");
        assert_eq!(m.over_limit, 1);
        assert_eq!(m.long_paragraphs[0].word_count, 110);
        assert_eq!(m.long_paragraphs[0].over_limit_by, 10);
    }

    #[test]
    fn headings_are_not_paragraphs() {
        let seg = segment("# Only a heading\n\n## Another heading");
        let profile = Audience::Mixed.profile();
        assert!(analyze(&seg, &profile).is_insufficient());
    }
}
