//! Code-to-prose ratio analysis
//!
//! Audiences differ in how much explanation they expect around code: two
//! prose lines per code line for beginners, half a line for experts. A
//! document without code is explicitly not applicable, which is different
//! from a document that under-explains its code.

use crate::models::{round2, CodeRatio, CodeRatioMetrics, RatioBand};
use crate::profiles::AudienceProfile;
use crate::segment::{SegmentedText, CODE_BLOCK_MARKER, INLINE_CODE_MARKER};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn fence_lang_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^```(\w+)").expect("valid fence language regex"))
}

/// Lines of actual prose: placeholder-only lines, blanks, and headings don't count
fn prose_line_count(prose: &str) -> usize {
    prose
        .lines()
        .filter(|line| {
            let stripped = line
                .replace(CODE_BLOCK_MARKER, "")
                .replace(INLINE_CODE_MARKER, "");
            let trimmed = stripped.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .count()
}

pub fn analyze(seg: &SegmentedText, profile: &AudienceProfile) -> CodeRatio {
    if seg.code_blocks.is_empty() {
        return CodeRatio::NotApplicable;
    }

    let code_lines: usize = seg
        .code_blocks
        .iter()
        .map(|block| block.matches('\n').count())
        .sum();
    if code_lines == 0 {
        // Empty fences carry no code worth explaining
        return CodeRatio::NotApplicable;
    }

    let prose_lines = prose_line_count(&seg.prose);
    let ratio = prose_lines as f64 / code_lines as f64;
    let expected = profile.code_explanation_ratio;

    let assessment = if ratio >= expected {
        RatioBand::Good
    } else if ratio >= expected * 0.5 {
        RatioBand::Low
    } else {
        RatioBand::VeryLow
    };

    let mut languages: BTreeMap<String, usize> = BTreeMap::new();
    for block in &seg.code_blocks {
        if let Some(first_line) = block.lines().next() {
            if let Some(caps) = fence_lang_re().captures(first_line) {
                *languages.entry(caps[1].to_string()).or_insert(0) += 1;
            }
        }
    }

    CodeRatio::Measured(CodeRatioMetrics {
        code_blocks: seg.code_blocks.len(),
        code_lines,
        prose_lines,
        ratio: round2(ratio),
        expected_ratio: expected,
        assessment,
        languages,
    })
}
