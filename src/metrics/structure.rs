//! Document structure and scannability
//!
//! Counts markup elements (headings, lists, links, images) on the raw input
//! and scores scannability against document length. Advisory only: the
//! result feeds suggestions but never the pass/fail score.

use crate::models::{round2, HeadingCounts, StructureMetrics};
use crate::segment::SegmentedText;
use regex::Regex;
use std::sync::OnceLock;

struct StructurePatterns {
    h1: Regex,
    h2: Regex,
    h3: Regex,
    h4: Regex,
    bullet: Regex,
    numbered: Regex,
    link: Regex,
    image: Regex,
    word: Regex,
}

fn patterns() -> &'static StructurePatterns {
    static PATTERNS: OnceLock<StructurePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| StructurePatterns {
        h1: Regex::new(r"(?m)^# [^#]").expect("valid h1 regex"),
        h2: Regex::new(r"(?m)^## [^#]").expect("valid h2 regex"),
        h3: Regex::new(r"(?m)^### [^#]").expect("valid h3 regex"),
        h4: Regex::new(r"(?m)^#### ").expect("valid h4 regex"),
        bullet: Regex::new(r"(?m)^\s*[-*] ").expect("valid bullet regex"),
        numbered: Regex::new(r"(?m)^\s*\d+\. ").expect("valid numbered regex"),
        link: Regex::new(r"\[[^\]]+\]\([^)]+\)").expect("valid link regex"),
        image: Regex::new(r"!\[[^\]]*\]\([^)]+\)").expect("valid image regex"),
        word: Regex::new(r"\w+").expect("valid word regex"),
    })
}

pub fn analyze(seg: &SegmentedText) -> StructureMetrics {
    let p = patterns();
    let raw = &seg.raw;

    let h1 = p.h1.find_iter(raw).count();
    let h2 = p.h2.find_iter(raw).count();
    let h3 = p.h3.find_iter(raw).count();
    let h4 = p.h4.find_iter(raw).count();
    let total_headings = h1 + h2 + h3 + h4;

    let bullet_items = p.bullet.find_iter(raw).count();
    let numbered_items = p.numbered.find_iter(raw).count();
    let links = p.link.find_iter(raw).count();
    let images = p.image.find_iter(raw).count();

    let word_count = p.word.find_iter(raw).count();
    let structural_elements = total_headings + bullet_items + numbered_items;
    let scannability = if word_count > 0 {
        (structural_elements as f64 / (word_count as f64 / 100.0)).min(1.0)
    } else {
        0.0
    };

    StructureMetrics {
        headings: HeadingCounts {
            h1,
            h2,
            h3,
            h4,
            total: total_headings,
        },
        bullet_items,
        numbered_items,
        total_list_items: bullet_items + numbered_items,
        links,
        images,
        scannability: round2(scannability),
        scannable: scannability > 0.3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::segment;

    #[test]
    fn headings_counted_by_level() {
        let text = "# Title\n\nIntro text.\n\n## Section\n\n### Sub\n\n#### Detail\n\nBody.";
        let m = analyze(&segment(text));
        assert_eq!(m.headings.h1, 1);
        assert_eq!(m.headings.h2, 1);
        assert_eq!(m.headings.h3, 1);
        assert_eq!(m.headings.h4, 1);
        assert_eq!(m.headings.total, 4);
    }

    #[test]
    fn list_items_counted() {
        let text = "Steps:\n\n- first\n- second\n* third\n\n1. one\n2. two\n";
        let m = analyze(&segment(text));
        assert_eq!(m.bullet_items, 3);
        assert_eq!(m.numbered_items, 2);
        assert_eq!(m.total_list_items, 5);
    }

    #[test]
    fn links_and_images() {
        let text = "See [the docs](https://example.com) and ![diagram](img.png).";
        let m = analyze(&segment(text));
        // The image's [alt](url) tail also matches the link pattern
        assert_eq!(m.links, 2);
        assert_eq!(m.images, 1);
    }

    #[test]
    fn structured_short_doc_is_scannable() {
        let text = "# Guide\n\nShort intro.\n\n- a\n- b\n- c\n";
        let m = analyze(&segment(text));
        assert!(m.scannability > 0.3);
        assert!(m.scannable);
    }

    #[test]
    fn wall_of_text_is_not_scannable() {
        let text = ["plain words with no markup at all"; 30].join(" ");
        let m = analyze(&segment(&text));
        assert_eq!(m.scannability, 0.0);
        assert!(!m.scannable);
    }
}
