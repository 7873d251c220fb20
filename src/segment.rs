//! Text segmentation: code vs prose, sentences, paragraphs, words
//!
//! The segmenter runs once per analysis and every calculator reads the same
//! `SegmentedText`. Code fences and inline spans are swapped for neutral
//! placeholders so code tokens never skew prose statistics; the extracted
//! blocks are kept for the code-ratio calculator.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

pub const CODE_BLOCK_MARKER: &str = "[CODE_BLOCK]";
pub const INLINE_CODE_MARKER: &str = "[INLINE_CODE]";

fn fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```.*?```").expect("valid fence regex"))
}

fn inline_code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`[^`]+`").expect("valid inline code regex"))
}

fn marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[CODE_BLOCK\]|\[INLINE_CODE\]").expect("valid marker regex"))
}

fn markup_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[#*_\[\]()]").expect("valid markup regex"))
}

fn sentence_split_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Runs of terminal punctuation count as a single boundary
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("valid sentence split regex"))
}

fn paragraph_split_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").expect("valid paragraph split regex"))
}

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z]+").expect("valid word regex"))
}

/// Read-only view of the input shared by all metric calculators
#[derive(Debug, Clone)]
pub struct SegmentedText {
    /// Original input, untouched (structure metrics read this)
    pub raw: String,
    /// Input with code regions replaced by placeholder markers
    pub prose: String,
    /// Prose with markers and markdown punctuation removed, whitespace collapsed
    pub clean: String,
    /// Extracted fenced code blocks, fences included
    pub code_blocks: Vec<String>,
    /// Sentences of the cleaned prose, empties discarded
    pub sentences: Vec<String>,
    /// Paragraphs of the prose, heading-only segments discarded
    pub paragraphs: Vec<String>,
    /// Alphabetic tokens of length >= 2, used for readability counting.
    /// Sentence and paragraph length checks use whitespace word counts
    /// instead, so "a" still counts toward a sentence's length.
    pub words: Vec<String>,
}

impl SegmentedText {
    pub fn has_prose(&self) -> bool {
        !self.words.is_empty() && !self.sentences.is_empty()
    }
}

/// Number of whitespace-separated words; used for length limits
pub fn whitespace_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// All alphabetic tokens, single letters included; the denominator for
/// jargon and hedge density
pub fn alpha_words(text: &str) -> Vec<&str> {
    word_re().find_iter(text).map(|m| m.as_str()).collect()
}

/// Split raw input into the shared read-only view
pub fn segment(input: &str) -> SegmentedText {
    let mut code_blocks = Vec::new();
    for m in fence_re().find_iter(input) {
        code_blocks.push(m.as_str().to_string());
    }

    let prose = fence_re()
        .replace_all(input, format!(" {CODE_BLOCK_MARKER} "))
        .into_owned();
    let prose = inline_code_re()
        .replace_all(&prose, format!(" {INLINE_CODE_MARKER} "))
        .into_owned();

    let clean = marker_re().replace_all(&prose, "");
    let clean = markup_re().replace_all(&clean, "");
    let clean = clean.split_whitespace().collect::<Vec<_>>().join(" ");

    let sentences: Vec<String> = sentence_split_re()
        .split(&clean)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    // Markers are stripped before the emptiness check so a paragraph that
    // held only code does not survive as a one-word placeholder paragraph
    let paragraphs: Vec<String> = paragraph_split_re()
        .split(&prose)
        .map(str::trim)
        .filter(|p| {
            let stripped = marker_re().replace_all(p, "");
            let content = stripped.trim();
            !content.is_empty() && !content.starts_with('#')
        })
        .map(str::to_string)
        .collect();

    let words: Vec<String> = word_re()
        .find_iter(&clean)
        .map(|m| m.as_str().to_string())
        .filter(|w| w.len() > 1)
        .collect();

    debug!(
        code_blocks = code_blocks.len(),
        sentences = sentences.len(),
        paragraphs = paragraphs.len(),
        words = words.len(),
        "segmented input"
    );

    SegmentedText {
        raw: input.to_string(),
        prose,
        clean,
        code_blocks,
        sentences,
        paragraphs,
        words,
    }
}
