//! Text (terminal) reporter with colors and formatting

use crate::models::{AnalysisResult, Level, Priority, RatioBand, Verdict};
use anyhow::Result;

/// Verdict colors (ANSI escape codes)
fn verdict_color(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Excellent => "\x1b[32m",          // Green
        Verdict::Good => "\x1b[92m",               // Light green
        Verdict::NeedsImprovement => "\x1b[33m",   // Yellow
        Verdict::SignificantRevision => "\x1b[31m", // Red
    }
}

/// Priority colors
fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "\x1b[91m",   // Light red
        Priority::Medium => "\x1b[33m", // Yellow
        Priority::Low => "\x1b[34m",    // Blue
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

/// Priority tag
fn priority_tag(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "[H]",
        Priority::Medium => "[M]",
        Priority::Low => "[L]",
    }
}

fn level_note(level: Level) -> &'static str {
    match level {
        Level::Low => "low",
        Level::Medium => "elevated",
        Level::High => "high",
    }
}

/// Render the result as formatted terminal output
pub fn render(result: &AnalysisResult) -> Result<String> {
    let mut out = String::new();
    let a = &result.assessment;
    let verdict_c = verdict_color(a.overall);

    out.push_str(&format!("\n{BOLD}Prosegrade Analysis{RESET}  {DIM}{}{RESET}\n", result.source));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Audience: {BOLD}{}{RESET}  Score: {BOLD}{:.1}/100{RESET}  Verdict: {verdict_c}{BOLD}{}{RESET}  ({}/{} checks)\n\n",
        result.profile.name, a.score, a.overall, a.checks_passed, a.checks_applicable
    ));

    // Readability
    out.push_str(&format!("{BOLD}READABILITY{RESET}\n"));
    match result.readability.as_ok() {
        Some(r) => {
            out.push_str(&format!(
                "  Reading ease: {:.1}  Grade level: {:.1} (target: ≤{:.0})\n",
                r.flesch_reading_ease, r.flesch_kincaid_grade, result.profile.max_grade
            ));
            out.push_str(&format!("  {}. {}\n", r.general_band, r.audience_fit));
        }
        None => out.push_str(&format!("  {DIM}Not enough prose to measure{RESET}\n")),
    }
    out.push('\n');

    // Shape
    out.push_str(&format!("{BOLD}SHAPE{RESET}\n"));
    if let Some(s) = result.sentences.as_ok() {
        out.push_str(&format!(
            "  Sentences: {} (avg {:.1} words, max {}); {} over the {}-word limit\n",
            s.total, s.avg_length, s.longest, s.over_limit, s.max_allowed
        ));
        out.push_str(&format!(
            "  Variation: {:.2} ({})\n",
            s.variation_score, s.variation_assessment
        ));
    }
    if let Some(p) = result.paragraphs.as_ok() {
        out.push_str(&format!(
            "  Paragraphs: {} (avg {:.1} words); {} over the {}-word limit\n",
            p.total, p.avg_length, p.over_limit, p.max_allowed
        ));
    }
    if result.sentences.is_insufficient() && result.paragraphs.is_insufficient() {
        out.push_str(&format!("  {DIM}Not enough prose to measure{RESET}\n"));
    }
    out.push('\n');

    // Voice and vocabulary
    out.push_str(&format!("{BOLD}VOICE & VOCABULARY{RESET}\n"));
    out.push_str(&format!(
        "  Passive voice: {:.1}% of sentences ({}, target <{:.0}%)\n",
        result.passive.percentage,
        level_note(result.passive.assessment),
        result.passive.threshold
    ));
    out.push_str(&format!(
        "  Jargon: {} instances, {:.2}% density ({}, tolerance {:.1}%)\n",
        result.jargon.instances,
        result.jargon.density,
        level_note(result.jargon.assessment),
        result.jargon.tolerance
    ));
    if !result.jargon.undefined.is_empty() {
        let terms: Vec<&str> = result
            .jargon
            .undefined
            .iter()
            .map(|u| u.term.as_str())
            .collect();
        out.push_str(&format!(
            "  {YELLOW}Undefined terms:{RESET} {}\n",
            terms.join(", ")
        ));
    }
    out.push_str(&format!(
        "  Hedging: {} words, {:.2}% density ({})",
        result.hedging.total_hedge_words,
        result.hedging.hedge_density,
        level_note(result.hedging.hedge_assessment)
    ));
    if result.hedging.total_filler_phrases > 0 {
        out.push_str(&format!(
            "  Fillers: {} ({} words saveable)",
            result.hedging.total_filler_phrases, result.hedging.words_saveable
        ));
    }
    out.push_str("\n\n");

    // Code balance
    if let Some(c) = result.code.as_measured() {
        let band_c = match c.assessment {
            RatioBand::Good => GREEN,
            RatioBand::Low => YELLOW,
            RatioBand::VeryLow => "\x1b[91m",
        };
        out.push_str(&format!("{BOLD}CODE BALANCE{RESET}\n"));
        out.push_str(&format!(
            "  {} blocks, {} code lines, {} prose lines; ratio {:.2} vs expected {:.1} {band_c}({}){RESET}\n\n",
            c.code_blocks, c.code_lines, c.prose_lines, c.ratio, c.expected_ratio, c.assessment
        ));
    }

    // Strengths and issues
    if !a.strengths.is_empty() {
        out.push_str(&format!("{BOLD}STRENGTHS{RESET}\n"));
        for s in &a.strengths {
            out.push_str(&format!("  {GREEN}+{RESET} {s}\n"));
        }
        out.push('\n');
    }
    if !a.issues.is_empty() {
        out.push_str(&format!("{BOLD}ISSUES{RESET}\n"));
        for i in &a.issues {
            out.push_str(&format!("  {YELLOW}-{RESET} {i}\n"));
        }
        out.push('\n');
    }

    // Suggestions
    if !result.suggestions.is_empty() {
        out.push_str(&format!(
            "{BOLD}SUGGESTIONS{RESET} ({} total)\n",
            result.suggestions.len()
        ));
        for s in &result.suggestions {
            let c = priority_color(s.priority);
            out.push_str(&format!(
                "  {c}{}{RESET} {BOLD}{}{RESET}: {}\n        {DIM}{}{RESET}\n",
                priority_tag(s.priority),
                s.category,
                s.issue,
                s.fix
            ));
        }
        out.push('\n');
    }

    let status = if result.passed {
        format!("{GREEN}{BOLD}PASS{RESET}")
    } else {
        format!("\x1b[31m{BOLD}FAIL{RESET}")
    };
    out.push_str(&format!("Result: {status} for {} readers\n", result.profile.name));

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_result;

    #[test]
    fn renders_all_sections() {
        let out = render(&test_result()).expect("renders");
        assert!(out.contains("Prosegrade Analysis"));
        assert!(out.contains("READABILITY"));
        assert!(out.contains("VOICE & VOCABULARY"));
        assert!(out.contains("CODE BALANCE"));
        assert!(out.contains("SUGGESTIONS"));
    }

    #[test]
    fn shows_undefined_terms_for_beginners() {
        let out = render(&test_result()).expect("renders");
        assert!(out.contains("Undefined terms:"));
    }

    #[test]
    fn final_line_states_pass_or_fail() {
        let out = render(&test_result()).expect("renders");
        assert!(out.contains("PASS") || out.contains("FAIL"));
    }
}
