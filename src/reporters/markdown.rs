//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for:
//! - Pull request comments
//! - Documentation review checklists
//! - CI job summaries

use crate::models::{AnalysisResult, Verdict};
use anyhow::Result;
use chrono::Local;

/// Render the result as GitHub-flavored Markdown
pub fn render(result: &AnalysisResult) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(result));
    md.push('\n');
    md.push_str(&render_metrics_table(result));
    md.push('\n');
    md.push_str(&render_assessment(result));
    md.push('\n');
    md.push_str(&render_suggestions(result));
    md.push('\n');
    md.push_str(&render_footer());

    Ok(md)
}

fn render_header(result: &AnalysisResult) -> String {
    let verdict_emoji = match result.assessment.overall {
        Verdict::Excellent => "🏆",
        Verdict::Good => "⭐",
        Verdict::NeedsImprovement => "⚠️",
        Verdict::SignificantRevision => "❌",
    };
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

    format!(
        r#"# {} Prosegrade Report: {}

**Audience: {}** | **Score: {:.1}/100** | **{}**

Generated: {}
"#,
        verdict_emoji,
        result.source,
        result.profile.name,
        result.assessment.score,
        result.assessment.overall,
        timestamp
    )
}

fn render_metrics_table(result: &AnalysisResult) -> String {
    let mut md = String::from("## Metrics\n\n| Metric | Value | Target | Status |\n|---|---|---|---|\n");

    match result.readability.as_ok() {
        Some(r) => {
            md.push_str(&format!(
                "| Grade level | {:.1} | ≤ {:.0} | {} |\n",
                r.flesch_kincaid_grade,
                result.profile.max_grade,
                check(r.meets_audience_target)
            ));
            md.push_str(&format!(
                "| Reading ease | {:.1} | ≥ {:.0} | {} |\n",
                r.flesch_reading_ease,
                result.profile.target_ease,
                check(r.flesch_reading_ease >= result.profile.target_ease)
            ));
        }
        None => md.push_str("| Readability | — | — | not enough prose |\n"),
    }

    if let Some(s) = result.sentences.as_ok() {
        md.push_str(&format!(
            "| Long sentences | {} | 0 over {} words | {} |\n",
            s.over_limit,
            s.max_allowed,
            check(s.over_limit == 0)
        ));
    }
    if let Some(p) = result.paragraphs.as_ok() {
        md.push_str(&format!(
            "| Long paragraphs | {} | 0 over {} words | {} |\n",
            p.over_limit,
            p.max_allowed,
            check(p.over_limit == 0)
        ));
    }
    md.push_str(&format!(
        "| Passive voice | {:.1}% | < {:.0}% | {} |\n",
        result.passive.percentage,
        result.passive.threshold,
        check(result.passive.within_threshold)
    ));
    md.push_str(&format!(
        "| Jargon density | {:.2}% | ≤ {:.1}% | {} |\n",
        result.jargon.density,
        result.jargon.tolerance,
        check(result.jargon.within_tolerance)
    ));
    if let Some(c) = result.code.as_measured() {
        md.push_str(&format!(
            "| Code explanation | {:.2} | ≥ {:.1} lines/line | {} |\n",
            c.ratio,
            c.expected_ratio,
            check(c.ratio >= c.expected_ratio)
        ));
    }

    md
}

fn render_assessment(result: &AnalysisResult) -> String {
    let a = &result.assessment;
    let mut md = format!(
        "## Assessment\n\n{} of {} applicable checks passed.\n",
        a.checks_passed, a.checks_applicable
    );

    if !a.strengths.is_empty() {
        md.push_str("\n**Strengths**\n\n");
        for s in &a.strengths {
            md.push_str(&format!("- {s}\n"));
        }
    }
    if !a.issues.is_empty() {
        md.push_str("\n**Issues**\n\n");
        for i in &a.issues {
            md.push_str(&format!("- {i}\n"));
        }
    }
    md
}

fn render_suggestions(result: &AnalysisResult) -> String {
    if result.suggestions.is_empty() {
        return "## Suggestions\n\nNo revisions suggested.\n".to_string();
    }

    let mut md = String::from("## Suggestions\n\n| Priority | Category | Issue | Fix |\n|---|---|---|---|\n");
    for s in &result.suggestions {
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            s.priority, s.category, s.issue, s.fix
        ));
    }
    md
}

fn render_footer() -> String {
    "---\n\n*Generated by [prosegrade](https://github.com/prosegrade/prosegrade)*\n".to_string()
}

fn check(ok: bool) -> &'static str {
    if ok {
        "✅"
    } else {
        "❌"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_result;

    #[test]
    fn renders_metric_table_rows() {
        let md = render(&test_result()).expect("renders");
        assert!(md.contains("## Metrics"));
        assert!(md.contains("| Passive voice |"));
        assert!(md.contains("| Jargon density |"));
        assert!(md.contains("| Code explanation |"));
    }

    #[test]
    fn renders_suggestion_table_when_present() {
        let result = test_result();
        let md = render(&result).expect("renders");
        assert!(!result.suggestions.is_empty());
        assert!(md.contains("| Priority | Category | Issue | Fix |"));
    }

    #[test]
    fn header_names_source_and_audience() {
        let md = render(&test_result()).expect("renders");
        assert!(md.contains("Prosegrade Report: document"));
        assert!(md.contains("**Audience: Beginner**"));
    }
}
