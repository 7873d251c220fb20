//! Output reporters for analysis results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown

mod json;
mod markdown;
mod text;

use crate::models::AnalysisResult;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render an analysis result in the specified format
pub fn report(result: &AnalysisResult, format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(result, fmt)
}

/// Render an analysis result using an OutputFormat enum
pub fn report_with_format(result: &AnalysisResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(result),
        OutputFormat::Json => json::render(result),
        OutputFormat::Markdown => markdown::render(result),
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::engine::analyze;
    use crate::models::AnalysisResult;
    use crate::profiles::Audience;

    /// A small but fully populated result for reporter tests
    pub(crate) fn test_result() -> AnalysisResult {
        let text = "# Guide\n\n\
                    The service is configured by the operator utilizing an extensive \
                    parameterization of the kubernetes schema. Basically the webhook \
                    should be registered before any payload is accepted.\n\n\
                    ```yaml\nreplicas: 3\n```\n";
        analyze(text, Audience::Beginner).expect("fixture analyzes")
    }

    #[test]
    fn format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("md").unwrap(),
            OutputFormat::Markdown
        );
        assert!(OutputFormat::from_str("html").is_err());
    }

    #[test]
    fn extensions_match_formats() {
        assert_eq!(file_extension(OutputFormat::Text), "txt");
        assert_eq!(file_extension(OutputFormat::Json), "json");
        assert_eq!(file_extension(OutputFormat::Markdown), "md");
    }

    #[test]
    fn every_format_renders_the_fixture() {
        let result = test_result();
        for fmt in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown] {
            let out = report_with_format(&result, fmt).expect("renders");
            assert!(!out.is_empty(), "{fmt} output empty");
        }
    }
}
