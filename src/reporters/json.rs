//! JSON reporter
//!
//! Outputs the full AnalysisResult as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::models::AnalysisResult;
use anyhow::Result;

/// Render the result as JSON
pub fn render(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render the result as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string(result)?)
}
