//! Analyze command implementation
//!
//! This command performs a full document analysis:
//! 1. Resolve the target file (a directory means its README.md)
//! 2. Load prosegrade.toml from the document's directory, if present
//! 3. Resolve the audience tier (flag > config default > intermediate)
//! 4. Run the analysis with any profile overrides and extra jargon applied
//! 5. Render the result (text, json, markdown) to stdout or a file

use crate::config::load_project_config;
use crate::engine::Analyzer;
use crate::profiles::Audience;
use crate::reporters;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct AnalyzeArgs {
    pub path: PathBuf,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub audience: Option<String>,
    pub no_suggestions: bool,
    pub validate: bool,
}

/// Resolve the document to analyze; a directory means its README.md
fn resolve_target(path: &Path) -> Result<PathBuf> {
    let target = if path.is_dir() {
        path.join("README.md")
    } else {
        path.to_path_buf()
    };
    if !target.exists() {
        anyhow::bail!("Document not found: {}", target.display());
    }
    Ok(target)
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let target = resolve_target(&args.path)?;
    let content = std::fs::read_to_string(&target)
        .with_context(|| format!("Failed to read {}", target.display()))?;

    let config_dir = target.parent().filter(|p| !p.as_os_str().is_empty());
    let config = load_project_config(config_dir.unwrap_or(Path::new(".")));

    // Audience: flag beats config default beats the registry default
    let tier_name = args
        .audience
        .or_else(|| config.defaults.audience.clone())
        .unwrap_or_else(|| Audience::default().to_string());
    let audience: Audience = tier_name.parse()?;
    debug!(%audience, "resolved audience tier");

    let profile = config.resolve_profile(&audience.to_string(), audience.profile());
    let source = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| target.display().to_string());

    let mut result = Analyzer::new(audience)
        .with_profile(profile)
        .with_custom_terms(config.custom_terms())
        .analyze(&content, &source)?;

    if args.no_suggestions {
        result.suggestions.clear();
    }

    if args.validate {
        // CI gate: one line, exit code carries the verdict
        println!(
            "{}: {} ({:.1}/100, {} audience)",
            source,
            if result.passed { "PASS" } else { "FAIL" },
            result.assessment.score,
            result.profile.name
        );
        if !result.passed {
            std::process::exit(1);
        }
        return Ok(());
    }

    let format = args
        .format
        .or_else(|| config.defaults.format.clone())
        .unwrap_or_else(|| "text".to_string());
    let rendered = reporters::report(&result, &format)?;

    match args.output {
        Some(out_path) => {
            std::fs::write(&out_path, &rendered)
                .with_context(|| format!("Failed to write {}", out_path.display()))?;
            info!("report written to {}", out_path.display());
            eprintln!("Report written to {}", out_path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn directory_resolves_to_readme() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "Hello there.").unwrap();
        let target = resolve_target(dir.path()).unwrap();
        assert!(target.ends_with("README.md"));
    }

    #[test]
    fn missing_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_target(&dir.path().join("nope.md")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn analyze_writes_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("guide.md");
        fs::write(&doc, "The tool reads one file. It prints a short report.").unwrap();
        let out = dir.path().join("report.json");

        run(AnalyzeArgs {
            path: doc,
            format: Some("json".to_string()),
            output: Some(out.clone()),
            ..Default::default()
        })
        .unwrap();

        let json = fs::read_to_string(&out).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["source"], "guide.md");
    }

    #[test]
    fn config_default_audience_applies() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("prosegrade.toml"),
            "[defaults]\naudience = \"expert\"\n",
        )
        .unwrap();
        let doc = dir.path().join("guide.md");
        fs::write(&doc, "Sharding and replication follow the usual tradeoffs.").unwrap();
        let out = dir.path().join("report.json");

        run(AnalyzeArgs {
            path: doc,
            format: Some("json".to_string()),
            output: Some(out.clone()),
            ..Default::default()
        })
        .unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(parsed["audience"], "expert");
    }
}
