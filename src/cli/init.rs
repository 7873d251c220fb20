//! Init command - write an example prosegrade.toml

use anyhow::{Context, Result};
use std::path::Path;

const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

const EXAMPLE_CONFIG: &str = r#"# Prosegrade configuration
# All sections are optional; missing keys keep built-in values.

[defaults]
# Output format when --format is not given (text, json, markdown)
format = "text"
# Audience tier when --audience is not given
audience = "intermediate"

# Partial per-tier threshold overrides. Only the keys you set change;
# assumed_known extends the built-in list rather than replacing it.
#
# [profiles.beginner]
# max_grade = 9.0
# max_sentence_words = 22
# assumed_known = ["terminal", "shell"]

# Project-specific jargon terms, flagged like the built-in catalog.
#
# [lexicon]
# extra_jargon = [
#     { term = "frobnicator", category = "internal", complexity = 3 },
# ]
"#;

/// Run the init command
pub fn run(path: &Path) -> Result<()> {
    // `init README.md` should land the config next to the document
    let dir = if path.is_dir() {
        path.to_path_buf()
    } else {
        path.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf()
    };

    let config_path = dir.join("prosegrade.toml");
    if config_path.exists() {
        println!(
            "{GREEN}✓{RESET} Config already exists at {CYAN}{}{RESET}",
            config_path.display()
        );
        return Ok(());
    }

    std::fs::write(&config_path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to create {}", config_path.display()))?;
    println!(
        "{GREEN}✓{RESET} Created {CYAN}{}{RESET}",
        config_path.display()
    );
    println!("\nNext steps:");
    println!("  {CYAN}prosegrade README.md{RESET}                 Analyze a document");
    println!("  {CYAN}prosegrade analyze doc.md -a beginner{RESET}  Grade for beginners");

    Ok(())
}
