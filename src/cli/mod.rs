//! CLI command definitions and handlers

mod analyze;
mod init;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Prosegrade - audience-calibrated readability analysis
#[derive(Parser, Debug)]
#[command(name = "prosegrade")]
#[command(
    version,
    about = "Grade technical writing against its target audience: readability, \
sentence shape, passive voice, jargon, and code balance",
    long_about = "Prosegrade scores prose documentation against the expectations of a \
target audience tier (beginner, intermediate, expert, mixed) and emits \
prioritized revision suggestions.\n\n\
Run without a subcommand to analyze a document with defaults:\n  \
prosegrade README.md",
    after_help = "\
Examples:
  prosegrade README.md                         Analyze for intermediate readers
  prosegrade analyze guide.md -a beginner      Grade against the beginner tier
  prosegrade analyze guide.md --format json    JSON output for scripting
  prosegrade analyze guide.md --validate       Exit 1 on failure (CI mode)
  prosegrade init                              Write an example prosegrade.toml"
)]
pub struct Cli {
    /// Document to analyze, or a directory containing README.md
    #[arg(global = true, default_value = ".")]
    pub path: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a prosegrade.toml config file with example settings
    Init,

    /// Analyze a document for audience fit
    #[command(after_help = "\
Examples:
  prosegrade analyze README.md                       Analyze one document
  prosegrade analyze guide.md --audience beginner    Grade against beginners
  prosegrade analyze guide.md --format markdown -o review.md
  prosegrade analyze guide.md --validate             CI gate: exit 1 on FAIL")]
    Analyze {
        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Target audience tier: beginner, intermediate, expert, mixed
        #[arg(long, short = 'a', value_parser = ["beginner", "intermediate", "expert", "mixed"])]
        audience: Option<String>,

        /// Omit the suggestion list from the report
        #[arg(long)]
        no_suggestions: bool,

        /// Print only PASS/FAIL and exit nonzero on failure (CI mode)
        #[arg(long)]
        validate: bool,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init) => init::run(&cli.path),

        Some(Commands::Analyze {
            format,
            output,
            audience,
            no_suggestions,
            validate,
        }) => analyze::run(analyze::AnalyzeArgs {
            path: cli.path,
            format,
            output,
            audience,
            no_suggestions,
            validate,
        }),

        // Bare `prosegrade <path>` is analyze with defaults
        None => analyze::run(analyze::AnalyzeArgs {
            path: cli.path,
            ..Default::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_defaults() {
        let cli = Cli::try_parse_from(["prosegrade", "README.md"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.path, PathBuf::from("README.md"));
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn analyze_flags_parse() {
        let cli = Cli::try_parse_from([
            "prosegrade",
            "analyze",
            "guide.md",
            "-a",
            "beginner",
            "-f",
            "json",
            "--validate",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Analyze {
                format,
                audience,
                validate,
                ..
            }) => {
                assert_eq!(format.as_deref(), Some("json"));
                assert_eq!(audience.as_deref(), Some("beginner"));
                assert!(validate);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn invalid_audience_flag_rejected_at_parse() {
        assert!(Cli::try_parse_from(["prosegrade", "analyze", "x.md", "-a", "novice"]).is_err());
    }
}
