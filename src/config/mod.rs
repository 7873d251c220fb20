//! Configuration module
//!
//! This module handles:
//! - Project-level configuration (prosegrade.toml)
//! - Audience profile threshold overrides
//! - Project jargon lexicon extensions
//! - CLI defaults

mod project_config;

pub use project_config::{
    load_project_config, CliDefaults, ExtraJargonTerm, LexiconConfig, ProfileOverride,
    ProjectConfig,
};
