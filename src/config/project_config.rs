//! Project-level configuration support
//!
//! Loads per-project configuration from a `prosegrade.toml` file next to the
//! documents being analyzed.
//!
//! # Configuration Format
//!
//! ```toml
//! # prosegrade.toml
//!
//! [defaults]
//! format = "text"
//! audience = "intermediate"
//!
//! [profiles.beginner]
//! max_grade = 9.0
//! max_sentence_words = 22
//! assumed_known = ["terminal", "shell"]
//!
//! [lexicon]
//! extra_jargon = [
//!     { term = "frobnicator", category = "internal", complexity = 3 },
//! ]
//! ```
//!
//! Profile overrides are partial: only the keys present replace registry
//! values, and `assumed_known` extends the registry list rather than
//! replacing it.

use crate::metrics::jargon::CustomTerm;
use crate::profiles::AudienceProfile;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Parsed `prosegrade.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,

    /// Per-tier threshold overrides, keyed by tier name
    #[serde(default)]
    pub profiles: HashMap<String, ProfileOverride>,

    /// Project jargon lexicon extensions
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

/// Defaults applied when the matching CLI flag is absent
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliDefaults {
    pub format: Option<String>,
    pub audience: Option<String>,
}

/// Partial override of one audience tier's thresholds
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileOverride {
    pub max_grade: Option<f64>,
    pub target_ease: Option<f64>,
    pub max_sentence_words: Option<usize>,
    pub max_paragraph_words: Option<usize>,
    pub jargon_tolerance: Option<f64>,
    pub code_explanation_ratio: Option<f64>,
    pub passive_threshold: Option<f64>,
    pub requires_definitions: Option<bool>,
    /// Extends the registry list; never shrinks it
    #[serde(default)]
    pub assumed_known: Vec<String>,
}

impl ProfileOverride {
    /// Apply this override onto a registry profile clone
    pub fn apply(&self, profile: &mut AudienceProfile) {
        if let Some(v) = self.max_grade {
            profile.max_grade = v;
        }
        if let Some(v) = self.target_ease {
            profile.target_ease = v;
        }
        if let Some(v) = self.max_sentence_words {
            profile.max_sentence_words = v;
        }
        if let Some(v) = self.max_paragraph_words {
            profile.max_paragraph_words = v;
        }
        if let Some(v) = self.jargon_tolerance {
            profile.jargon_tolerance = v;
        }
        if let Some(v) = self.code_explanation_ratio {
            profile.code_explanation_ratio = v;
        }
        if let Some(v) = self.passive_threshold {
            profile.passive_threshold = v;
        }
        if let Some(v) = self.requires_definitions {
            profile.requires_definitions = v;
        }
        for term in &self.assumed_known {
            if !profile.assumes_known(term) {
                profile.assumed_known.push(term.clone());
            }
        }
    }
}

/// Project jargon lexicon extensions
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub extra_jargon: Vec<ExtraJargonTerm>,
}

/// One project-defined jargon term
#[derive(Debug, Clone, Deserialize)]
pub struct ExtraJargonTerm {
    pub term: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_complexity")]
    pub complexity: u8,
}

fn default_category() -> String {
    "project".to_string()
}

fn default_complexity() -> u8 {
    2
}

impl ExtraJargonTerm {
    pub fn to_custom_term(&self) -> CustomTerm {
        CustomTerm {
            term: self.term.clone(),
            category: self.category.clone(),
            complexity: self.complexity,
        }
    }
}

/// Load project configuration from a directory
///
/// A missing file yields defaults; a malformed file logs a warning and
/// yields defaults, so a broken config never blocks analysis.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let toml_path = dir.join("prosegrade.toml");
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

impl ProjectConfig {
    /// Resolve the effective profile for a tier: registry values plus any
    /// `[profiles.<tier>]` override
    pub fn resolve_profile(&self, tier: &str, base: AudienceProfile) -> AudienceProfile {
        let mut profile = base;
        if let Some(ov) = self.profiles.get(tier) {
            debug!(tier, "applying profile override");
            ov.apply(&mut profile);
        }
        profile
    }

    /// Project jargon terms in calculator form
    pub fn custom_terms(&self) -> Vec<CustomTerm> {
        self.lexicon
            .extra_jargon
            .iter()
            .map(ExtraJargonTerm::to_custom_term)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::Audience;
    use std::fs;

    #[test]
    fn missing_config_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_project_config(dir.path());
        assert!(config.defaults.audience.is_none());
        assert!(config.profiles.is_empty());
        assert!(config.lexicon.extra_jargon.is_empty());
    }

    #[test]
    fn malformed_config_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("prosegrade.toml"), "[[[not toml").unwrap();
        let config = load_project_config(dir.path());
        assert!(config.defaults.format.is_none());
    }

    #[test]
    fn full_config_parses() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("prosegrade.toml"),
            r#"
[defaults]
format = "json"
audience = "expert"

[profiles.beginner]
max_grade = 9.0
assumed_known = ["terminal"]

[lexicon]
extra_jargon = [
    { term = "frobnicator", category = "internal", complexity = 3 },
    { term = "widget" },
]
"#,
        )
        .unwrap();
        let config = load_project_config(dir.path());
        assert_eq!(config.defaults.format.as_deref(), Some("json"));
        assert_eq!(config.defaults.audience.as_deref(), Some("expert"));
        assert_eq!(config.lexicon.extra_jargon.len(), 2);
        assert_eq!(config.lexicon.extra_jargon[1].category, "project");
        assert_eq!(config.lexicon.extra_jargon[1].complexity, 2);
    }

    #[test]
    fn override_is_partial_and_additive() {
        let mut config = ProjectConfig::default();
        config.profiles.insert(
            "beginner".to_string(),
            ProfileOverride {
                max_grade: Some(9.0),
                assumed_known: vec!["terminal".to_string()],
                ..Default::default()
            },
        );

        let base = Audience::Beginner.profile();
        let resolved = config.resolve_profile("beginner", base.clone());
        assert_eq!(resolved.max_grade, 9.0);
        // Untouched keys keep registry values
        assert_eq!(resolved.max_sentence_words, base.max_sentence_words);
        // Additive: registry entries survive
        assert!(resolved.assumes_known("computer"));
        assert!(resolved.assumes_known("terminal"));
    }

    #[test]
    fn unmatched_tier_override_is_inert() {
        let mut config = ProjectConfig::default();
        config.profiles.insert(
            "expert".to_string(),
            ProfileOverride {
                max_grade: Some(20.0),
                ..Default::default()
            },
        );
        let base = Audience::Beginner.profile();
        let resolved = config.resolve_profile("beginner", base.clone());
        assert_eq!(resolved, base);
    }
}
