//! Validator settings.
//!
//! Settings are optional. They are read from `--config <file>` when given,
//! otherwise from `bomcheck.yaml` in the databases directory when present.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the databases directory.
pub const SETTINGS_FILE: &str = "bomcheck.yaml";

fn default_currencies() -> Vec<String> {
    vec!["USD".to_string(), "EUR".to_string()]
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Currency codes a supplier may quote prices in
    #[serde(default = "default_currencies")]
    pub currencies: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currencies: default_currencies(),
        }
    }
}

impl Settings {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Settings =
            serde_yaml::from_str(content).context("Failed to parse settings YAML")?;
        settings.validate()?;

        Ok(settings)
    }

    /// Resolve settings: an explicit file wins, then `<dbs_dir>/bomcheck.yaml`,
    /// then defaults.
    pub fn resolve(explicit: Option<&Path>, dbs_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let implicit: PathBuf = dbs_dir.join(SETTINGS_FILE);
        if implicit.is_file() {
            Self::load_from(&implicit)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate settings
    pub fn validate(&self) -> Result<()> {
        if self.currencies.is_empty() {
            anyhow::bail!("currencies must list at least one currency code");
        }

        if let Some(blank) = self.currencies.iter().find(|c| c.trim().is_empty()) {
            anyhow::bail!("currencies must not contain blank codes, got {:?}", blank);
        }

        Ok(())
    }

    pub fn allows_currency(&self, currency: &str) -> bool {
        self.currencies.iter().any(|c| c == currency)
    }
}
