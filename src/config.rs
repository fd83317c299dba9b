use crate::cases::{AdditionCase, builtin_cases};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub harness: HarnessConfig,
    #[serde(default)]
    pub cases: Vec<AdditionCase>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Run the five built-in cases before any configured ones.
    #[serde(default = "default_true")]
    pub include_builtin: bool,
    /// Count known-bad fixtures as failures.
    #[serde(default)]
    pub strict: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            strict: false,
        }
    }
}

impl HarnessConfig {
    /// Strict if either the command line or the config asks for it.
    pub fn effective_strict(&self, cli_strict: bool) -> bool {
        cli_strict || self.strict
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config {}: {e}", path.display())))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(format!("Failed to parse config: {e}")))
    }

    /// Falls back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Built-in cases (if enabled) followed by configured ones.
    pub fn all_cases(&self) -> Vec<AdditionCase> {
        let mut cases = if self.harness.include_builtin {
            builtin_cases()
        } else {
            Vec::new()
        };
        cases.extend(self.cases.iter().cloned());
        cases
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for case in self.all_cases() {
            if case.name.trim().is_empty() {
                return Err(Error::config("case name must not be empty"));
            }
            if !seen.insert(case.name.clone()) {
                return Err(Error::config(format!("duplicate case name: {}", case.name)));
            }
        }
        Ok(())
    }
}
