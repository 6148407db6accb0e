//! Build configuration.

use crate::error::{BuildError, Result};
use crate::tree::{LegacyNaming, NamingConvention, SymmetricNaming};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

pub const CONFIG_FILE_NAME: &str = "dotnetdomain.json";

/// Which ancestors contribute to a nested declaration's qualified name.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NestingRule {
    /// Namespaces and classes only.
    #[default]
    Legacy,
    /// Every container kind.
    Symmetric,
}

impl NestingRule {
    pub fn convention(&self) -> Arc<dyn NamingConvention> {
        match self {
            NestingRule::Legacy => Arc::new(LegacyNaming),
            NestingRule::Symmetric => Arc::new(SymmetricNaming),
        }
    }
}

impl FromStr for NestingRule {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(NestingRule::Legacy),
            "symmetric" => Ok(NestingRule::Symmetric),
            other => Err(BuildError::Config(format!("unknown nesting rule: {}", other))),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct BuildConfig {
    pub nesting: NestingRule,
    /// Suffix of documents picked up from directories.
    pub source_suffix: String,
    pub fail_on_warning: bool,
    /// Directive domain, as in `.. dn:class::`.
    pub domain: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            nesting: NestingRule::Legacy,
            source_suffix: ".rst".to_string(),
            fail_on_warning: false,
            domain: "dn".to_string(),
        }
    }
}

impl BuildConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: BuildConfig = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `dotnetdomain.json` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.domain.is_empty() || !self.domain.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(BuildError::Config(format!(
                "domain must be a non-empty alphanumeric name, got {:?}",
                self.domain
            )));
        }
        if self.source_suffix.is_empty() {
            return Err(BuildError::Config("source_suffix must not be empty".to_string()));
        }
        Ok(())
    }
}
