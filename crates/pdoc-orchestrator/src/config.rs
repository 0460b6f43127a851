//! Orchestrator configuration.
//!
//! Defaults suit a single local process. Override through environment
//! variables, a YAML/JSON file, or explicit construction in tests.

use std::path::{Path, PathBuf};

use pdoc_core::{Language, OutputFormat};
use pdoc_rules::{RuleTables, RulesError};
use serde::{Deserialize, Serialize};

/// Default number of document types processed in parallel.
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;

/// Configuration of a [`DocumentGenerationOrchestrator`](crate::DocumentGenerationOrchestrator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Upper bound on document types processed in parallel. At least 1.
    pub max_concurrency: usize,
    /// Language used when a request does not name one.
    pub default_language: Language,
    /// Output format tag used when the request options do not set one.
    pub output_format: OutputFormat,
    /// Complete rule-table set in YAML, replacing the built-in tables.
    pub rules_path: Option<PathBuf>,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            default_language: Language::Vietnamese,
            output_format: OutputFormat::Html,
            rules_path: None,
        }
    }
}

impl OrchestratorConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `PDOC_MAX_CONCURRENCY` (default: 4, minimum 1)
    /// - `PDOC_DEFAULT_LANGUAGE` (default: `vietnamese`)
    /// - `PDOC_OUTPUT_FORMAT` (default: `html`)
    /// - `PDOC_RULES_PATH` (default: built-in tables)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup("PDOC_MAX_CONCURRENCY") {
            config.max_concurrency = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: "PDOC_MAX_CONCURRENCY",
                value: raw.clone(),
                reason: "expected a positive integer".to_string(),
            })?;
        }
        if let Some(raw) = lookup("PDOC_DEFAULT_LANGUAGE") {
            config.default_language =
                Language::parse_label(&raw).ok_or_else(|| ConfigError::InvalidValue {
                    var: "PDOC_DEFAULT_LANGUAGE",
                    value: raw.clone(),
                    reason: "expected vietnamese or english".to_string(),
                })?;
        }
        if let Some(raw) = lookup("PDOC_OUTPUT_FORMAT") {
            config.output_format = raw.parse().map_err(|e: pdoc_core::PdocError| {
                ConfigError::InvalidValue {
                    var: "PDOC_OUTPUT_FORMAT",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        config.rules_path = lookup("PDOC_RULES_PATH")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        config.check()?;
        Ok(config)
    }

    /// Parse a YAML (or JSON) configuration document. Missing keys take
    /// their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Reject values outside their documented range.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.max_concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                var: "max_concurrency",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// The rule tables this configuration selects.
    pub fn load_rules(&self) -> Result<RuleTables, ConfigError> {
        match &self.rules_path {
            Some(path) => {
                let tables = RuleTables::from_yaml_path(path)?;
                tracing::info!(path = %path.display(), "loaded rule tables");
                Ok(tables)
            }
            None => Ok(RuleTables::builtin()),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A setting has a value outside its range.
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidValue {
        /// Variable or key name.
        var: &'static str,
        /// Rejected value.
        value: String,
        /// What was expected.
        reason: String,
    },
    /// The configuration file could not be read.
    #[error("failed to read configuration from {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid YAML for this structure.
    #[error("failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The configured rule tables could not be loaded.
    #[error(transparent)]
    Rules(#[from] RulesError),
}
