//! Errors raised while loading or checking rule tables.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or validate a [`RuleTables`](crate::RuleTables) set.
#[derive(Error, Debug)]
pub enum RulesError {
    /// The rule file could not be read.
    #[error("failed to read rule tables from {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The YAML document does not describe a complete table set.
    #[error("failed to parse rule tables: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The tables parsed but contradict themselves.
    #[error("inconsistent rule table `{table}`: {detail}")]
    Inconsistent {
        /// Which table failed the check.
        table: &'static str,
        /// What is wrong with it.
        detail: String,
    },
}
