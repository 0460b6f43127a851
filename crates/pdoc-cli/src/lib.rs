//! # pdoc-cli — Command-Line Front End
//!
//! Provides the `pdoc` binary over the generation pipeline.
//!
//! ## Subcommands
//!
//! - `pdoc generate`: Run a JSON/YAML generation request and emit the outcome.
//! - `pdoc analyze`: Preview the profile analysis for one document type.
//! - `pdoc catalog`: List the resolved templates for an industry.
//!
//! ```bash
//! pdoc -v generate --request request.yaml --output outcome.json
//! pdoc analyze --profile profile.json --document-type privacy-policy
//! pdoc catalog --industry healthcare
//! ```
//!
//! Every handler returns the process exit code. `anyhow` is used only at
//! this boundary; the libraries return typed errors.

pub mod analyze;
pub mod catalog;
pub mod generate;

use std::path::Path;

use anyhow::{Context, Result};
use pdoc_orchestrator::OrchestratorConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Exit code for a request where every document type failed.
pub const EXIT_ALL_FAILED: u8 = 2;

/// Read a JSON or YAML document. `.json` files are parsed as JSON, anything
/// else as YAML (which also accepts JSON).
pub fn read_input<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
    } else {
        serde_yaml::from_str(&raw).with_context(|| format!("invalid YAML in {}", path.display()))
    }
}

/// Load the orchestrator configuration from `path`, or from the
/// environment when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<OrchestratorConfig> {
    match path {
        Some(path) => OrchestratorConfig::from_path(path)
            .with_context(|| format!("failed to load configuration {}", path.display())),
        None => OrchestratorConfig::from_env().context("invalid PDOC_* environment"),
    }
}

/// Pretty-print `value` as JSON to `output`, or to stdout.
pub fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    match output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => println!("{json}"),
    }
    Ok(())
}
