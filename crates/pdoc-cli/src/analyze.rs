//! `pdoc analyze`: preview the profile analysis for one document type.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use pdoc_core::ProfileInput;
use pdoc_orchestrator::DocumentGenerationOrchestrator;

use crate::{load_config, read_input, write_json};

/// Arguments for `pdoc analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// JSON or YAML business profile.
    #[arg(long)]
    pub profile: PathBuf,

    /// Document type identifier, e.g. `privacy-policy`.
    #[arg(long)]
    pub document_type: String,

    /// Write the analysis JSON here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Execute `pdoc analyze`.
pub fn run_analyze(args: &AnalyzeArgs, config_path: Option<&Path>) -> Result<u8> {
    let config = load_config(config_path)?;
    let profile: ProfileInput = read_input(&args.profile)?;
    let orchestrator = DocumentGenerationOrchestrator::from_config(config)
        .context("failed to initialize the orchestrator")?;
    let analysis = orchestrator
        .analyze(&profile, &args.document_type)
        .context("analysis rejected")?;
    if !analysis.fallbacks.is_empty() {
        tracing::info!(fallbacks = ?analysis.fallbacks, "analysis used fallback entries");
    }
    write_json(&analysis, args.output.as_deref())?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdoc_analysis::BusinessAnalysis;
    use pdoc_core::DocumentType;

    fn profile_file(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("profile.yaml");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn analysis_is_written_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let profile = profile_file(
            &dir,
            "company_name: ABC Co\nindustry_type: healthcare\nbusiness_size: enterprise\n",
        );
        let output = dir.path().join("analysis.json");
        let args = AnalyzeArgs {
            profile,
            document_type: "privacy_policy".to_string(),
            output: Some(output.clone()),
        };
        assert_eq!(run_analyze(&args, None).unwrap(), 0);

        let analysis: BusinessAnalysis =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(analysis.document_type, DocumentType::PrivacyPolicy);
        assert_eq!(analysis.industry, "healthcare");
    }

    #[test]
    fn unknown_document_type_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let profile = profile_file(&dir, "company_name: ABC Co\nindustry_type: finance\n");
        let args = AnalyzeArgs {
            profile,
            document_type: "cookie-banner".to_string(),
            output: None,
        };
        let err = run_analyze(&args, None).unwrap_err();
        assert!(format!("{err:#}").contains("cookie-banner"));
    }
}
