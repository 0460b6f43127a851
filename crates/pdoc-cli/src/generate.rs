//! `pdoc generate`: run a generation request to completion.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use pdoc_orchestrator::{DocumentGenerationOrchestrator, GenerationOutcome, GenerationRequest};

use crate::{load_config, read_input, write_json, EXIT_ALL_FAILED};

/// Arguments for `pdoc generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// JSON or YAML generation request.
    #[arg(long)]
    pub request: PathBuf,

    /// Write the outcome JSON here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Override the configured number of document types run in parallel.
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: Option<u16>,
}

/// Execute `pdoc generate`.
///
/// Returns 0 when at least one document was generated and
/// [`EXIT_ALL_FAILED`] when every requested type failed. Invalid input is
/// an error.
pub fn run_generate(args: &GenerateArgs, config_path: Option<&Path>) -> Result<u8> {
    let mut config = load_config(config_path)?;
    if let Some(n) = args.concurrency {
        config.max_concurrency = usize::from(n);
    }
    let request: GenerationRequest = read_input(&args.request)?;
    let orchestrator = DocumentGenerationOrchestrator::from_config(config)
        .context("failed to initialize the orchestrator")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;
    let outcome = runtime
        .block_on(orchestrator.generate(request))
        .context("generation request rejected")?;

    report(&outcome);
    write_json(&outcome, args.output.as_deref())?;

    if outcome.is_completed() {
        Ok(0)
    } else {
        Ok(EXIT_ALL_FAILED)
    }
}

fn report(outcome: &GenerationOutcome) {
    for doc in &outcome.documents {
        tracing::info!(
            document_type = %doc.document_type,
            compliance = %doc.validation.aggregate_score,
            status = %doc.validation.overall_status,
            personalization = %doc.personalization_score,
            date = %doc.generated_at.date_label(doc.content.metadata.language),
            "generated"
        );
    }
    for failure in &outcome.failures {
        tracing::warn!(
            document_type = failure.document_type.as_deref().unwrap_or("-"),
            kind = %failure.kind,
            "{}",
            failure.message
        );
    }
    tracing::info!(
        request_id = %outcome.request_id.as_uuid(),
        state = %outcome.status.state,
        documents = outcome.documents.len(),
        failures = outcome.failures.len(),
        "request finished"
    );
}
