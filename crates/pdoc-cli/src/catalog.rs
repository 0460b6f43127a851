//! `pdoc catalog`: list the templates resolved for an industry.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use pdoc_core::Language;
use pdoc_orchestrator::DocumentGenerationOrchestrator;
use pdoc_synthesis::Template;

use crate::{load_config, write_json};

/// Arguments for `pdoc catalog`.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Industry label. Unknown labels resolve to the generic templates.
    #[arg(long, default_value = "generic")]
    pub industry: String,

    /// Language of the listed titles: `vietnamese`/`vi` or `english`/`en`.
    #[arg(long)]
    pub language: Option<String>,

    /// Print the full templates as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute `pdoc catalog`.
pub fn run_catalog(args: &CatalogArgs, config_path: Option<&Path>) -> Result<u8> {
    let config = load_config(config_path)?;
    let language = args
        .language
        .as_deref()
        .map_or(config.default_language, Language::from_label_or_default);
    let orchestrator = DocumentGenerationOrchestrator::from_config(config)
        .context("failed to initialize the orchestrator")?;
    let templates = orchestrator.pipeline().catalog().catalog(&args.industry);

    if args.json {
        write_json(&templates, None)?;
    } else {
        for line in render_table(&templates, language) {
            println!("{line}");
        }
    }
    Ok(0)
}

/// One line per template: id, section count, compatibility and title.
pub fn render_table(templates: &[Template], language: Language) -> Vec<String> {
    let width = templates.iter().map(|t| t.id.len()).max().unwrap_or(0);
    templates
        .iter()
        .map(|t| {
            format!(
                "{:<width$}  {:>2} sections  {}  {}",
                t.id,
                t.sections.len(),
                t.compatibility,
                t.title.get(language),
            )
        })
        .collect()
}
