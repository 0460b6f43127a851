//! # pdoc CLI entry point
//!
//! Parses command-line arguments, installs the tracing subscriber and
//! dispatches to the subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pdoc_cli::analyze::{run_analyze, AnalyzeArgs};
use pdoc_cli::catalog::{run_catalog, CatalogArgs};
use pdoc_cli::generate::{run_generate, GenerateArgs};

/// PDPL document generator.
///
/// Generates personalized Vietnamese/English data-protection documents for a
/// business profile and validates them against the PDPL rule tables.
#[derive(Parser, Debug)]
#[command(name = "pdoc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    /// Path to a YAML/JSON configuration file. Defaults to PDOC_* variables.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate documents from a JSON or YAML request.
    Generate(GenerateArgs),

    /// Preview the business-profile analysis for one document type.
    Analyze(AnalyzeArgs),

    /// List the templates resolved for an industry.
    Catalog(CatalogArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    // Logs go to stderr so JSON output on stdout stays parseable.
    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "pdoc starting");

    let config = cli.config.as_deref();
    let result = match &cli.command {
        Commands::Generate(args) => run_generate(args, config),
        Commands::Analyze(args) => run_analyze(args, config),
        Commands::Catalog(args) => run_catalog(args, config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_generate_minimal() {
        let cli = Cli::try_parse_from(["pdoc", "generate", "--request", "req.yaml"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(!cli.log_json);
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.request, PathBuf::from("req.yaml"));
            assert!(args.output.is_none());
            assert!(args.concurrency.is_none());
        } else {
            panic!("expected generate");
        }
    }

    #[test]
    fn cli_parse_generate_with_all_options() {
        let cli = Cli::try_parse_from([
            "pdoc",
            "-vv",
            "--log-json",
            "--config",
            "pdoc.yaml",
            "generate",
            "--request",
            "req.json",
            "--output",
            "out.json",
            "--concurrency",
            "8",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.log_json);
        assert_eq!(cli.config, Some(PathBuf::from("pdoc.yaml")));
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.output, Some(PathBuf::from("out.json")));
            assert_eq!(args.concurrency, Some(8));
        } else {
            panic!("expected generate");
        }
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pdoc", "catalog", "-v", "--config", "c.yaml"]).unwrap();
        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.config, Some(PathBuf::from("c.yaml")));
    }

    #[test]
    fn cli_rejects_zero_concurrency() {
        assert!(Cli::try_parse_from([
            "pdoc",
            "generate",
            "--request",
            "req.yaml",
            "--concurrency",
            "0",
        ])
        .is_err());
    }

    #[test]
    fn cli_generate_requires_request() {
        assert!(Cli::try_parse_from(["pdoc", "generate"]).is_err());
    }

    #[test]
    fn cli_parse_analyze() {
        let cli = Cli::try_parse_from([
            "pdoc",
            "analyze",
            "--profile",
            "profile.yaml",
            "--document-type",
            "consent-forms",
        ])
        .unwrap();
        if let Commands::Analyze(args) = cli.command {
            assert_eq!(args.profile, PathBuf::from("profile.yaml"));
            assert_eq!(args.document_type, "consent-forms");
        } else {
            panic!("expected analyze");
        }
    }

    #[test]
    fn cli_parse_catalog_defaults_to_generic() {
        let cli = Cli::try_parse_from(["pdoc", "catalog"]).unwrap();
        if let Commands::Catalog(args) = cli.command {
            assert_eq!(args.industry, "generic");
            assert!(args.language.is_none());
            assert!(!args.json);
        } else {
            panic!("expected catalog");
        }
    }

    #[test]
    fn cli_unknown_subcommand_fails() {
        assert!(Cli::try_parse_from(["pdoc", "render"]).is_err());
    }
}
