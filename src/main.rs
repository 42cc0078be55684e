//! seapi-codegen CLI entrypoint
//! Parses command-line arguments and runs the generation pipeline.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::PathBuf;
use std::sync::Arc;

use seapi_codegen::core::config::Config;
use seapi_codegen::generation::{
    CodeGenOrchestrator, EntityKind, GenerationReport, OutputService,
};
use seapi_codegen::infrastructure::{
    DryRunOutputService, FileDefinitionSource, FileSystemOutputService, OutputAction,
};

// External imports (alphabetized)
use anyhow::Context;
use clap::{Args, Parser};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

/// Configuration file picked up from the project root when `--config` is absent
const DEFAULT_CONFIG_FILE: &str = "codegen.toml";

#[derive(Parser)]
#[command(name = "seapi-codegen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Clean the output directories of the selected entities and regenerate them
    Generate(RunArgs),
    /// Clean the output directories of the selected entities without generating
    Clean(RunArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Comma-separated entities to generate (Enums, Classes, Methods, EnumConversionTests, All)
    #[arg(long, short = 'e', default_value = "")]
    entities: String,
    /// Report every action without touching the file system
    #[arg(long, alias = "dry-run")]
    what_if: bool,
    /// Root against which relative configuration paths are resolved
    #[arg(long, default_value = ".")]
    project_root: PathBuf,
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Commands {
    fn args(&self) -> &RunArgs {
        match self {
            Commands::Generate(args) | Commands::Clean(args) => args,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let args = cli.command.args();

    // Initialize logging with default level INFO
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Starting seapi-codegen");

    let config_path = config_path(args);
    let config = Config::load(config_path.as_deref())
        .await
        .context("Failed to load configuration")?;
    let resolved = config.resolve(&args.project_root);

    let source = Arc::new(FileDefinitionSource::new(resolved.definitions_dir.clone()));
    let dry_run = args.what_if.then(|| Arc::new(DryRunOutputService::new()));
    let output: Arc<dyn OutputService> = match &dry_run {
        Some(service) => Arc::clone(service) as Arc<dyn OutputService>,
        None => Arc::new(FileSystemOutputService::new()),
    };

    let orchestrator = CodeGenOrchestrator::new(resolved, source, output);
    match &cli.command {
        Commands::Generate(args) => {
            let report = orchestrator
                .run(&args.entities)
                .await
                .with_context(|| format!("Failed to generate '{}'", args.entities))?;
            print_report(&report, args.what_if);
        }
        Commands::Clean(args) => {
            let prepared = orchestrator
                .prepare(&args.entities)
                .with_context(|| format!("Failed to clean '{}'", args.entities))?;
            prepared
                .clean()
                .await
                .context("Failed to clean output directories")?;
        }
    }

    if let Some(service) = dry_run {
        let actions = service.actions();
        let writes = actions
            .iter()
            .filter(|a| matches!(a, OutputAction::Write(_)))
            .count();
        info!(
            cleaned = actions.len() - writes,
            written = writes,
            "Dry run complete, no files were changed"
        );
    }

    Ok(())
}

/// Explicit `--config`, else `codegen.toml` under the project root when present
fn config_path(args: &RunArgs) -> Option<PathBuf> {
    args.config.clone().or_else(|| {
        let candidate = args.project_root.join(DEFAULT_CONFIG_FILE);
        candidate.is_file().then_some(candidate)
    })
}

fn print_report(report: &GenerationReport, dry_run: bool) {
    for kind in EntityKind::ALL {
        let paths = report.paths_for(kind);
        if !paths.is_empty() {
            println!("{kind}: {} file(s)", paths.len());
            if let Some(dir) = paths.first().and_then(|p| p.parent()) {
                println!("  in {}", dir.display());
            }
        }
    }
    println!("{}", summary_line(report.len(), dry_run));
}

fn summary_line(files: usize, dry_run: bool) -> String {
    if dry_run {
        format!("Would generate {files} file(s), nothing was written")
    } else {
        format!("✅ Generated {files} file(s)")
    }
}
