//! capability-compare CLI
//!
//! Renders one vendor-vs-competitor capability comparison for a customer.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use capability_compare::adapters::{
    render_listing, FileReferenceSource, ReferenceCatalog, ReportFormat, StaticReferenceSource,
};
use capability_compare::application::{RunComparisonCommand, RunComparisonHandler};
use capability_compare::config::AppConfig;
use capability_compare::domain::foundation::{DomainError, ErrorCode};
use capability_compare::ports::ReferenceDataSource;

#[derive(Parser)]
#[command(name = "capability-compare")]
#[command(about = "Capability comparison of a primary vendor against a competitor")]
#[command(version)]
struct Cli {
    /// Customer name (suggests the industry archetype)
    #[arg(short, long)]
    customer: Option<String>,

    /// Archetype to use instead of the suggested one
    #[arg(short, long)]
    archetype: Option<String>,

    /// Selected product (repeatable)
    #[arg(short, long = "product")]
    products: Vec<String>,

    /// Select no products, ignoring configured defaults
    #[arg(long, conflicts_with = "products")]
    no_products: bool,

    /// Competitor vendor
    #[arg(long)]
    competitor: Option<String>,

    /// Reference data file (.json, .yaml or .yml)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: ReportFormat,

    /// List archetypes, products and competitors, then exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);

    match run(cli, config).await {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_json {
        builder.json().init();
    } else {
        builder.with_target(false).init();
    }
}

fn load_config() -> Result<AppConfig, DomainError> {
    let config = AppConfig::load()
        .map_err(|e| DomainError::new(ErrorCode::ConfigError, e.to_string()))?;
    config
        .validate()
        .map_err(|e| DomainError::new(ErrorCode::ConfigError, e.to_string()))?;
    Ok(config)
}

async fn run(cli: Cli, config: AppConfig) -> Result<String, DomainError> {
    let source = reference_source(cli.data.as_ref(), &config)?;
    let catalog = ReferenceCatalog::open(source).await?;

    if cli.list {
        return Ok(render_listing(&*catalog.snapshot().await));
    }

    let products = config
        .defaults
        .resolve_products(cli.products, cli.no_products);
    let command = RunComparisonCommand {
        customer_name: cli.customer.unwrap_or(config.defaults.customer),
        archetype_override: cli.archetype,
        products,
        competitor: cli.competitor.unwrap_or(config.defaults.competitor),
    };

    let report = RunComparisonHandler::new(catalog).handle(command).await?;
    cli.format
        .render(&report)
        .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))
}

/// Picks the file source when a path is given, the built-in tables otherwise.
fn reference_source(
    data_path: Option<&PathBuf>,
    config: &AppConfig,
) -> Result<Arc<dyn ReferenceDataSource>, DomainError> {
    let default_archetype = config.reference.default_archetype.clone();

    match data_path.or(config.reference.data_path.as_ref()) {
        Some(path) => {
            let mut source = FileReferenceSource::new(path)?;
            if let Some(archetype) = default_archetype {
                source = source.with_default_archetype(archetype);
            }
            Ok(Arc::new(source))
        }
        None => {
            let mut source = StaticReferenceSource::demo();
            if let Some(archetype) = default_archetype {
                source = source.with_default_archetype(archetype);
            }
            Ok(Arc::new(source))
        }
    }
}
