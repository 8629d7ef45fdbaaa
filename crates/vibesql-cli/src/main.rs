use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};
use vibesql_metadata::{DetachedSession, MetadataEngine};

mod commands;
mod config;
mod error;
mod fixture;
mod formatter;

use commands::MetaCommand;
use config::CliConfig;
use fixture::CatalogFixture;
use formatter::{OutputFormat, ResultFormatter};

#[derive(Parser, Debug)]
#[command(name = "vibesql-meta")]
#[command(version)]
#[command(about = "Browse VibeSQL catalog metadata views")]
#[command(long_about = "Browse VibeSQL catalog metadata views

The catalog is read from a TOML fixture describing schemas, tables,
columns, keys, indexes and synonyms. Every subcommand prints one
metadata view (tables, columns, keys, ...).

CONFIGURATION:
  Settings are read from ~/.vibesql-meta.toml (or --config):
    [display]
    format = \"table\"        # table, json or csv

    [logging]
    level = \"warn\"          # used when RUST_LOG is unset

    [metadata]
    search_escape = \"\\\\\"    # LIKE escape character
    page_size = 4096         # divisor for PAGES in index-info

EXAMPLES:
  vibesql-meta --fixture shop.toml tables --schema SALES
  vibesql-meta --fixture shop.toml columns --table 'ORD%' --format json
  vibesql-meta --fixture shop.toml cross-reference --primary-table CUSTOMERS --foreign-table ORDERS")]
struct Cli {
    /// Catalog fixture (TOML)
    #[arg(short, long, value_name = "FILE")]
    fixture: PathBuf,

    /// Configuration file (defaults to ~/.vibesql-meta.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_parser = ["table", "json", "csv"], value_name = "FORMAT")]
    format: Option<String>,

    #[command(subcommand)]
    command: MetaCommand,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.logging.level.to_lowercase())),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .ok(); // Ignore error if already initialized

    // Command-line format wins over the configured one
    let format = cli
        .format
        .as_deref()
        .and_then(OutputFormat::parse)
        .or_else(|| config.output_format())
        .unwrap_or(OutputFormat::Table);

    info!("Loading fixture {}", cli.fixture.display());
    let catalog = CatalogFixture::load(&cli.fixture)?.build()?;

    let engine = MetadataEngine::new(&catalog, DetachedSession::new().into_shared(), config.metadata.clone());
    let result = cli.command.run(&engine)?;
    debug!("{}: {} rows", cli.command.name(), result.row_count());

    ResultFormatter::new(format).print_result(&result);
    Ok(())
}
