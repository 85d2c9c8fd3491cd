//! Catalog CLI - Command line tool for the storefront product catalog.
//!
//! Commands:
//! - `catalog products` - List products with filters, sorting and paging
//! - `catalog product` - Show a single product
//! - `catalog filters` - Show brand, color and category counts
//! - `catalog request` - Run a request through the API handlers
//! - `catalog config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

use commands::{ConfigArgs, FiltersArgs, ProductArgs, ProductsArgs, RequestArgs};
use config::{LogFormat, LoggingConfig};

/// Catalog CLI - Query the storefront product catalog
#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Product document to load (overrides the config file)
    #[arg(long, global = true)]
    products: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products(ProductsArgs),

    /// Show one product by ID
    Product(ProductArgs),

    /// Show facet counts for the filter sidebar
    Filters(FiltersArgs),

    /// Dispatch a request through the API handlers
    Request(RequestArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, cli.products.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    init_tracing(cli.verbose, &ctx.config.logging);

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Filters(args) => commands::filters::run(args, &ctx).await,
        Commands::Request(args) => commands::request::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Install the log subscriber. Logs go to stderr so command output stays
/// machine-readable.
fn init_tracing(verbose: bool, logging: &LoggingConfig) {
    let default_level = if verbose { "debug" } else { logging.level.as_str() };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (human, json) = match logging.format {
        LogFormat::Human => (Some(fmt::layer().with_writer(std::io::stderr)), None),
        LogFormat::Json => (
            None,
            Some(fmt::layer().json().with_writer(std::io::stderr)),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(human)
        .with(json)
        .init();
}
