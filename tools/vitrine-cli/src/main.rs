//! Vitrine CLI - the demo storefront and its admin panel in a terminal.
//!
//! Commands:
//! - `vitrine store` - Browse the storefront interactively
//! - `vitrine admin` - Log into the admin panel
//! - `vitrine catalog` - Inspect products, slides, and categories
//! - `vitrine cart` - Manage the persisted cart
//! - `vitrine config` - Manage configuration

mod app;
mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AdminArgs, CartArgs, CatalogArgs, ConfigArgs, StoreArgs};

/// Vitrine CLI - Browse and administer the Vitrine demo store
#[derive(Parser)]
#[command(name = "vitrine")]
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

    /// Directory for durable state such as the cart
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the storefront interactively
    Store(StoreArgs),

    /// Log into the admin panel
    Admin(AdminArgs),

    /// Inspect products, slides, and categories
    Catalog(CatalogArgs),

    /// Manage the persisted cart
    Cart(CartArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), cli.data_dir.as_deref(), output)?;

    // Execute command
    let result = match cli.command {
        Commands::Store(args) => commands::store::run(args, &ctx).await,
        Commands::Admin(args) => commands::admin::run(args, &ctx).await,
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
