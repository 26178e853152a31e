//! CLI command implementations.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod store;

use clap::{Args, Subcommand};

/// Arguments for the store command.
#[derive(Args)]
pub struct StoreArgs {
    /// Start on a category chip.
    #[arg(long)]
    pub category: Option<String>,

    /// Start with a search query applied.
    #[arg(long)]
    pub query: Option<String>,
}

/// Arguments for the admin command.
#[derive(Args)]
pub struct AdminArgs {
    /// Email prefilled on the login form.
    #[arg(long)]
    pub email: Option<String>,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List products the way the storefront would.
    List {
        /// Filter by category key.
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive name search.
        #[arg(long)]
        query: Option<String>,

        /// Include draft and archived products.
        #[arg(long)]
        all: bool,
    },
    /// Show one product in full.
    Show {
        /// Product ID.
        id: String,
    },
    /// List hero slides in display order.
    Slides {
        /// Include inactive slides.
        #[arg(long)]
        all: bool,
    },
    /// List category chips.
    Categories,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart lines and total.
    Show,
    /// Add a product selection to the cart.
    Add {
        /// Product ID.
        id: String,

        /// Size token, as listed by `catalog show`.
        #[arg(short, long)]
        size: String,

        /// Color token, as listed by `catalog show`.
        #[arg(long)]
        color: String,

        /// Units to add.
        #[arg(short, long, default_value = "1")]
        quantity: i64,
    },
    /// Adjust a line's quantity by a delta.
    Update {
        /// Line number as shown by `cart show` (1-based).
        line: usize,

        /// Quantity delta, may be negative.
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
    /// Remove a line.
    Remove {
        /// Line number as shown by `cart show` (1-based).
        line: usize,
    },
    /// Render the WhatsApp checkout hand-off.
    Checkout,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Show which config file is in use.
    Path,
}
