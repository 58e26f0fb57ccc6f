//! Aurum CLI - Store seeding and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Write seed data to the data directory
//! aurum seed
//!
//! # Reset a previously seeded data directory
//! aurum seed --force
//!
//! # Browse the catalog
//! aurum catalog --category ring --sort price-low
//!
//! # Manage orders and inquiries (admin password required for mutations)
//! aurum orders list
//! aurum orders set-status ORD-001 shipped --password admin123
//! aurum inquiries list
//! aurum inquiries set-status INQ-1770000000000 read --password admin123
//! ```
//!
//! The data directory and admin password come from `AURUM_DATA_DIR` and
//! `AURUM_ADMIN_PASSWORD` (see `aurum_store::config`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use aurum_core::{Category, InquiryStatus, OrderStatus};
use aurum_store::models::CatalogSort;

mod commands;

#[derive(Parser)]
#[command(name = "aurum")]
#[command(author, version, about = "Aurum Atelier store tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write seed data to the data directory
    Seed {
        /// Overwrite existing data
        #[arg(long)]
        force: bool,
    },
    /// List the product catalog
    Catalog {
        /// Only show one category (`chain`, `ring`, `bracelet`, `other`)
        #[arg(short, long)]
        category: Option<Category>,

        /// Sort order (`featured`, `price-low`, `price-high`, `name`)
        #[arg(short, long, default_value = "featured")]
        sort: CatalogSort,
    },
    /// Manage orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Manage customer inquiries
    Inquiries {
        #[command(subcommand)]
        action: InquiryAction,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// List all orders
    List,
    /// Set an order's status
    SetStatus {
        /// Order id (e.g. ORD-001)
        id: String,

        /// New status (`pending`, `processing`, `shipped`, `delivered`)
        status: OrderStatus,

        /// Admin password
        #[arg(short, long)]
        password: String,
    },
}

#[derive(Subcommand)]
enum InquiryAction {
    /// List all inquiries
    List,
    /// Set an inquiry's status
    SetStatus {
        /// Inquiry id
        id: String,

        /// New status (`new`, `read`, `replied`)
        status: InquiryStatus,

        /// Admin password
        #[arg(short, long)]
        password: String,
    },
}

fn main() {
    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { force } => commands::seed::run(force)?,
        Commands::Catalog { category, sort } => commands::catalog::run(category, sort)?,
        Commands::Orders { action } => match action {
            OrderAction::List => commands::orders::list()?,
            OrderAction::SetStatus {
                id,
                status,
                password,
            } => commands::orders::set_status(&id, status, &password)?,
        },
        Commands::Inquiries { action } => match action {
            InquiryAction::List => commands::inquiries::list()?,
            InquiryAction::SetStatus {
                id,
                status,
                password,
            } => commands::inquiries::set_status(&id, status, &password)?,
        },
    }
    Ok(())
}
