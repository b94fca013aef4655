//! Order tracking CLI - Database migrations and shipper management.
//!
//! # Usage
//!
//! ```bash
//! # Run tracking database migrations
//! ot-cli migrate
//!
//! # Install the default carriers (DHL, UPS, FedEx, USPS) into an empty registry
//! ot-cli shippers seed
//!
//! # Install carriers from a YAML file instead
//! ot-cli shippers seed --file carriers.yaml
//!
//! # List shippers
//! ot-cli shippers list --active
//!
//! # Remove every shipper and all order tracking
//! ot-cli purge --yes
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ot-cli")]
#[command(author, version, about = "Order tracking CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage shippers
    Shippers {
        #[command(subcommand)]
        action: ShipperAction,
    },
    /// Delete all shippers and order tracking data
    Purge {
        /// Confirm the purge
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ShipperAction {
    /// Seed shippers into an empty registry
    Seed {
        /// YAML file listing shippers (defaults to the built-in carriers)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// List shippers sorted by name
    List {
        /// Only show active shippers
        #[arg(long)]
        active: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Shippers { action } => match action {
            ShipperAction::Seed { file } => commands::shippers::seed(file.as_deref()).await?,
            ShipperAction::List { active } => commands::shippers::list(active).await?,
        },
        Commands::Purge { yes } => commands::purge::run(yes).await?,
    }
    Ok(())
}
