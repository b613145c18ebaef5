//! Stockdesk CLI - Product catalog management tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed the products API with the sample catalog
//! sd-cli seed
//!
//! # Delete everything first, then seed
//! sd-cli seed --fresh
//!
//! # Delete every product
//! sd-cli purge --yes
//! ```
//!
//! # Commands
//!
//! - `seed` - Load the sample catalog into the products API
//! - `purge` - Delete all products from the products API

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sd-cli")]
#[command(author, version, about = "Stockdesk CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the products API with the sample catalog
    Seed {
        /// Delete existing products before seeding
        #[arg(long)]
        fresh: bool,
    },
    /// Delete all products from the products API
    Purge {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
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
        Commands::Seed { fresh } => commands::seed::run(fresh).await?,
        Commands::Purge { yes } => commands::purge::run(yes).await?,
    }
    Ok(())
}
