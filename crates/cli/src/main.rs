//! ChineTonUsine CLI - card store seeding and inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed a card store directory with demo cards
//! ctu-cli seed -d ./data/cards
//!
//! # List cards in a store (optionally scoped to one supplier)
//! ctu-cli cards list -d ./data/cards
//! ctu-cli cards list -d ./data/cards -s sup-atelier-lefort
//!
//! # Show one card as JSON
//! ctu-cli cards show -d ./data/cards card-seed-example
//!
//! # Print the effective portal configuration
//! ctu-cli config
//! ```
//!
//! # Commands
//!
//! - `seed` - Seed a card store with demo cards
//! - `cards list` / `cards show` - Inspect a card store
//! - `config` - Print the effective portal configuration

#![cfg_attr(not(test), forbid(unsafe_code))]
// A CLI's job is to write to stdout
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ctu-cli")]
#[command(author, version, about = "ChineTonUsine CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a card store directory with demo cards
    Seed {
        /// Card store directory
        #[arg(short, long)]
        dir: String,

        /// Overwrite an existing card blob
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Inspect a card store
    Cards {
        #[command(subcommand)]
        action: CardsAction,
    },
    /// Print the effective portal configuration
    Config,
}

#[derive(Subcommand)]
enum CardsAction {
    /// List cards in a store
    List {
        /// Card store directory
        #[arg(short, long)]
        dir: String,

        /// Restrict to one supplier id
        #[arg(short, long)]
        supplier: Option<String>,
    },
    /// Show one card as JSON
    Show {
        /// Card store directory
        #[arg(short, long)]
        dir: String,

        /// Card id
        id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { dir, force } => commands::seed::run(&dir, force),
        Commands::Cards { action } => match action {
            CardsAction::List { dir, supplier } => {
                commands::cards::list(&dir, supplier.as_deref())
            }
            CardsAction::Show { dir, id } => commands::cards::show(&dir, &id),
        },
        Commands::Config => commands::config::run(),
    }
}
