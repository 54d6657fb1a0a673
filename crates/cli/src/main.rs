//! Slate CLI - customer tab ledger for small shops.
//!
//! # Usage
//!
//! ```bash
//! # Put a new customer on the slate
//! slate add --name "John Doe" --phone 5551234567 --amount 100
//!
//! # Record a purchase (positive) or payment (negative)
//! slate adjust <id> 50
//! slate adjust <id> -- -30
//!
//! # Search and inspect
//! slate list jo
//! slate show <id>
//!
//! # Reminders
//! slate remind <id>
//! slate template set "Hi {name}, you owe ${amount}"
//!
//! # Backup
//! slate export
//! slate import credit-customers-backup.json
//! ```
//!
//! Data lives as JSON blobs under `SLATE_DATA_DIR` (default `.slate`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use slate_core::CustomerId;
use slate_ledger::{FileStore, Ledger, SlateConfig};

mod commands;

#[derive(Parser)]
#[command(name = "slate")]
#[command(author, version, about = "Shop credit tracker - customer tabs and reminders")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new customer with an initial credit
    Add {
        /// Customer name
        #[arg(short, long)]
        name: String,

        /// Phone number (must be unique)
        #[arg(short, long)]
        phone: String,

        /// Initial credit amount (non-negative)
        #[arg(short, long)]
        amount: String,

        /// Street address
        #[arg(long)]
        address: Option<String>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,

        /// Date of the last purchase (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        last_purchase: Option<NaiveDate>,
    },
    /// Record a purchase (positive delta) or payment (negative delta)
    Adjust {
        /// Customer id
        id: CustomerId,

        /// Signed amount; use `--` before a negative value
        #[arg(allow_hyphen_values = true)]
        delta: Decimal,
    },
    /// Delete a customer and their history
    Delete {
        /// Customer id
        id: CustomerId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// List customers, optionally filtered by name or phone
    List {
        /// Search term (name matches case-insensitively, phone exactly)
        term: Option<String>,
    },
    /// Show a customer's full record and transaction history
    Show {
        /// Customer id
        id: CustomerId,
    },
    /// Generate a balance reminder message for a customer
    Remind {
        /// Customer id
        id: CustomerId,
    },
    /// View or change the reminder template
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },
    /// Write the full collection to a backup file
    Export {
        /// Output path
        #[arg(short, long, default_value = "credit-customers-backup.json")]
        out: PathBuf,
    },
    /// Replace the collection from a backup file
    Import {
        /// Backup file to read
        path: PathBuf,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum TemplateAction {
    /// Print the current template and a preview
    Show,
    /// Replace the template; use {name} and {amount} as placeholders
    Set {
        /// New template text
        text: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = SlateConfig::from_env();
    let mut ledger = Ledger::open(Box::new(FileStore::new(config.data_dir)))?;

    match cli.command {
        Commands::Add {
            name,
            phone,
            amount,
            address,
            notes,
            last_purchase,
        } => commands::customers::add(
            &mut ledger,
            name,
            phone,
            amount,
            address,
            notes,
            last_purchase,
        )?,
        Commands::Adjust { id, delta } => commands::customers::adjust(&mut ledger, id, delta)?,
        Commands::Delete { id, yes } => commands::customers::delete(&mut ledger, id, yes)?,
        Commands::List { term } => commands::customers::list(&ledger, term.as_deref().unwrap_or("")),
        Commands::Show { id } => commands::customers::show(&ledger, id),
        Commands::Remind { id } => commands::remind::remind(&ledger, id),
        Commands::Template { action } => match action {
            TemplateAction::Show => commands::remind::template_show(&ledger),
            TemplateAction::Set { text } => commands::remind::template_set(&mut ledger, text)?,
        },
        Commands::Export { out } => commands::backup::export(&ledger, &out)?,
        Commands::Import { path, yes } => commands::backup::import(&mut ledger, &path, yes)?,
    }
    Ok(())
}
