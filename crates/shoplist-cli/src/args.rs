use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shoplist")]
#[command(about = "Keep a shopping list in a local SQLite file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml and the log file
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// SQLite file to use (defaults to ./shopping_list.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive list (default)
    Tui,

    /// Write config.toml pointing at the current database
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Print the items to purchase, or every item with --all
    List {
        #[arg(long)]
        all: bool,
    },

    /// Add an item flagged for purchase
    Add {
        description: String,

        quantity: String,

        #[arg(long)]
        barcode: Option<String>,
    },

    /// Flip the to-purchase flag of an item
    Toggle { id: i64 },

    /// Delete an item (no error if it is already gone)
    Delete { id: i64 },

    /// Update a single field of an item
    Set {
        id: i64,

        /// quantity, description, barcode, last_price or to_purchase
        field: String,

        /// New value; empty clears barcode and last_price
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}
