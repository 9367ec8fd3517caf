use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "northwind", version)]
#[command(about = "Manage Northwind customers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Start with an empty store instead of the sample customers
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Directory holding config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Create a new customer
    #[command(alias = "n")]
    Create {
        /// Unique customer id (e.g. MANDA)
        id: String,

        /// Contact name
        contact: String,

        /// Company name
        company: String,

        /// City
        #[arg(long)]
        city: Option<String>,
    },

    /// Update fields of an existing customer
    #[command(alias = "u")]
    Update {
        id: String,

        #[arg(long)]
        contact: Option<String>,

        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        postal_code: Option<String>,
    },

    /// Delete a customer
    #[command(alias = "rm")]
    Delete { id: String },

    /// List all customers
    #[command(alias = "ls")]
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a customer and select it
    #[command(alias = "v")]
    Show {
        id: String,

        /// Print JSON instead of a field list
        #[arg(long)]
        json: bool,
    },

    /// Select a customer without printing it
    Select { id: String },

    /// Print the selected customer
    Selected,

    /// Get or set configuration
    Config {
        /// Configuration key (seed-sample-data, prompt, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Read commands from stdin, one per line, in a single session
    Shell,
}
