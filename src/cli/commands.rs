//! CLI commands and argument parsing

use crate::config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Schemascope CLI
#[derive(Parser, Debug)]
#[command(name = "schemascope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Infer the type schema of a JSON document
    Infer {
        /// JSON file to inspect
        file: PathBuf,

        /// Dot-path narrowing the inspection (e.g. "data.users")
        #[arg(short, long, default_value = "")]
        path: String,

        /// Project the schema into relational columns
        #[arg(long)]
        to_db: bool,
    },

    /// Fetch records for a configured pipeline
    Fetch {
        /// Pipeline id (file name under the ETL directory, without .json)
        pipeline: String,

        /// Directory containing pipeline JSON files
        #[arg(long, default_value = config::DEFAULT_ETL_DIR)]
        etl_dir: PathBuf,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory containing pipeline JSON files (overrides ETL_DIR)
        #[arg(long)]
        etl_dir: Option<PathBuf>,
    },
}
