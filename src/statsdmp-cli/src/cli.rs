//! CLI argument definitions for statsdmp

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "statsdmp")]
#[command(about = "Red Alert stats.dmp telemetry viewer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a stats.dmp file and print every field
    Show {
        /// Path to stats.dmp
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Include the raw payload hex for each field
        #[arg(long)]
        raw: bool,

        /// Show only this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Comma-separated countable base tags (default: Red Alert 1 list)
        #[arg(long)]
        countable_tags: Option<String>,

        /// Player slots per countable tag
        #[arg(long, default_value = "8")]
        players: u8,
    },

    /// Print only the per-player countable arrays
    Counts {
        /// Path to stats.dmp
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Comma-separated countable base tags (default: Red Alert 1 list)
        #[arg(long)]
        countable_tags: Option<String>,

        /// Player slots per countable tag
        #[arg(long, default_value = "8")]
        players: u8,
    },
}
