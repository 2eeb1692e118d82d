//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Headless pagination engine CLI
#[derive(Parser, Debug)]
#[command(name = "pagekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Collection file (JSON array, `-` for stdin)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Settings file (YAML, or JSON with a .json extension)
    #[arg(short = 'O', long, global = true)]
    pub options: Option<PathBuf>,

    /// Items per page (overrides the settings file)
    #[arg(short = 's', long, global = true, allow_negative_numbers = true)]
    pub page_size: Option<i64>,

    /// Page to start on (overrides the settings file)
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one page of the collection with its controls
    Show,

    /// Print the page-number sequence for navigation controls
    Sequence {
        /// Total number of pages
        #[arg(short, long)]
        total_pages: usize,

        /// Width of the numbered window (overrides the settings file)
        #[arg(short, long)]
        max_buttons: Option<usize>,
    },

    /// Run navigation steps and print the page after each one
    Walk {
        /// Comma-separated steps: next, prev, first, last, a page number, or size=N
        #[arg(long, value_delimiter = ',')]
        steps: Vec<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per command)
    Json,
    /// Human-readable output
    Pretty,
}
