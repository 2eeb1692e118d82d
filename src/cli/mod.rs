//! CLI module
//!
//! Command-line interface for paging through JSON collections.
//!
//! # Commands
//!
//! - `show` - Print one page of a collection and its control strip
//! - `sequence` - Print the page-number sequence for a page count
//! - `walk` - Run a navigation script and print each resulting page

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
