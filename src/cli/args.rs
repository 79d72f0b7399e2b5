//! CLI argument definitions using clap
//!
//! Commands:
//! - bookcatalog search --config <path> [filters]
//! - bookcatalog explain --config <path> [filters]
//! - bookcatalog rating --config <path> --book <id>
//! - bookcatalog serve --config <path>

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::planner::SearchOptions;

/// bookcatalog - search a book catalog ranked by review rating
#[derive(Parser, Debug)]
#[command(name = "bookcatalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the catalog and print ranked results
    Search {
        /// Path to configuration file
        #[arg(long, default_value = "./bookcatalog.json")]
        config: PathBuf,

        #[command(flatten)]
        request: SearchArgs,
    },

    /// Print the search plan without executing it
    Explain {
        /// Path to configuration file
        #[arg(long, default_value = "./bookcatalog.json")]
        config: PathBuf,

        #[command(flatten)]
        request: SearchArgs,
    },

    /// Print the average rating of one book
    Rating {
        /// Path to configuration file
        #[arg(long, default_value = "./bookcatalog.json")]
        config: PathBuf,

        /// Book id
        #[arg(long)]
        book: u64,
    },

    /// Answer JSON search requests read line by line from stdin
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./bookcatalog.json")]
        config: PathBuf,
    },
}

/// Query text and filter flags shared by `search` and `explain`
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Free-text query (title substring, or exact author name)
    #[arg(long)]
    pub query: Option<String>,

    /// Return titles only
    #[arg(long)]
    pub title_only: bool,

    /// Restrict to a format type id
    #[arg(long = "format-type")]
    pub format_type: Option<u64>,

    /// Restrict to physical (true) or digital (false) formats
    #[arg(long)]
    pub physical: Option<bool>,
}

impl SearchArgs {
    /// Options as the planner sees them; `None` when no filter flag was given
    pub fn options(&self) -> Option<SearchOptions> {
        let options = SearchOptions {
            title_only: self.title_only,
            book_format_type_id: self.format_type,
            book_format_physical: self.physical,
        };
        (options.set_count() > 0).then_some(options)
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
