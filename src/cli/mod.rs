//! CLI module
//!
//! Provides command-line interface for:
//! - search: one-shot ranked search
//! - explain: one-shot plan inspection
//! - rating: average rating of one book
//! - serve: line-oriented JSON search loop over stdin/stdout

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, SearchArgs};
pub use commands::{explain, handle_request, rating, run, run_command, search, serve, Config, SearchRequest};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{error_response, ok_response, write_error, write_response};
