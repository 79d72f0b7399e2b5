//! CLI command implementations
//!
//! Every command loads the configuration, then the catalog it points at,
//! before doing anything else. Search failures are reported as JSON error
//! responses; configuration and catalog failures end the process.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::catalog::{CatalogStore, CatalogValidator, MemoryCatalog, DEFAULT_MAX_TITLE_LENGTH};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::planner::SearchOptions;
use crate::search::BookSearch;

use super::args::{Command, SearchArgs};
use super::errors::{CliError, CliResult};
use super::io::{error_response, ok_response, read_requests, write_error, write_json, write_response};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Catalog snapshot to load (required)
    pub catalog_path: String,

    /// Emit search lifecycle events (optional, default true)
    #[serde(default = "default_log_searches")]
    pub log_searches: bool,

    /// Longest accepted book title in characters (optional, default 512)
    #[serde(default = "default_max_title_length")]
    pub max_title_length: usize,
}

fn default_log_searches() -> bool {
    true
}
fn default_max_title_length() -> usize {
    DEFAULT_MAX_TITLE_LENGTH
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        log_event_with_fields(Event::ConfigLoaded, &[("catalog_path", config.catalog_path.as_str())]);

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.catalog_path.trim().is_empty() {
            return Err(CliError::config_error("catalog_path must not be empty"));
        }

        if self.max_title_length == 0 {
            return Err(CliError::config_error("max_title_length must be > 0"));
        }

        Ok(())
    }

    /// Catalog path, resolved relative to the config file's directory
    pub fn catalog_path_from(&self, config_path: &Path) -> PathBuf {
        let catalog = Path::new(&self.catalog_path);
        if catalog.is_absolute() {
            return catalog.to_path_buf();
        }
        config_path
            .parent()
            .map(|dir| dir.join(catalog))
            .unwrap_or_else(|| catalog.to_path_buf())
    }

    /// Validator configured from this file
    pub fn validator(&self) -> CatalogValidator {
        CatalogValidator::new(self.max_title_length)
    }
}

/// One line of `serve` input
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub options: Option<SearchOptions>,
    /// Plan only, do not execute
    #[serde(default)]
    pub explain: bool,
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Search { config, request } => search(&config, &request),
        Command::Explain { config, request } => explain(&config, &request),
        Command::Rating { config, book } => rating(&config, book),
        Command::Serve { config } => serve(&config),
    }
}

/// Load config and catalog
fn boot(config_path: &Path) -> CliResult<(Config, MemoryCatalog)> {
    let config = Config::load(config_path)?;
    let catalog = MemoryCatalog::load(&config.catalog_path_from(config_path), &config.validator())?;
    Ok((config, catalog))
}

/// Run one search and print the results
pub fn search(config_path: &Path, request: &SearchArgs) -> CliResult<()> {
    let (config, catalog) = boot(config_path)?;
    let search = BookSearch::new(&catalog).with_logging(config.log_searches);

    let options = request.options();
    match search.search(request.query.as_deref(), options.as_ref()) {
        Ok(results) => write_response(serde_json::to_value(results)?),
        Err(e) => write_error(e.code(), e.message()),
    }
}

/// Print the plan for a search without running it
pub fn explain(config_path: &Path, request: &SearchArgs) -> CliResult<()> {
    let (config, catalog) = boot(config_path)?;
    let search = BookSearch::new(&catalog).with_logging(config.log_searches);

    let options = request.options();
    let plan = search.explain(request.query.as_deref(), options.as_ref());
    write_response(serde_json::to_value(plan)?)
}

/// Print the average rating of one book
pub fn rating(config_path: &Path, book_id: u64) -> CliResult<()> {
    let (config, catalog) = boot(config_path)?;

    let Some(book) = catalog.book(book_id) else {
        return write_error("CATALOG_UNKNOWN_BOOK", &format!("Book {} not found", book_id));
    };

    let search = BookSearch::new(&catalog).with_logging(config.log_searches);
    write_response(json!({
        "id": book.id,
        "title": book.title,
        "average_rating": search.average_rating(book_id),
    }))
}

/// Answer search requests from stdin until EOF
pub fn serve(config_path: &Path) -> CliResult<()> {
    let (config, catalog) = boot(config_path)?;
    let search = BookSearch::new(&catalog).with_logging(config.log_searches);

    log_event(Event::Serving);

    for request in read_requests() {
        let response = match request {
            Ok(value) => handle_request(&search, value),
            Err(e) => error_response(e.code_str(), e.message()),
        };
        write_json(&response)?;
    }

    Ok(())
}

/// Answers one JSON request
pub fn handle_request<S: CatalogStore>(search: &BookSearch<'_, S>, request: Value) -> Value {
    let request: SearchRequest = match serde_json::from_value(request) {
        Ok(r) => r,
        Err(e) => return error_response("CATALOG_INVALID_REQUEST", &e.to_string()),
    };

    let query = request.query.as_deref();
    let options = request.options.as_ref();

    if request.explain {
        return match serde_json::to_value(search.explain(query, options)) {
            Ok(plan) => ok_response(plan),
            Err(e) => error_response("CATALOG_INVALID_REQUEST", &e.to_string()),
        };
    }

    match search.search(query, options) {
        Ok(results) => match serde_json::to_value(results) {
            Ok(data) => ok_response(data),
            Err(e) => error_response("CATALOG_INVALID_REQUEST", &e.to_string()),
        },
        Err(e) => error_response(e.code(), e.message()),
    }
}
