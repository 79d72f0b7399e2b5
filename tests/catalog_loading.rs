//! Catalog Loading Tests
//!
//! Config and catalog files on disk through to answered requests:
//! - Config defaults and validation
//! - Catalog validation at load time
//! - Relative catalog paths resolve against the config file
//! - Serve-style requests produce ok/error envelopes

use std::fs;
use std::path::{Path, PathBuf};

use bookcatalog::catalog::{CatalogValidator, MemoryCatalog};
use bookcatalog::cli::{self, handle_request, Config, SearchArgs};
use bookcatalog::BookSearch;
use serde_json::{json, Value};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn catalog_json() -> Value {
    json!({
        "authors": [
            {"id": 1, "first_name": "Octavia", "last_name": "Butler"},
            {"id": 2, "first_name": "Ted", "last_name": "Chiang"}
        ],
        "publishers": [{"id": 1, "name": "Tor"}],
        "books": [
            {"id": 1, "title": "Kindred", "author_id": 1, "publisher_id": 1},
            {"id": 2, "title": "Parable of the Sower", "author_id": 1, "publisher_id": 1},
            {"id": 3, "title": "Exhalation", "author_id": 2, "publisher_id": 1}
        ],
        "book_reviews": [
            {"id": 1, "book_id": 1, "rating": 4},
            {"id": 2, "book_id": 2, "rating": 5},
            {"id": 3, "book_id": 3, "rating": 3}
        ],
        "book_format_types": [
            {"id": 1, "name": "Paperback", "physical": true},
            {"id": 2, "name": "Ebook", "physical": false}
        ],
        "book_formats": [
            {"id": 1, "book_id": 1, "book_format_type_id": 1},
            {"id": 2, "book_id": 2, "book_format_type_id": 2},
            {"id": 3, "book_id": 3, "book_format_type_id": 2}
        ]
    })
}

/// Writes a catalog and a config pointing at it by relative path
fn write_files(dir: &Path, catalog: &Value, extra: Value) -> PathBuf {
    fs::write(dir.join("catalog.json"), catalog.to_string()).unwrap();

    let mut config = json!({"catalog_path": "catalog.json", "log_searches": false});
    if let (Some(obj), Some(extra)) = (config.as_object_mut(), extra.as_object()) {
        for (k, v) in extra {
            obj.insert(k.clone(), v.clone());
        }
    }

    let config_path = dir.join("bookcatalog.json");
    fs::write(&config_path, config.to_string()).unwrap();
    config_path
}

fn load(config_path: &Path) -> MemoryCatalog {
    let config = Config::load(config_path).unwrap();
    MemoryCatalog::load(&config.catalog_path_from(config_path), &config.validator()).unwrap()
}

// =============================================================================
// Configuration Tests
// =============================================================================

/// Relative catalog paths are resolved next to the config file.
#[test]
fn test_relative_catalog_path() {
    let dir = TempDir::new().unwrap();
    let config_path = write_files(dir.path(), &catalog_json(), json!({}));

    let config = Config::load(&config_path).unwrap();
    assert_eq!(config.catalog_path_from(&config_path), dir.path().join("catalog.json"));
    assert!(!config.log_searches);
}

/// A config without catalog_path is rejected.
#[test]
fn test_config_requires_catalog_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bookcatalog.json");
    fs::write(&path, r#"{"log_searches": true}"#).unwrap();

    let err = Config::load(&path).unwrap_err();
    assert_eq!(err.code_str(), "CATALOG_CLI_CONFIG_ERROR");
}

/// A missing config file is a config error, not a panic.
#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let err = Config::load(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.code_str(), "CATALOG_CLI_CONFIG_ERROR");
}

// =============================================================================
// Catalog Validation Tests
// =============================================================================

/// max_title_length from the config applies at load time.
#[test]
fn test_title_length_limit_from_config() {
    let dir = TempDir::new().unwrap();
    let config_path = write_files(dir.path(), &catalog_json(), json!({"max_title_length": 10}));

    let config = Config::load(&config_path).unwrap();
    let err = MemoryCatalog::load(&config.catalog_path_from(&config_path), &config.validator())
        .unwrap_err();
    assert_eq!(err.code(), "CATALOG_VALIDATION_FAILED");
}

/// Reviews must reference an existing book.
#[test]
fn test_dangling_review_rejected() {
    let dir = TempDir::new().unwrap();
    let mut catalog = catalog_json();
    catalog["book_reviews"]
        .as_array_mut()
        .unwrap()
        .push(json!({"id": 4, "book_id": 99, "rating": 1}));
    let config_path = write_files(dir.path(), &catalog, json!({}));

    let config = Config::load(&config_path).unwrap();
    let err = MemoryCatalog::load(&config.catalog_path_from(&config_path), &config.validator())
        .unwrap_err();
    assert_eq!(err.code(), "CATALOG_DANGLING_REFERENCE");
}

/// Malformed catalog files are reported as invalid JSON.
#[test]
fn test_malformed_catalog_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, "{ not json").unwrap();

    let err = MemoryCatalog::load(&path, &CatalogValidator::default()).unwrap_err();
    assert_eq!(err.code(), "CATALOG_INVALID_JSON");
}

/// A missing catalog file is an I/O error.
#[test]
fn test_missing_catalog_file() {
    let dir = TempDir::new().unwrap();
    let err = MemoryCatalog::load(&dir.path().join("absent.json"), &CatalogValidator::default())
        .unwrap_err();
    assert_eq!(err.code(), "CATALOG_IO_ERROR");
}

// =============================================================================
// Request Tests
// =============================================================================

/// A loaded catalog answers ranked, fallback and restricted requests.
#[test]
fn test_requests_against_loaded_catalog() {
    let dir = TempDir::new().unwrap();
    let config_path = write_files(dir.path(), &catalog_json(), json!({}));
    let catalog = load(&config_path);
    let search = BookSearch::new(&catalog).with_logging(false);

    let all = handle_request(&search, json!({}));
    assert_eq!(all["status"], "ok");
    let titles: Vec<&str> = all["data"]["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Parable of the Sower", "Kindred", "Exhalation"]);

    let by_author = handle_request(
        &search,
        json!({"query": "Butler", "options": {"title_only": true}}),
    );
    assert_eq!(by_author["data"]["titles"], json!(["Parable of the Sower", "Kindred"]));

    let digital = handle_request(
        &search,
        json!({"query": "", "options": {"title_only": true, "book_format_physical": false}}),
    );
    assert_eq!(digital["data"]["titles"], json!(["Parable of the Sower", "Exhalation"]));
}

/// Rejected option combinations come back as error envelopes.
#[test]
fn test_rejected_request_envelope() {
    let dir = TempDir::new().unwrap();
    let config_path = write_files(dir.path(), &catalog_json(), json!({}));
    let catalog = load(&config_path);
    let search = BookSearch::new(&catalog).with_logging(false);

    let response = handle_request(
        &search,
        json!({"query": "Kindred", "options": {"book_format_type_id": 1, "book_format_physical": true}}),
    );
    assert_eq!(response["status"], "error");
    assert_eq!(response["code"], "CATALOG_OPTIONS_AMBIGUOUS");

    let response = handle_request(&search, json!({"query": 7}));
    assert_eq!(response["code"], "CATALOG_INVALID_REQUEST");
}

/// The search command runs end to end from a config path.
#[test]
fn test_search_command() {
    let dir = TempDir::new().unwrap();
    let config_path = write_files(dir.path(), &catalog_json(), json!({}));

    let args = SearchArgs {
        query: Some("Exhalation".into()),
        title_only: true,
        format_type: None,
        physical: None,
    };
    cli::search(&config_path, &args).unwrap();
    cli::explain(&config_path, &args).unwrap();
    cli::rating(&config_path, 1).unwrap();
}

/// A bad catalog stops the command with a load error.
#[test]
fn test_search_command_bad_catalog() {
    let dir = TempDir::new().unwrap();
    let mut catalog = catalog_json();
    catalog["books"][0]["title"] = json!("   ");
    let config_path = write_files(dir.path(), &catalog, json!({}));

    let args = SearchArgs {
        query: None,
        title_only: false,
        format_type: None,
        physical: None,
    };
    let err = cli::search(&config_path, &args).unwrap_err();
    assert_eq!(err.code_str(), "CATALOG_CLI_LOAD_FAILED");
}
