//! Observability subsystem
//!
//! Structured JSON logging of catalog and search lifecycle events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on search results
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use bookcatalog::observability::{log_event_with_fields, Event, Logger};
//!
//! Logger::info("CATALOG_LOADED", &[("books", "42")]);
//! log_event_with_fields(Event::SearchComplete, &[("results", "3")]);
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::{ObservationScope, Timer};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
