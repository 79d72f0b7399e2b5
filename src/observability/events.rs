//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in the catalog search lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded
    ConfigLoaded,
    /// Catalog snapshot loaded and validated
    CatalogLoaded,
    /// Search plan chosen
    SearchPlanned,
    /// Title lookup was empty, author lookup used instead
    SearchFallbackAuthor,
    /// Search executed successfully
    SearchComplete,
    /// Search options rejected by the planner
    SearchRejected,
    /// Search failed during execution
    SearchFailed,
    /// Serve loop ready for requests
    Serving,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CatalogLoaded => "CATALOG_LOADED",
            Event::SearchPlanned => "SEARCH_PLANNED",
            Event::SearchFallbackAuthor => "SEARCH_FALLBACK_AUTHOR",
            Event::SearchComplete => "SEARCH_COMPLETE",
            Event::SearchRejected => "SEARCH_REJECTED",
            Event::SearchFailed => "SEARCH_FAILED",
            Event::Serving => "CATALOG_SERVING",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> super::Severity {
        match self {
            Event::SearchRejected => super::Severity::Warn,
            Event::SearchFailed => super::Severity::Error,
            _ => super::Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::Severity;

    #[test]
    fn test_event_names_unique_and_upper_snake() {
        let events = [
            Event::ConfigLoaded,
            Event::CatalogLoaded,
            Event::SearchPlanned,
            Event::SearchFallbackAuthor,
            Event::SearchComplete,
            Event::SearchRejected,
            Event::SearchFailed,
            Event::Serving,
        ];

        let mut names: Vec<&str> = events.iter().map(|e| e.as_str()).collect();
        for name in &names {
            assert!(name.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
        names.sort();
        names.dedup();
        assert_eq!(names.len(), events.len());
    }

    #[test]
    fn test_event_severity() {
        assert_eq!(Event::SearchComplete.severity(), Severity::Info);
        assert_eq!(Event::SearchRejected.severity(), Severity::Warn);
        assert_eq!(Event::SearchFailed.severity(), Severity::Error);
    }
}
