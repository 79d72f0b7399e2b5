//! Planner error types
//!
//! Error codes:
//! - CATALOG_OPTIONS_AMBIGUOUS (REJECT)
//! - CATALOG_OPTIONS_MISSING (REJECT)
//!
//! Both are invalid-options rejections: the request is refused before any
//! data is read.

use std::fmt;

/// Severity levels for planner errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Client request rejected
    Reject,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
        }
    }
}

/// Planner-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerErrorCode {
    /// Option combination has no defined plan
    OptionsAmbiguous,
    /// Options given, but no recognized key set
    OptionsMissing,
}

impl PlannerErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            PlannerErrorCode::OptionsAmbiguous => "CATALOG_OPTIONS_AMBIGUOUS",
            PlannerErrorCode::OptionsMissing => "CATALOG_OPTIONS_MISSING",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Reject
    }
}

impl fmt::Display for PlannerErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Planner error type with full context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerError {
    code: PlannerErrorCode,
    message: String,
}

impl PlannerError {
    /// Create an ambiguous options error
    pub fn options_ambiguous(reason: impl Into<String>) -> Self {
        Self {
            code: PlannerErrorCode::OptionsAmbiguous,
            message: reason.into(),
        }
    }

    /// Create a missing option error
    pub fn options_missing() -> Self {
        Self {
            code: PlannerErrorCode::OptionsMissing,
            message: "Options must set one of title_only, book_format_type_id, book_format_physical"
                .into(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> PlannerErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for PlannerError {}

/// Result type for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
