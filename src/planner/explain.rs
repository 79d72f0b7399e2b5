//! Explain output for search plans
//!
//! Produces deterministic, serializable explain output without touching
//! the catalog.

use std::fmt;

use serde::Serialize;

use super::errors::PlannerError;
use super::planner::SearchPlan;

/// Explain plan output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainPlan {
    /// Whether planning succeeded
    pub accepted: bool,
    /// Decision branch (if accepted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    /// Lookup steps in evaluation order; the second is the fallback
    pub lookup: Vec<String>,
    /// Restriction applied after the lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<String>,
    /// Final projection (if accepted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<String>,
    /// Rejection error code (if rejected)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_code: Option<String>,
    /// Rejection reason (if rejected)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl ExplainPlan {
    /// Creates an explain plan from a successful search plan
    pub fn from_plan(plan: &SearchPlan) -> Self {
        let lookup = [plan.title_predicate(), plan.author_predicate()]
            .into_iter()
            .flatten()
            .map(|p| p.to_string())
            .collect();

        Self {
            accepted: true,
            shape: Some(plan.shape.as_str().to_string()),
            lookup,
            restriction: plan.restriction.as_ref().map(|p| p.to_string()),
            projection: Some(plan.projection.as_str().to_string()),
            rejection_code: None,
            rejection_reason: None,
        }
    }

    /// Creates an explain plan from a planning error
    pub fn from_error(err: &PlannerError) -> Self {
        Self {
            accepted: false,
            shape: None,
            lookup: Vec::new(),
            restriction: None,
            projection: None,
            rejection_code: Some(err.code().code().to_string()),
            rejection_reason: Some(err.message().to_string()),
        }
    }
}

impl fmt::Display for ExplainPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.accepted {
            return write!(
                f,
                "REJECTED {}: {}",
                self.rejection_code.as_deref().unwrap_or("UNKNOWN"),
                self.rejection_reason.as_deref().unwrap_or("")
            );
        }

        writeln!(f, "SHAPE {}", self.shape.as_deref().unwrap_or(""))?;
        for (i, step) in self.lookup.iter().enumerate() {
            let label = if i == 0 { "LOOKUP" } else { "FALLBACK" };
            writeln!(f, "{} {}", label, step)?;
        }
        if let Some(restriction) = &self.restriction {
            writeln!(f, "RESTRICT {}", restriction)?;
        }
        write!(f, "PROJECT {}", self.projection.as_deref().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{QueryPlanner, SearchOptions};

    #[test]
    fn test_explain_accepted_plan() {
        let options = SearchOptions::new().with_title_only().with_physical(true);
        let plan = QueryPlanner::new().plan(Some("Dune"), Some(&options)).unwrap();
        let explain = ExplainPlan::from_plan(&plan);

        assert!(explain.accepted);
        assert_eq!(explain.shape.as_deref(), Some("TWO_OPTIONS"));
        assert_eq!(
            explain.lookup,
            vec![
                "title_contains \"Dune\"".to_string(),
                "author_name_eq \"Dune\"".to_string()
            ]
        );
        assert_eq!(explain.restriction.as_deref(), Some("physical_eq true"));
        assert_eq!(explain.projection.as_deref(), Some("TITLES"));
    }

    #[test]
    fn test_explain_display() {
        let plan = QueryPlanner::new().plan(Some("Dune"), None).unwrap();
        let text = ExplainPlan::from_plan(&plan).to_string();
        assert_eq!(
            text,
            "SHAPE LOOKUP\nLOOKUP title_contains \"Dune\"\nFALLBACK author_name_eq \"Dune\"\nPROJECT BOOKS"
        );
    }

    #[test]
    fn test_explain_rejection() {
        let err = QueryPlanner::new()
            .plan(Some("Dune"), Some(&SearchOptions::new()))
            .unwrap_err();
        let explain = ExplainPlan::from_error(&err);

        assert!(!explain.accepted);
        assert_eq!(explain.rejection_code.as_deref(), Some("CATALOG_OPTIONS_MISSING"));

        let json = serde_json::to_value(&explain).unwrap();
        assert_eq!(json["accepted"], false);
        assert!(json.get("shape").is_none());
    }
}
