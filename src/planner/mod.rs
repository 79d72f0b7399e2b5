//! Search planner subsystem
//!
//! Decides which query shape a search request maps to.
//!
//! # Design Principles
//!
//! - Deterministic: same inputs → same plan
//! - Explicit: option combinations without a defined plan are rejected,
//!   never guessed
//! - Stateless: planning reads no catalog data and holds no state
//!
//! # Plan composition (strict order)
//!
//! 1. Text lookup: title substring, falling back to author name
//! 2. At most one restriction: format type or physical flag
//! 3. At most one projection: titles only

mod ast;
mod errors;
mod explain;
mod planner;

pub use ast::{Predicate, Projection, SearchOptions};
pub use errors::{PlannerError, PlannerErrorCode, PlannerResult};
pub use explain::ExplainPlan;
pub use planner::{PlanShape, QueryPlanner, SearchPlan};
