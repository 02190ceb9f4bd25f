//! Retirement Planner - Deterministic retirement-readiness projection engine
//!
//! This library provides:
//! - Year-by-year accumulation projections (savings growth over the working years)
//! - Year-by-year decumulation projections (inflation-adjusted withdrawals net of
//!   guaranteed benefit income)
//! - Sustainability assessment (withdrawal-rate classification, depletion detection)
//! - Scenario batch evaluation and CSV scenario loading

pub mod assumptions;
pub mod input;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{PlanningDefaults, ReturnProfile, RiskLevel, RiskThresholds};
pub use input::{ContributionSpec, Percentage, ProjectionInput, Ratio, ValidationError};
pub use projection::{project, ProjectionEngine, ProjectionResult};
pub use scenario::ScenarioRunner;
