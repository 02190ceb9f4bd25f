//! Planning assumptions: default input table and risk classification policy

mod defaults;
mod risk;

pub use defaults::{PlanningDefaults, ReturnProfile};
pub use risk::{RiskLevel, RiskThresholds};
