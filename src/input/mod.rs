//! Scenario input model and loading

mod data;
mod units;
pub mod loader;

pub use data::{ContributionSpec, InputBuilder, ProjectionInput, ValidationError};
pub use loader::{load_scenarios, load_scenarios_from_reader};
pub use units::{Percentage, Ratio};
