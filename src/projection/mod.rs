//! Projection engine: accumulation, decumulation, and sustainability assessment

mod accumulation;
mod assessment;
mod decumulation;
mod engine;
mod trajectory;

pub use accumulation::simulate_accumulation;
pub use assessment::{assess, average_withdrawal_rate, Assessment};
pub use decumulation::{simulate_decumulation, BenefitIndexation, DecumulationOutcome};
pub use engine::{project, ProjectionConfig, ProjectionEngine};
pub use trajectory::{AccumulationYear, DecumulationYear, ProjectionResult};
