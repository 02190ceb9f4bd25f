//! Scenario runner for repeated projections
//!
//! Pre-builds the engine configuration once, then allows running many
//! projections (wizard re-invocations, sensitivity sweeps, batch files)
//! without reconstructing config per call.

use crate::input::{ProjectionInput, ValidationError};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Pre-configured runner for repeated projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// // Re-run as the wizard's inputs evolve
/// for input in snapshots {
///     let result = runner.run(&input)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create a runner with the default configuration
    pub fn new() -> Self {
        Self {
            engine: ProjectionEngine::default(),
        }
    }

    /// Create a runner with a specific configuration
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Run a single projection
    pub fn run(&self, input: &ProjectionInput) -> Result<ProjectionResult, ValidationError> {
        self.engine.project(input)
    }

    /// Run projections for multiple scenarios with the same config
    pub fn run_batch(
        &self,
        inputs: &[ProjectionInput],
    ) -> Vec<Result<ProjectionResult, ValidationError>> {
        inputs.iter().map(|input| self.run(input)).collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
