//! Scenario runner for batch projections
//!
//! Holds one engine configuration and runs many assumption sets against it
//! without rebuilding the engine per call.

use crate::inputs::{GrowthInputs, Scenario};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Runner for projecting many assumption sets under one configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// for scenario in load_scenarios("scenarios.csv")? {
///     let result = runner.run(&scenario.inputs);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    config: ProjectionConfig,
}

impl ScenarioRunner {
    /// Create a runner with the default 18-month horizon
    pub fn new() -> Self {
        Self {
            config: ProjectionConfig::default(),
        }
    }

    /// Create a runner with a specific projection config
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run a single projection
    pub fn run(&self, inputs: &GrowthInputs) -> ProjectionResult {
        let engine = ProjectionEngine::new(self.config.clone());
        engine.project(inputs)
    }

    /// Run projections for multiple assumption sets, in input order
    pub fn run_batch(&self, batch: &[GrowthInputs]) -> Vec<ProjectionResult> {
        let engine = ProjectionEngine::new(self.config.clone());
        batch.iter().map(|inputs| engine.project(inputs)).collect()
    }

    /// Run all named scenarios, pairing each name with its result
    pub fn run_scenarios(&self, scenarios: &[Scenario]) -> Vec<(String, ProjectionResult)> {
        let engine = ProjectionEngine::new(self.config.clone());
        scenarios
            .iter()
            .map(|scenario| (scenario.name.clone(), engine.project(&scenario.inputs)))
            .collect()
    }

    /// The runner's projection config
    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
