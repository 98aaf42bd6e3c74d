use serde::{Deserialize, Serialize};

use crate::driver::driver::Driver;
use crate::driver::element::Timeouts;
use crate::error::ScenarioError;

/// Setup step or scenario body. Drives page objects against a live session.
pub type ScenarioFn = fn(&dyn Driver, &Timeouts) -> Result<(), ScenarioError>;

/// One independent test case.
#[derive(Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub body: ScenarioFn,
}

/// An ordered group of scenarios sharing a per-scenario setup step.
#[derive(Clone)]
pub struct Suite {
    pub name: &'static str,
    pub description: &'static str,
    /// Runs before every scenario to bring the app to a known screen
    pub setup: ScenarioFn,
    pub scenarios: Vec<Scenario>,
}

impl Suite {
    pub fn scenario_names(&self) -> Vec<&'static str> {
        self.scenarios.iter().map(|s| s.name).collect()
    }
}

/// Outcome of running one scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioResult {
    /// Suite the scenario belongs to
    pub suite: String,

    /// Scenario name as reported
    pub name: String,

    pub passed: bool,

    /// Number of attempts made, retries included
    pub attempts: u32,

    /// Error from the last failed attempt
    pub error: Option<String>,

    pub duration_ms: u128,
}
