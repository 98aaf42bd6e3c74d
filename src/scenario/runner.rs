use std::time::Instant;

use tracing::{info, warn};

use crate::driver::driver::Driver;
use crate::driver::element::Timeouts;
use crate::scenario::scenario_model::{Scenario, ScenarioResult, Suite};

/// Runs suites scenario by scenario against one driver session.
pub struct ScenarioRunner {
    pub timeouts: Timeouts,
    /// Extra attempts for a failing scenario
    pub retries: u32,
}

impl ScenarioRunner {
    pub fn new(timeouts: Timeouts, retries: u32) -> Self {
        ScenarioRunner { timeouts, retries }
    }

    /// Run every scenario of `suite` in order. Failures never stop the suite.
    pub fn run_suite(&self, suite: &Suite, driver: &dyn Driver) -> Vec<ScenarioResult> {
        info!(suite = suite.name, scenarios = suite.scenarios.len(), "running suite");
        suite
            .scenarios
            .iter()
            .map(|scenario| self.run_scenario(suite, scenario, driver))
            .collect()
    }

    /// Setup then body, retried up to `retries` times on failure.
    pub fn run_scenario(
        &self,
        suite: &Suite,
        scenario: &Scenario,
        driver: &dyn Driver,
    ) -> ScenarioResult {
        let start = Instant::now();
        let mut attempts = 0;

        loop {
            attempts += 1;
            let outcome = (suite.setup)(driver, &self.timeouts)
                .and_then(|_| (scenario.body)(driver, &self.timeouts));

            match outcome {
                Ok(()) => {
                    info!(suite = suite.name, scenario = scenario.name, attempts, "passed");
                    return ScenarioResult {
                        suite: suite.name.to_string(),
                        name: scenario.name.to_string(),
                        passed: true,
                        attempts,
                        error: None,
                        duration_ms: start.elapsed().as_millis(),
                    };
                }
                Err(e) if attempts <= self.retries => {
                    warn!(
                        suite = suite.name,
                        scenario = scenario.name,
                        attempt = attempts,
                        "failed, retrying: {}",
                        e
                    );
                }
                Err(e) => {
                    warn!(suite = suite.name, scenario = scenario.name, attempts, "failed: {}", e);
                    return ScenarioResult {
                        suite: suite.name.to_string(),
                        name: scenario.name.to_string(),
                        passed: false,
                        attempts,
                        error: Some(e.to_string()),
                        duration_ms: start.elapsed().as_millis(),
                    };
                }
            }
        }
    }
}
