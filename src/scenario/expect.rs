use crate::error::ScenarioError;

pub fn expect_true(condition: bool, what: &str) -> Result<(), ScenarioError> {
    if condition {
        Ok(())
    } else {
        Err(ScenarioError::Assertion(format!("expected {} to be true", what)))
    }
}

pub fn expect_false(condition: bool, what: &str) -> Result<(), ScenarioError> {
    if condition {
        Err(ScenarioError::Assertion(format!("expected {} to be false", what)))
    } else {
        Ok(())
    }
}

/// Case-sensitive substring check.
pub fn expect_contains(actual: &str, expected: &str, what: &str) -> Result<(), ScenarioError> {
    if actual.contains(expected) {
        Ok(())
    } else {
        Err(ScenarioError::Assertion(format!(
            "expected {} to contain '{}', got '{}'",
            what, expected, actual
        )))
    }
}
