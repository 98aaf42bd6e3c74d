use thiserror::Error;

use crate::driver::element::WaitCondition;

/// Failures surfaced by the automation driver or by element waits.
#[derive(Error, Debug)]
pub enum DriverError {
    /// A wait condition was not met inside its window
    #[error("timed out after {timeout_ms}ms waiting for '{selector}' to be {condition}")]
    Timeout {
        selector: String,
        condition: WaitCondition,
        timeout_ms: u64,
    },

    /// `find element` matched nothing
    #[error("no element matches '{0}'")]
    NoSuchElement(String),

    /// The server answered with a W3C error object
    #[error("'{command}' failed with {error}: {message}")]
    Command {
        command: String,
        error: String,
        message: String,
    },

    /// The server answered, but not with the shape we expected
    #[error("unexpected response to '{command}': {detail}")]
    Protocol { command: String, detail: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DriverError {
    /// Errors a wait loop treats as "not yet" rather than as a failure.
    pub fn is_retryable(&self) -> bool {
        match self {
            DriverError::NoSuchElement(_) => true,
            DriverError::Command { error, .. } => {
                error == "no such element" || error == "stale element reference"
            }
            _ => false,
        }
    }
}

pub type DriverResult<T> = Result<T, DriverError>;

/// Why a scenario (or a crawl) did not complete.
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error("assertion failed: {0}")]
    Assertion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level errors of the command line harness.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("config error: {0}")]
    Config(String),

    #[error("unknown suite '{0}' (see `mobile-e2e list`)")]
    UnknownSuite(String),

    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
