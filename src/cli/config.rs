use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::driver::capabilities::{DriverConfig, Profile};
use crate::error::HarnessError;

pub const DEFAULT_CONFIG_PATH: &str = "mobile-e2e.yaml";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "mobile-e2e",
    version,
    about = "End-to-end UI scenarios and screen crawls for mobile apps over Appium"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Device profile supplying server and capability defaults
    #[arg(long, value_enum, default_value = "android", global = true)]
    pub profile: Profile,

    /// Path to config file (default: mobile-e2e.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run scenario suites against the device
    Run {
        /// Suite name, or "all"
        #[arg(long, default_value = "all")]
        suite: String,

        /// Report format (default: console)
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Extra attempts for a failing scenario
        #[arg(long)]
        retries: Option<u32>,
    },

    /// Navigate to a screen and dump its UI tree to crawls/<page>.xml
    Crawl {
        /// Screen to crawl (login, forms, signup, swipe, text, or any name)
        #[arg(long, env = "CRAWL_PAGE_NAME")]
        page: Option<String>,

        /// Directory that receives the crawls/ folder
        #[arg(long)]
        out_dir: Option<String>,
    },

    /// List the registered suites and their scenarios
    List,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Console,
    Junit,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `mobile-e2e.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Replaces the selected profile entirely when present
    #[serde(default)]
    pub driver: Option<DriverConfig>,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub crawl: CrawlConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub format: ReportFormat,

    pub output: Option<String>,

    /// Overrides the profile's retry count
    pub retries: Option<u32>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Console,
            output: None,
            retries: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self { out_dir: default_out_dir() }
    }
}

fn default_out_dir() -> String {
    ".".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load the config file.
///
/// An explicit `--config` path must exist and parse. The default
/// `mobile-e2e.yaml` is optional: a missing file gives defaults and a
/// malformed one is ignored with a warning.
pub fn load_config(path: Option<&str>) -> Result<AppConfig, HarnessError> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| HarnessError::Config(format!("cannot read '{}': {}", path, e)))?;
            Ok(parse_config(&content)?)
        }
        None => Ok(load_default_config(DEFAULT_CONFIG_PATH)),
    }
}

fn load_default_config(path: &str) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content).unwrap_or_else(|e| {
            warn!("ignoring malformed config '{}': {}", path, e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

pub fn parse_config(content: &str) -> Result<AppConfig, serde_yaml::Error> {
    serde_yaml::from_str(content)
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

/// Driver settings: config file override, else profile defaults.
pub fn resolve_driver_config(profile: Profile, config: &AppConfig) -> DriverConfig {
    config.driver.clone().unwrap_or_else(|| profile.config())
}

/// Retry count: CLI > config file > driver profile.
pub fn resolve_retries(cli: Option<u32>, config: &AppConfig, driver: &DriverConfig) -> u32 {
    cli.or(config.run.retries).unwrap_or(driver.retries)
}
