use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};

use crate::crawl::crawler::{CrawlReport, run_crawl};
use crate::driver::capabilities::DriverConfig;
use crate::driver::element::Timeouts;
use crate::cli::config::ReportFormat;
use crate::driver::session::AppiumSession;
use crate::error::HarnessError;
use crate::report::console::format_console_report;
use crate::report::junit::generate_junit_xml;
use crate::report::report_model::TestSuiteReport;
use crate::scenario::runner::ScenarioRunner;
use crate::scenario::scenario_model::Suite;
use crate::scenario::suites::{all_suites, find_suite};

// ============================================================================
// run subcommand
// ============================================================================

/// Run the selected suites and return whether every scenario passed.
pub fn cmd_run(
    driver_config: &DriverConfig,
    suite_name: &str,
    format: ReportFormat,
    output: Option<&str>,
    retries: u32,
) -> Result<bool, HarnessError> {
    let suites = select_suites(suite_name)?;
    let mut session = AppiumSession::start(driver_config)?;
    let runner = ScenarioRunner::new(Timeouts::default(), retries);
    let start = Instant::now();

    let mut results = Vec::new();
    for suite in &suites {
        results.extend(runner.run_suite(suite, &session));
    }

    let duration = start.elapsed().as_millis();
    let report = TestSuiteReport::from_results(suite_name, results).with_duration(duration);
    let all_passed = report.all_passed();
    let output_content = render_report(&report, format);

    match output {
        Some(path) => {
            std::fs::write(path, &output_content)?;
            info!("report written to {}", path);
        }
        None => print!("{}", output_content),
    }

    close_session(&mut session);
    Ok(all_passed)
}

/// "all" selects every suite; anything else must name one.
pub fn select_suites(name: &str) -> Result<Vec<Suite>, HarnessError> {
    if name.eq_ignore_ascii_case("all") {
        return Ok(all_suites());
    }
    find_suite(name)
        .map(|suite| vec![suite])
        .ok_or_else(|| HarnessError::UnknownSuite(name.to_string()))
}

pub fn render_report(report: &TestSuiteReport, format: ReportFormat) -> String {
    match format {
        ReportFormat::Junit => generate_junit_xml(report),
        ReportFormat::Console => format_console_report(report),
    }
}

/// Quit failures are logged and never replace the command's outcome.
fn close_session(session: &mut AppiumSession) {
    if let Err(e) = session.quit() {
        warn!("failed to close session: {}", e);
    }
}

// ============================================================================
// crawl subcommand
// ============================================================================

pub fn cmd_crawl(
    driver_config: &DriverConfig,
    page: Option<&str>,
    out_dir: &str,
) -> Result<CrawlReport, HarnessError> {
    let mut session = AppiumSession::start(driver_config)?;
    let crawled = run_crawl(&session, page, Path::new(out_dir), &Timeouts::default());
    if let Ok(report) = &crawled {
        println!("Crawl saved to: {}", report.output_path.display());
    }
    close_session(&mut session);
    Ok(crawled?)
}

// ============================================================================
// list subcommand
// ============================================================================

pub fn format_suite_list(suites: &[Suite]) -> String {
    let mut out = String::new();
    for suite in suites {
        out.push_str(&format!("{} — {}\n", suite.name, suite.description));
        for name in suite.scenario_names() {
            out.push_str(&format!("  - {}\n", name));
        }
    }
    out
}

pub fn cmd_list() {
    print!("{}", format_suite_list(&all_suites()));
}
