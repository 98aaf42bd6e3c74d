use crate::report::report_model::TestSuiteReport;

// ============================================================================
// JUnit XML reporter: standard CI integration format
// ============================================================================

/// Generate a JUnit XML report for CI systems.
///
/// One `<testcase>` per scenario, classed by suite:
/// ```xml
/// <?xml version="1.0" encoding="UTF-8"?>
/// <testsuite name="login" tests="2" failures="1" time="6.120">
///   <testcase name="LOGIN_001 - ..." classname="login" time="0.812" />
///   <testcase name="LOGIN_002 - ..." classname="login" time="5.308">
///     <failure message="timed out after ..." type="ScenarioFailure">...</failure>
///   </testcase>
/// </testsuite>
/// ```
pub fn generate_junit_xml(report: &TestSuiteReport) -> String {
    let time_attr = report
        .duration_ms
        .map(|ms| format!(" time=\"{:.3}\"", ms as f64 / 1000.0))
        .unwrap_or_default();

    let mut cases = String::new();
    for result in &report.results {
        let time = result.duration_ms as f64 / 1000.0;
        if result.passed {
            cases.push_str(&format!(
                "  <testcase name=\"{}\" classname=\"{}\" time=\"{:.3}\" />\n",
                escape_xml(&result.name),
                escape_xml(&result.suite),
                time
            ));
        } else {
            let error = result.error.as_deref().unwrap_or("scenario failed");
            let body = format!("Attempts: {}\n{}", result.attempts, error);
            cases.push_str(&format!(
                "  <testcase name=\"{name}\" classname=\"{class}\" time=\"{time:.3}\">\n    <failure message=\"{message}\" type=\"ScenarioFailure\">{body}</failure>\n  </testcase>\n",
                name = escape_xml(&result.name),
                class = escape_xml(&result.suite),
                time = time,
                message = escape_xml(error),
                body = escape_xml(&body),
            ));
        }
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<testsuite name=\"{name}\" tests=\"{tests}\" failures=\"{failures}\"{time}>\n{cases}</testsuite>\n",
        name = escape_xml(&report.suite_name),
        tests = report.total,
        failures = report.failed,
        time = time_attr,
        cases = cases,
    )
}

/// Escape XML special characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
