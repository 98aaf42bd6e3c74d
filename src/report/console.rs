use crate::report::report_model::TestSuiteReport;

// ============================================================================
// Console reporter: formatted terminal output
// ============================================================================

/// Format a run report for terminal output.
///
/// Produces output like:
/// ```text
/// === Test Run: login ===
///
/// ✓ PASS  [login] LOGIN_001 - ... (812ms)
/// ✗ FAIL  [login] LOGIN_002 - ... (5120ms, 2 attempts)
///     [ERROR] timed out after 5000ms waiting for '~login-error-message' to be displayed
///
/// === Results: 1 passed, 1 failed (2 total) ===
/// ```
pub fn format_console_report(report: &TestSuiteReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Test Run: {} ===\n\n", report.suite_name));

    for result in &report.results {
        let marker = if result.passed {
            "\u{2713} PASS"
        } else {
            "\u{2717} FAIL"
        };

        let attempts = if result.attempts > 1 {
            format!(", {} attempts", result.attempts)
        } else {
            String::new()
        };

        out.push_str(&format!(
            "{}  [{}] {} ({}ms{})\n",
            marker, result.suite, result.name, result.duration_ms, attempts
        ));

        if let Some(ref error) = result.error {
            out.push_str(&format!("    [ERROR] {}\n", error));
        }
    }

    out.push_str(&format!(
        "\n=== Results: {} passed, {} failed ({} total)",
        report.passed, report.failed, report.total
    ));

    if let Some(ms) = report.duration_ms {
        let secs = ms as f64 / 1000.0;
        out.push_str(&format!(" in {:.1}s", secs));
    }

    out.push_str(" ===\n");

    out
}
