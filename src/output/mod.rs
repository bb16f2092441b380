//! Output formatting module
//!
//! Handles:
//! - Human-readable suite listings and run reports
//! - JSON run reports for machine consumption
//! - Duration formatting shared by both

use anyhow::Result;

use crate::models::{RunOutput, TestStatus, TestSuite};

/// Print the available suites and their cases without running anything
pub fn print_suites(suites: &[TestSuite]) {
    let total: usize = suites.iter().map(|s| s.tests.len()).sum();
    println!("{} suites, {} cases:\n", suites.len(), total);

    for suite in suites {
        println!("{} {} - {}", suite.icon, suite.name, suite.description);
        for case in &suite.tests {
            println!("  {:<10} {} - {}", case.id, case.name, case.description);
        }
        println!();
    }
}

/// Format a completed run in human-readable form
pub fn format_human(output: &RunOutput) -> Result<()> {
    for suite in &output.suites {
        println!("{}:", suite.name);
        for case in &suite.cases {
            let duration = case
                .duration_ms
                .map(|ms| format!(" ({})", format_duration(ms)))
                .unwrap_or_default();
            println!("  {} {}{}", status_glyph(case.status), case.name, duration);
        }
        println!();
    }

    let result = &output.result;
    println!("Run Summary:");
    println!("  Passed:  {} cases", result.passed);
    println!("  Failed:  {} cases", result.failed);
    if result.skipped > 0 {
        println!("  Skipped: {} cases", result.skipped);
    }
    println!("  Total:   {} cases", result.total);
    println!("  Duration: {}", format_duration(result.duration_ms));

    Ok(())
}

/// Print the run report as pretty JSON
pub fn format_json(output: &RunOutput) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(())
}

fn status_glyph(status: TestStatus) -> &'static str {
    match status {
        TestStatus::Idle => "-",
        TestStatus::Running => "~",
        TestStatus::Passed => "PASS",
        TestStatus::Failed => "FAIL",
        TestStatus::Skipped => "SKIP",
    }
}

fn format_duration(duration_ms: u64) -> String {
    if duration_ms < 1000 {
        format!("{}ms", duration_ms)
    } else {
        format!("{:.2}s", duration_ms as f64 / 1000.0)
    }
}
