//! Data models module
//!
//! Defines core data structures:
//! - TestCase / TestSuite: canned demonstration content and per-case status
//! - TestResult: aggregate outcome of one run
//! - RunOutput: complete serializable run report
//! - SimulationSettings: tuning parameters for the simulated execution

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DELAY_MAX_MS, DEFAULT_DELAY_MIN_MS, DEFAULT_PASS_PROBABILITY};

/// Lifecycle state of a single test case
///
/// `Skipped` is reserved: no code path produces it today, but the aggregate
/// counters and serialized form keep it for forward compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Idle,
    Running,
    Passed,
    Failed,
    Skipped,
}

impl TestStatus {
    /// Whether the case has reached a terminal state for the current run
    pub fn is_resolved(&self) -> bool {
        matches!(self, TestStatus::Passed | TestStatus::Failed | TestStatus::Skipped)
    }
}

/// Pedagogical category of a test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestCategory {
    Unit,
    Mock,
    Api,
    Isolation,
}

/// Explanation triple shown alongside each case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestExplanation {
    /// What the example test actually covers
    pub what_is_tested: String,
    /// What it deliberately leaves out
    pub what_is_not_tested: String,
    /// Why the technique matters
    pub why_it_matters: String,
    /// Optional concept label (e.g. "Mocking", "Dependency Injection")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<String>,
}

/// A single named, statically described unit of the simulated demonstration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    /// Stable identifier, unique across all suites
    pub id: String,
    /// Short display name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Canned example test code (display-only)
    pub code: String,
    /// The assertion the example would produce
    pub expected_result: String,
    /// Pedagogical category
    pub category: TestCategory,
    /// Explanation triple
    pub explanation: TestExplanation,
    /// Current lifecycle state; written only by the suite runner
    pub status: TestStatus,
    /// Simulated execution time, filled when the case resolves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// An ordered, named grouping of test cases
///
/// A suite exclusively owns its cases; the runner mutates only the `status`
/// and `duration_ms` fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSuite {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Decorative icon shown by the presentation layer
    pub icon: String,
    /// Ordered cases; execution order within the suite is this order
    pub tests: Vec<TestCase>,
}

/// Aggregate outcome of one full run
///
/// Invariant: `passed + failed + skipped == total`. `skipped` is always 0 in
/// the current design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Cases that resolved to passed
    pub passed: usize,
    /// Cases that resolved to failed
    pub failed: usize,
    /// Reserved counter, always 0 today
    pub skipped: usize,
    /// Total cases across all suites
    pub total: usize,
    /// Wall-clock duration of the run in milliseconds
    pub duration_ms: u64,
}

impl TestResult {
    /// Whether the counters satisfy the aggregate invariant
    pub fn is_consistent(&self) -> bool {
        self.passed + self.failed + self.skipped == self.total
    }
}

/// Per-case entry in the serialized run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    pub id: String,
    pub name: String,
    pub category: TestCategory,
    pub status: TestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// Per-suite entry in the serialized run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub id: String,
    pub name: String,
    pub cases: Vec<CaseReport>,
}

/// Complete output structure for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutput {
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Per-suite case outcomes, in execution order
    pub suites: Vec<SuiteReport>,
    /// Aggregate result
    pub result: TestResult,
}

/// Tuning parameters for the simulated execution
///
/// These are presentation tuning values, not part of the runner contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Lower bound for the simulated per-case delay, in milliseconds
    pub delay_min_ms: u64,
    /// Upper bound for the simulated per-case delay, in milliseconds
    pub delay_max_ms: u64,
    /// Probability in [0, 1] that a case resolves to passed
    pub pass_probability: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            delay_min_ms: DEFAULT_DELAY_MIN_MS,
            delay_max_ms: DEFAULT_DELAY_MAX_MS,
            pass_probability: DEFAULT_PASS_PROBABILITY,
        }
    }
}

impl SimulationSettings {
    /// Validate bounds: min <= max and probability within [0, 1]
    pub fn validate(&self) -> Result<(), String> {
        if self.delay_min_ms > self.delay_max_ms {
            return Err(format!(
                "delay_min_ms ({}) must not exceed delay_max_ms ({})",
                self.delay_min_ms, self.delay_max_ms
            ));
        }
        if !(0.0..=1.0).contains(&self.pass_probability) {
            return Err(format!(
                "pass_probability ({}) must be within 0.0..=1.0",
                self.pass_probability
            ));
        }
        Ok(())
    }

    /// Settings with no simulated delay, for fast runs and tests
    pub fn instant(pass_probability: f64) -> Self {
        Self {
            delay_min_ms: 0,
            delay_max_ms: 0,
            pass_probability,
        }
    }
}
