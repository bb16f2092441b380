//! Suite runner module
//!
//! Walks every case of every suite strictly in order, giving each a
//! simulated execution delay and a random pass/fail outcome, and aggregates
//! the counts into a [`TestResult`]. Per-case state machine:
//! `idle -> running -> passed | failed`. `skipped` is reserved and never
//! produced. Exactly one suspension point per case, at the delay step; cases
//! never run in parallel and are never retried.

pub mod simulation;

pub use simulation::{CaseOutcome, RandomSimulation, Simulation};

use chrono::{DateTime, Utc};
use std::time::Instant;
use thiserror::Error;
use tokio::time::sleep;
use tracing::debug;

use crate::models::{
    CaseReport, RunOutput, SuiteReport, TestCase, TestResult, TestStatus, TestSuite,
};

/// Errors surfaced by the runner
#[derive(Debug, Error)]
pub enum RunnerError {
    /// `run_all` precondition: at most one run in flight
    #[error("a run is already in progress")]
    AlreadyRunning,
}

/// Rendering boundary: the presentation layer observes case transitions
/// through this trait. All hooks default to no-ops.
pub trait RunObserver {
    fn case_started(&mut self, case: &TestCase) {
        let _ = case;
    }

    fn case_resolved(&mut self, case: &TestCase) {
        let _ = case;
    }

    fn run_finished(&mut self, result: &TestResult) {
        let _ = result;
    }
}

/// Observer that ignores every event
pub struct NullObserver;

impl RunObserver for NullObserver {}

/// Sequential simulated executor over an owned set of suites
///
/// The runner exclusively owns the suites it is given; it mutates only each
/// case's `status` and `duration_ms`. Results are not persisted anywhere.
pub struct SuiteRunner {
    suites: Vec<TestSuite>,
    is_running: bool,
    current_case: Option<String>,
    last_result: Option<TestResult>,
}

impl SuiteRunner {
    pub fn new(suites: Vec<TestSuite>) -> Self {
        Self {
            suites,
            is_running: false,
            current_case: None,
            last_result: None,
        }
    }

    pub fn suites(&self) -> &[TestSuite] {
        &self.suites
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Id of the case currently executing, if a run is in flight
    pub fn current_case(&self) -> Option<&str> {
        self.current_case.as_deref()
    }

    /// Aggregate of the most recent completed run
    pub fn last_result(&self) -> Option<&TestResult> {
        self.last_result.as_ref()
    }

    pub fn total_cases(&self) -> usize {
        self.suites.iter().map(|s| s.tests.len()).sum()
    }

    /// Run every case of every suite in order
    ///
    /// Resets all previous statuses first, then for each case: marks it
    /// running, suspends for the simulated delay, resolves it from an
    /// independent draw. Resolution order is exactly the concatenation of
    /// each suite's cases in suite order.
    pub async fn run_all<S, O>(
        &mut self,
        sim: &mut S,
        observer: &mut O,
    ) -> Result<TestResult, RunnerError>
    where
        S: Simulation,
        O: RunObserver,
    {
        if self.is_running {
            return Err(RunnerError::AlreadyRunning);
        }
        self.is_running = true;
        self.reset();

        let positions: Vec<(usize, usize)> = self
            .suites
            .iter()
            .enumerate()
            .flat_map(|(si, suite)| (0..suite.tests.len()).map(move |ci| (si, ci)))
            .collect();
        let total = positions.len();
        debug!("starting run over {} cases", total);

        let run_start = Instant::now();
        let mut passed = 0usize;
        let mut failed = 0usize;
        // Reserved: no code path skips a case today
        let skipped = 0usize;

        for (si, ci) in positions {
            {
                let case = &mut self.suites[si].tests[ci];
                case.status = TestStatus::Running;
                self.current_case = Some(case.id.clone());
            }
            observer.case_started(&self.suites[si].tests[ci]);

            let delay = sim.case_delay();
            let case_start = Instant::now();
            sleep(delay).await;

            let case = &mut self.suites[si].tests[ci];
            case.status = match sim.draw_outcome() {
                CaseOutcome::Passed => {
                    passed += 1;
                    TestStatus::Passed
                }
                CaseOutcome::Failed => {
                    failed += 1;
                    TestStatus::Failed
                }
            };
            case.duration_ms = Some(case_start.elapsed().as_millis() as u64);
            observer.case_resolved(&self.suites[si].tests[ci]);
        }

        let result = TestResult {
            passed,
            failed,
            skipped,
            total,
            duration_ms: run_start.elapsed().as_millis() as u64,
        };
        self.last_result = Some(result.clone());
        self.current_case = None;
        self.is_running = false;
        observer.run_finished(&result);
        Ok(result)
    }

    /// Clear all case statuses to idle, the aggregate result, and the
    /// current-case marker
    ///
    /// Safe to call at any time. A run already in flight keeps its own local
    /// counters, so a mid-run reset cannot corrupt the aggregate it will
    /// produce; it only clears the displayed state.
    pub fn reset(&mut self) {
        for suite in &mut self.suites {
            for case in &mut suite.tests {
                case.status = TestStatus::Idle;
                case.duration_ms = None;
            }
        }
        self.last_result = None;
        self.current_case = None;
    }

    /// Serializable report of the most recent run
    pub fn report(&self, started_at: DateTime<Utc>) -> Option<RunOutput> {
        let result = self.last_result.clone()?;
        let suites = self
            .suites
            .iter()
            .map(|suite| SuiteReport {
                id: suite.id.clone(),
                name: suite.name.clone(),
                cases: suite
                    .tests
                    .iter()
                    .map(|case| CaseReport {
                        id: case.id.clone(),
                        name: case.name.clone(),
                        category: case.category,
                        status: case.status,
                        duration_ms: case.duration_ms,
                    })
                    .collect(),
            })
            .collect();
        Some(RunOutput {
            started_at,
            suites,
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TestCategory, TestExplanation};
    use std::collections::VecDeque;
    use std::time::Duration;

    struct ScriptedSimulation {
        outcomes: VecDeque<CaseOutcome>,
    }

    impl ScriptedSimulation {
        fn new(outcomes: &[CaseOutcome]) -> Self {
            Self {
                outcomes: outcomes.iter().copied().collect(),
            }
        }

        fn all_passing() -> Self {
            Self {
                outcomes: VecDeque::new(),
            }
        }
    }

    impl Simulation for ScriptedSimulation {
        fn draw_outcome(&mut self) -> CaseOutcome {
            self.outcomes.pop_front().unwrap_or(CaseOutcome::Passed)
        }

        fn case_delay(&mut self) -> Duration {
            Duration::ZERO
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        started: Vec<String>,
        resolved: Vec<String>,
        finished: Vec<TestResult>,
    }

    impl RunObserver for RecordingObserver {
        fn case_started(&mut self, case: &TestCase) {
            self.started.push(case.id.clone());
        }

        fn case_resolved(&mut self, case: &TestCase) {
            self.resolved.push(case.id.clone());
        }

        fn run_finished(&mut self, result: &TestResult) {
            self.finished.push(result.clone());
        }
    }

    fn case(id: &str) -> TestCase {
        TestCase {
            id: id.to_string(),
            name: format!("case {}", id),
            description: String::new(),
            code: String::new(),
            expected_result: String::new(),
            category: TestCategory::Unit,
            explanation: TestExplanation {
                what_is_tested: String::new(),
                what_is_not_tested: String::new(),
                why_it_matters: String::new(),
                concept: None,
            },
            status: TestStatus::Idle,
            duration_ms: None,
        }
    }

    fn suite(id: &str, case_ids: &[&str]) -> TestSuite {
        TestSuite {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            icon: String::new(),
            tests: case_ids.iter().map(|c| case(c)).collect(),
        }
    }

    #[tokio::test]
    async fn two_case_run_produces_consistent_aggregate() {
        let mut runner = SuiteRunner::new(vec![suite("s", &["a", "b"])]);
        let mut sim = ScriptedSimulation::new(&[CaseOutcome::Passed, CaseOutcome::Failed]);

        let result = runner.run_all(&mut sim, &mut NullObserver).await.unwrap();

        assert_eq!(result.total, 2);
        assert_eq!(result.passed + result.failed, 2);
        assert_eq!(result.skipped, 0);
        assert!(result.is_consistent());
        for case in &runner.suites()[0].tests {
            assert!(case.status.is_resolved());
            assert!(case.duration_ms.is_some());
        }
        assert!(!runner.is_running());
        assert_eq!(runner.current_case(), None);
    }

    #[tokio::test]
    async fn cases_resolve_in_suite_then_case_order() {
        let mut runner = SuiteRunner::new(vec![
            suite("A", &["a1", "a2"]),
            suite("B", &["b1"]),
        ]);
        let mut sim = ScriptedSimulation::all_passing();
        let mut observer = RecordingObserver::default();

        runner.run_all(&mut sim, &mut observer).await.unwrap();

        assert_eq!(observer.started, vec!["a1", "a2", "b1"]);
        assert_eq!(observer.resolved, vec!["a1", "a2", "b1"]);
        assert_eq!(observer.finished.len(), 1);
    }

    #[tokio::test]
    async fn outcomes_follow_the_scripted_draws() {
        let mut runner = SuiteRunner::new(vec![suite("s", &["a", "b", "c"])]);
        let mut sim = ScriptedSimulation::new(&[
            CaseOutcome::Failed,
            CaseOutcome::Passed,
            CaseOutcome::Failed,
        ]);

        let result = runner.run_all(&mut sim, &mut NullObserver).await.unwrap();

        assert_eq!(result.passed, 1);
        assert_eq!(result.failed, 2);
        let statuses: Vec<TestStatus> = runner.suites()[0]
            .tests
            .iter()
            .map(|c| c.status)
            .collect();
        assert_eq!(
            statuses,
            vec![TestStatus::Failed, TestStatus::Passed, TestStatus::Failed]
        );
    }

    #[tokio::test]
    async fn run_all_rejects_a_run_already_in_flight() {
        let mut runner = SuiteRunner::new(vec![suite("s", &["a"])]);
        runner.is_running = true;

        let err = runner
            .run_all(&mut ScriptedSimulation::all_passing(), &mut NullObserver)
            .await
            .unwrap_err();
        assert!(matches!(err, RunnerError::AlreadyRunning));
    }

    #[tokio::test]
    async fn reset_returns_every_case_to_idle() {
        let mut runner = SuiteRunner::new(vec![suite("s", &["a", "b"])]);
        runner
            .run_all(&mut ScriptedSimulation::all_passing(), &mut NullObserver)
            .await
            .unwrap();
        assert!(runner.last_result().is_some());

        runner.reset();

        assert!(runner.last_result().is_none());
        assert_eq!(runner.current_case(), None);
        for case in &runner.suites()[0].tests {
            assert_eq!(case.status, TestStatus::Idle);
            assert!(case.duration_ms.is_none());
        }
    }

    #[tokio::test]
    async fn a_new_run_starts_from_idle_statuses() {
        let mut runner = SuiteRunner::new(vec![suite("s", &["a", "b"])]);
        let mut sim = ScriptedSimulation::new(&[CaseOutcome::Failed, CaseOutcome::Failed]);
        runner.run_all(&mut sim, &mut NullObserver).await.unwrap();

        // Second run: everything passes, no stale failures remain
        let result = runner
            .run_all(&mut ScriptedSimulation::all_passing(), &mut NullObserver)
            .await
            .unwrap();
        assert_eq!(result.passed, 2);
        assert_eq!(result.failed, 0);
        for case in &runner.suites()[0].tests {
            assert_eq!(case.status, TestStatus::Passed);
        }
    }

    #[tokio::test]
    async fn report_reflects_the_completed_run() {
        let mut runner = SuiteRunner::new(vec![suite("A", &["a1"]), suite("B", &["b1"])]);
        let started_at = Utc::now();
        runner
            .run_all(&mut ScriptedSimulation::all_passing(), &mut NullObserver)
            .await
            .unwrap();

        let report = runner.report(started_at).expect("report after a run");
        assert_eq!(report.suites.len(), 2);
        assert_eq!(report.suites[0].cases[0].status, TestStatus::Passed);
        assert_eq!(report.result.total, 2);
    }

    #[test]
    fn report_is_absent_before_any_run() {
        let runner = SuiteRunner::new(vec![suite("s", &["a"])]);
        assert!(runner.report(Utc::now()).is_none());
    }
}
