//! Serialization-shape tests for the data models
//!
//! The JSON forms of TestStatus, TestResult and RunOutput are consumed by
//! the presentation layer; these tests pin the field names and spellings.

use chrono::Utc;
use testlab::content;
use testlab::models::*;

#[test]
fn test_status_round_trips_through_lowercase_strings() {
    for (status, text) in [
        (TestStatus::Idle, "\"idle\""),
        (TestStatus::Running, "\"running\""),
        (TestStatus::Passed, "\"passed\""),
        (TestStatus::Failed, "\"failed\""),
        (TestStatus::Skipped, "\"skipped\""),
    ] {
        assert_eq!(serde_json::to_string(&status).unwrap(), text);
        let back: TestStatus = serde_json::from_str(text).unwrap();
        assert_eq!(back, status);
    }
}

#[test]
fn test_category_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&TestCategory::Isolation).unwrap(),
        "\"isolation\""
    );
}

#[test]
fn test_result_serializes_all_counters() {
    let result = TestResult {
        passed: 8,
        failed: 1,
        skipped: 0,
        total: 9,
        duration_ms: 7200,
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["passed"], 8);
    assert_eq!(json["failed"], 1);
    assert_eq!(json["skipped"], 0);
    assert_eq!(json["total"], 9);
    assert_eq!(json["duration_ms"], 7200);
}

#[test]
fn test_case_omits_duration_until_resolved() {
    let suites = content::test_suites();
    let case = &suites[0].tests[0];
    let json = serde_json::to_value(case).unwrap();
    assert!(json.get("duration_ms").is_none());
    assert_eq!(json["status"], "idle");
}

#[test]
fn test_run_output_round_trip() {
    let output = RunOutput {
        started_at: Utc::now(),
        suites: vec![SuiteReport {
            id: "s".to_string(),
            name: "Suite".to_string(),
            cases: vec![CaseReport {
                id: "c".to_string(),
                name: "Case".to_string(),
                category: TestCategory::Unit,
                status: TestStatus::Passed,
                duration_ms: Some(640),
            }],
        }],
        result: TestResult {
            passed: 1,
            failed: 0,
            skipped: 0,
            total: 1,
            duration_ms: 640,
        },
    };

    let json = serde_json::to_string(&output).unwrap();
    let back: RunOutput = serde_json::from_str(&json).unwrap();
    assert_eq!(back.result, output.result);
    assert_eq!(back.suites[0].cases[0].id, "c");
}

#[test]
fn test_builtin_content_matches_the_advertised_counts() {
    let suites = content::test_suites();
    assert_eq!(suites.len(), 4);
    let total: usize = suites.iter().map(|s| s.tests.len()).sum();
    assert_eq!(total, 9);
}
