//! Parsing of the result artifact written by the test executor

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::{
    error::{Error, Result},
    types::{ExerciseDescriptor, TestResult},
};

const MESSAGE_NOT_FINISHED: &str = "Test did not finish";
const MESSAGE_NOT_RUN: &str = "Test was not run";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum RecordStatus {
    Passed,
    Failed,
    Running,
    NotStarted,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExceptionRecord {
    class_name: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    stack_trace: Vec<String>,
}

/// One record of the result artifact
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestRecord {
    class_name: String,
    method_name: String,
    status: RecordStatus,
    /// Absent when the executor did not report points
    #[serde(default)]
    point_names: Option<Vec<String>>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    exception: Option<ExceptionRecord>,
}

impl TestRecord {
    fn name(&self) -> String {
        format!("{} {}", self.class_name, self.method_name)
    }

    fn finished(&self) -> bool {
        matches!(self.status, RecordStatus::Passed | RecordStatus::Failed)
    }

    /// `scanned_points` stand in when the record carries no points of its own
    fn into_test_result(self, scanned_points: &[String]) -> TestResult {
        let name = self.name();
        let successful = self.status == RecordStatus::Passed;
        let exception_message = self.exception.as_ref().map(|e| match &e.message {
            Some(message) => format!("{}: {message}", e.class_name),
            None => e.class_name.clone(),
        });
        let message = match self.status {
            RecordStatus::Passed => self.message,
            RecordStatus::Failed => self.message.or(exception_message),
            RecordStatus::Running | RecordStatus::NotStarted => {
                Some(self.message.unwrap_or_else(|| MESSAGE_NOT_FINISHED.to_string()))
            }
        };

        TestResult {
            name,
            successful,
            message,
            points: self
                .point_names
                .unwrap_or_else(|| scanned_points.to_vec()),
            backtrace: self.exception.map(|e| e.stack_trace).unwrap_or_default(),
        }
    }
}

/// Test outcomes read from a result artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResults {
    /// Ordered like the scanned tests, unknown records last
    pub test_results: Vec<TestResult>,
    /// False when some test was still running or never ran
    pub complete: bool,
}

/// Reads the artifact at `path` and aligns its records with the scanned tests.
///
/// A missing, empty or malformed artifact is an error rather than an empty
/// result, so a crashed executor can never be reported as a pass.
pub fn parse_result_file(path: &Path, exercise: &ExerciseDescriptor) -> Result<ParsedResults> {
    let contents = std::fs::read(path).map_err(|e| Error::ResultFileError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if contents.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::ResultFileError {
            path: path.to_path_buf(),
            reason: "file is empty".to_string(),
        });
    }

    let records: Vec<TestRecord> =
        serde_json::from_slice(&contents).map_err(|e| Error::ResultFileError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    tracing::debug!(
        "Read {} test records from {}",
        records.len(),
        path.display()
    );

    Ok(align_with_scan(records, exercise))
}

fn align_with_scan(records: Vec<TestRecord>, exercise: &ExerciseDescriptor) -> ParsedResults {
    let mut complete = records.iter().all(TestRecord::finished);

    let mut by_name: HashMap<String, TestRecord> = HashMap::new();
    let mut unknown = Vec::new();
    let scanned: HashSet<&str> =
        exercise.tests.iter().map(|t| t.name.as_str()).collect();

    for record in records {
        let name = record.name();
        if scanned.contains(name.as_str()) && !by_name.contains_key(&name) {
            by_name.insert(name, record);
        } else {
            unknown.push(record);
        }
    }

    let mut test_results = Vec::with_capacity(exercise.tests.len() + unknown.len());
    for test in &exercise.tests {
        match by_name.remove(&test.name) {
            Some(record) => test_results.push(record.into_test_result(&test.points)),
            None => {
                tracing::warn!("No result recorded for {}", test.name);
                complete = false;
                test_results.push(TestResult {
                    name: test.name.clone(),
                    successful: false,
                    message: Some(MESSAGE_NOT_RUN.to_string()),
                    points: test.points.clone(),
                    backtrace: Vec::new(),
                });
            }
        }
    }
    test_results.extend(unknown.into_iter().map(|record| record.into_test_result(&[])));

    ParsedResults {
        test_results,
        complete,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TestDescriptor;
    use std::fs;
    use tempfile::TempDir;

    fn exercise(names: &[&str]) -> ExerciseDescriptor {
        ExerciseDescriptor::new(
            "exercise",
            names
                .iter()
                .map(|n| TestDescriptor::new(*n, vec!["1".to_string()]))
                .collect(),
        )
    }

    fn write(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("results.txt");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parses_passed_and_failed_records() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            r#"[
                {"className": "CalcTest", "methodName": "adds", "status": "PASSED", "pointNames": ["1.1"]},
                {"className": "CalcTest", "methodName": "divides", "status": "FAILED", "pointNames": ["1.2"],
                 "message": "expected:<2> but was:<3>",
                 "exception": {"className": "java.lang.AssertionError", "stackTrace": ["at CalcTest.divides(CalcTest.java:12)"]}}
            ]"#,
        );

        let parsed = parse_result_file(&path, &exercise(&["CalcTest adds", "CalcTest divides"])).unwrap();

        assert!(parsed.complete);
        assert_eq!(parsed.test_results.len(), 2);
        assert!(parsed.test_results[0].successful);
        assert_eq!(parsed.test_results[0].points, vec!["1.1".to_string()]);

        let failed = &parsed.test_results[1];
        assert!(!failed.successful);
        assert_eq!(failed.message.as_deref(), Some("expected:<2> but was:<3>"));
        assert_eq!(failed.backtrace, vec!["at CalcTest.divides(CalcTest.java:12)".to_string()]);
    }

    #[test]
    fn test_exception_message_is_used_when_message_missing() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            r#"[{"className": "A", "methodName": "b", "status": "FAILED",
                 "exception": {"className": "java.lang.NullPointerException", "message": "name is null"}}]"#,
        );

        let parsed = parse_result_file(&path, &exercise(&["A b"])).unwrap();
        assert_eq!(
            parsed.test_results[0].message.as_deref(),
            Some("java.lang.NullPointerException: name is null")
        );
    }

    #[test]
    fn test_results_follow_scan_order() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            r#"[
                {"className": "T", "methodName": "c", "status": "PASSED"},
                {"className": "T", "methodName": "extra", "status": "PASSED"},
                {"className": "T", "methodName": "a", "status": "PASSED"},
                {"className": "T", "methodName": "b", "status": "FAILED"}
            ]"#,
        );

        let parsed = parse_result_file(&path, &exercise(&["T a", "T b", "T c"])).unwrap();
        let names: Vec<_> = parsed.test_results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["T a", "T b", "T c", "T extra"]);
    }

    #[test]
    fn test_scanned_points_fill_in_for_records_without_points() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            r#"[
                {"className": "T", "methodName": "a", "status": "PASSED"},
                {"className": "T", "methodName": "b", "status": "PASSED", "pointNames": []},
                {"className": "T", "methodName": "extra", "status": "PASSED"}
            ]"#,
        );

        let parsed = parse_result_file(&path, &exercise(&["T a", "T b"])).unwrap();

        assert_eq!(parsed.test_results[0].points, vec!["1".to_string()]);
        assert!(parsed.test_results[1].points.is_empty());
        assert!(parsed.test_results[2].points.is_empty());
    }

    #[test]
    fn test_unfinished_and_missing_tests_make_run_incomplete() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            r#"[{"className": "T", "methodName": "a", "status": "RUNNING"}]"#,
        );

        let parsed = parse_result_file(&path, &exercise(&["T a", "T b"])).unwrap();

        assert!(!parsed.complete);
        assert_eq!(parsed.test_results[0].message.as_deref(), Some(MESSAGE_NOT_FINISHED));
        assert_eq!(parsed.test_results[1].message.as_deref(), Some(MESSAGE_NOT_RUN));
        assert!(parsed.test_results.iter().all(|r| !r.successful));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let result = parse_result_file(&dir.path().join("results.txt"), &exercise(&["T a"]));
        assert!(matches!(result, Err(Error::ResultFileError { .. })));
    }

    #[test]
    fn test_empty_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "  \n");
        let result = parse_result_file(&path, &exercise(&[]));
        assert!(matches!(result, Err(Error::ResultFileError { .. })));
    }

    #[test]
    fn test_truncated_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            r#"[{"className": "T", "methodName": "a", "status": "PASSED"}, {"className": "T", "meth"#,
        );
        let result = parse_result_file(&path, &exercise(&["T a"]));
        assert!(matches!(result, Err(Error::ResultFileError { .. })));
    }

    #[test]
    fn test_unknown_status_is_error() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            r#"[{"className": "T", "methodName": "a", "status": "MAYBE"}]"#,
        );
        let result = parse_result_file(&path, &exercise(&["T a"]));
        assert!(matches!(result, Err(Error::ResultFileError { .. })));
    }
}
