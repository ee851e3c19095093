use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::compile_result::CompileResult;

/// Terminal status of a build-and-test run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    /// Every test passed
    Passed,
    /// At least one test failed
    Failed,
    /// The test run did not complete for every test
    Error,
    /// The project did not compile, no tests were run
    CompileFailed,
}

/// Outcome of one test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub name: String,
    pub successful: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub points: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub backtrace: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub status: RunStatus,
    pub test_results: Vec<TestResult>,
    #[serde(default)]
    pub logs: BTreeMap<String, String>,
}

impl RunResult {
    /// Terminal result for a project that failed to build.
    ///
    /// Never carries test results; the build logs are kept.
    pub fn compile_failed(compile_result: &CompileResult) -> Self {
        Self {
            status: RunStatus::CompileFailed,
            test_results: Vec::new(),
            logs: compile_result.logs(),
        }
    }

    /// Result of a completed run: `Passed` iff every test succeeded
    pub fn from_test_results(test_results: Vec<TestResult>) -> Self {
        let status = if test_results.iter().all(|t| t.successful) {
            RunStatus::Passed
        } else {
            RunStatus::Failed
        };
        Self {
            status,
            test_results,
            logs: BTreeMap::new(),
        }
    }

    /// Result of a run in which some tests never finished
    pub fn incomplete(test_results: Vec<TestResult>) -> Self {
        Self {
            status: RunStatus::Error,
            test_results,
            logs: BTreeMap::new(),
        }
    }

    pub fn with_logs(mut self, logs: BTreeMap<String, String>) -> Self {
        self.logs = logs;
        self
    }

    pub fn passed(&self) -> bool {
        self.status == RunStatus::Passed
    }
}
