use std::collections::BTreeMap;

/// Log key under which standard output is stored in result logs
pub const LOG_STDOUT: &str = "stdout";
/// Log key under which standard error is stored in result logs
pub const LOG_STDERR: &str = "stderr";

/// Outcome of a toolchain build step.
///
/// Standard output and standard error are kept apart so callers can tell
/// compiler diagnostics from stray program output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileResult {
    status_code: i32,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl CompileResult {
    pub const STATUS_SUCCESS: i32 = 0;
    pub const STATUS_FAILURE: i32 = 1;

    pub fn new(status_code: i32, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self {
            status_code,
            stdout,
            stderr,
        }
    }

    pub fn success(stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self::new(Self::STATUS_SUCCESS, stdout, stderr)
    }

    pub fn failure(stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self::new(Self::STATUS_FAILURE, stdout, stderr)
    }

    pub fn status_code(&self) -> i32 {
        self.status_code
    }

    pub fn is_success(&self) -> bool {
        self.status_code == Self::STATUS_SUCCESS
    }

    pub fn stdout(&self) -> &[u8] {
        &self.stdout
    }

    pub fn stderr(&self) -> &[u8] {
        &self.stderr
    }

    /// Captured output as text, keyed by stream name
    pub fn logs(&self) -> BTreeMap<String, String> {
        logs_from_streams(&self.stdout, &self.stderr)
    }
}

pub(crate) fn logs_from_streams(stdout: &[u8], stderr: &[u8]) -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            LOG_STDOUT.to_string(),
            String::from_utf8_lossy(stdout).into_owned(),
        ),
        (
            LOG_STDERR.to_string(),
            String::from_utf8_lossy(stderr).into_owned(),
        ),
    ])
}
