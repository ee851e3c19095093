use std::io;
use std::path::PathBuf;

/// Errors that can occur while detecting, building, scanning or testing an exercise
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No language plugin recognises {}", .0.display())]
    NoPluginFound(PathBuf),

    #[error("Test scan error: {0}")]
    ScannerError(String),

    /// The build succeeded but the plugin could not describe any tests
    #[error("No tests could be described for {}", .0.display())]
    TestScannerError(PathBuf),

    /// Running the test executor failed before a result could be produced
    #[error("Test runner error: {0}")]
    TestRunnerError(#[source] Box<Error>),

    #[error("Failed to start `{program}`: {source}")]
    ProcessSpawnError {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Interrupted while waiting for `{program}`")]
    ProcessInterrupted { program: String },

    #[error("Malformed result file {}: {reason}", path.display())]
    ResultFileError { path: PathBuf, reason: String },

    /// Dependencies for the test class path could not be resolved
    #[error("Class path error: {0}")]
    ClassPathError(String),

    #[error("Style check error: {0}")]
    StyleCheckError(String),

    #[error("Preparation error: {0}")]
    PreparationError(String),

    #[error("Tree-sitter error: {0}")]
    TreeSitterError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    /// Wraps an error raised while running tests into `TestRunnerError`,
    /// leaving an already wrapped one untouched.
    pub fn into_test_runner_error(self) -> Self {
        match self {
            Error::TestRunnerError(_) => self,
            other => Error::TestRunnerError(Box::new(other)),
        }
    }
}

/// Result type alias for exercise-runner operations
pub type Result<T> = std::result::Result<T, Error>;
