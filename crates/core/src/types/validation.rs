use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// How style violations should affect the assessment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strategy {
    #[default]
    Fail,
    Warn,
    Disabled,
}

impl Strategy {
    pub fn is_disabled(self) -> bool {
        self == Strategy::Disabled
    }
}

/// A single style violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub line: u32,
    pub column: u32,
    pub message: String,
    /// Identifier of the rule that was violated
    pub source_name: String,
}

/// Style violations grouped by source file.
///
/// An empty map means the project was checked and found clean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub strategy: Strategy,
    pub validation_errors: BTreeMap<PathBuf, Vec<ValidationError>>,
}

impl ValidationResult {
    pub fn new(strategy: Strategy, validation_errors: BTreeMap<PathBuf, Vec<ValidationError>>) -> Self {
        Self {
            strategy,
            validation_errors,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.validation_errors.values().all(Vec::is_empty)
    }

    pub fn error_count(&self) -> usize {
        self.validation_errors.values().map(Vec::len).sum()
    }
}
