use crate::types::Strategy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location of the checkstyle jar and the rule set it runs with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CheckstyleConfig {
    pub jar: PathBuf,
    pub config_file: PathBuf,
    #[serde(default)]
    pub strategy: Strategy,
}
