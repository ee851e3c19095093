use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_JAVA_COMMAND: &str = "java";
pub const DEFAULT_TEST_RUNNER_MAIN_CLASS: &str = "fi.helsinki.cs.tmc.testrunner.Main";

/// Settings for launching the JVM-based test executor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct JavaConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jvm_args: Option<Vec<String>>,
    /// Jars of the test executor, appended to the project class path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_runner_classpath: Option<Vec<PathBuf>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_runner_main_class: Option<String>,
}

impl JavaConfig {
    pub fn command(&self) -> &str {
        self.command.as_deref().unwrap_or(DEFAULT_JAVA_COMMAND)
    }

    pub fn jvm_args(&self) -> &[String] {
        self.jvm_args.as_deref().unwrap_or_default()
    }

    pub fn test_runner_classpath(&self) -> &[PathBuf] {
        self.test_runner_classpath.as_deref().unwrap_or_default()
    }

    pub fn test_runner_main_class(&self) -> &str {
        self.test_runner_main_class
            .as_deref()
            .unwrap_or(DEFAULT_TEST_RUNNER_MAIN_CLASS)
    }
}
