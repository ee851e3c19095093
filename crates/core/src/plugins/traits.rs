//! Capability contract implemented by every toolchain plugin

use std::path::{Path, PathBuf};

use crate::{
    command::ProcessOutput,
    error::Result,
    preparation,
    types::{CompileResult, ExerciseDescriptor, RunResult, ValidationResult},
};

use super::Pipeline;

/// Outcome of launching the test executor
#[derive(Debug, Clone)]
pub struct TestExecution {
    /// Where the executor was told to write its results
    pub result_file: PathBuf,
    pub output: ProcessOutput,
}

/// Core trait that all toolchain plugins must implement
pub trait LanguagePlugin: Send + Sync {
    /// Name of the toolchain, e.g. `apache-ant`
    fn language_name(&self) -> &'static str;

    /// Whether `path` is a project this plugin can handle
    fn is_exercise_type_correct(&self, path: &Path) -> bool;

    /// Compile the project and its tests
    fn build(&self, path: &Path) -> Result<CompileResult>;

    /// Describe the tests of a project, `None` when it has no test sources
    fn scan_exercise(&self, path: &Path, exercise_name: &str) -> Result<Option<ExerciseDescriptor>>;

    /// Run the described tests of an already built project
    fn execute_tests(&self, path: &Path, exercise: &ExerciseDescriptor) -> Result<TestExecution>;

    /// Style violations, `None` when style checking does not apply
    fn check_code_style(&self, path: &Path) -> Result<Option<ValidationResult>>;

    fn prepare_stub(&self, path: &Path) -> Result<()> {
        preparation::prepare_stub(path)
    }

    fn prepare_solution(&self, path: &Path) -> Result<()> {
        preparation::prepare_solution(path)
    }

    /// Build, scan and test the project
    fn run_tests(&self, path: &Path) -> Result<RunResult> {
        Pipeline::new(self).run(path)
    }
}
