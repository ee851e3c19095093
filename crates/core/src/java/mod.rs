//! Java tooling shared by the Ant and Maven plugins

pub mod classpath;
pub mod scanner;
pub mod test_runner;

pub use classpath::ClassPath;
pub use scanner::TestScanner;
pub use test_runner::TestRunnerArgumentBuilder;

use std::path::Path;
use std::sync::Arc;

use crate::{
    command::{CommandExecutor, ProcessCommand},
    config::Config,
    error::Result,
    plugins::TestExecution,
    style::Checkstyle,
    types::{CompileResult, ExerciseDescriptor, ValidationResult},
};

/// Configuration and process access common to every JVM based plugin
#[derive(Clone)]
pub struct JavaTools {
    config: Arc<Config>,
    executor: Arc<dyn CommandExecutor>,
}

impl JavaTools {
    pub fn new(config: Arc<Config>, executor: Arc<dyn CommandExecutor>) -> Self {
        Self { config, executor }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn executor(&self) -> &dyn CommandExecutor {
        self.executor.as_ref()
    }

    /// Runs a build tool invocation; any unsuccessful exit is a compile failure
    pub fn build(&self, command: &ProcessCommand) -> Result<CompileResult> {
        tracing::debug!("Build command: {}", command.to_shell_command());
        let output = self.executor.execute(command)?;

        if output.success() {
            Ok(CompileResult::success(output.stdout, output.stderr))
        } else {
            tracing::warn!(
                "`{}` exited with {:?}",
                command.program,
                output.exit_code
            );
            Ok(CompileResult::failure(output.stdout, output.stderr))
        }
    }

    /// Scans `test_dir` with a fresh scanner
    pub fn scan(&self, test_dir: &Path, exercise_name: &str) -> Result<Option<ExerciseDescriptor>> {
        let mut scanner = TestScanner::new()?;
        let tests = scanner.scan_directory(test_dir)?;
        Ok(tests.map(|tests| ExerciseDescriptor::new(exercise_name, tests)))
    }

    /// Runs the test executor and reports where it was told to write its results.
    ///
    /// Any result file left over from an earlier run is removed first.
    pub fn execute_tests(
        &self,
        project_root: &Path,
        test_dir: &Path,
        result_file: &Path,
        class_path: &ClassPath,
        exercise: &ExerciseDescriptor,
    ) -> Result<TestExecution> {
        if result_file.exists() {
            tracing::debug!("Removing stale result file {}", result_file.display());
            std::fs::remove_file(result_file)?;
        }

        let command = TestRunnerArgumentBuilder::new(
            &self.config.java,
            project_root,
            test_dir,
            result_file,
            class_path,
            exercise,
        )
        .build();
        tracing::debug!("Test command: {}", command.to_shell_command());

        let output = self.executor.execute(&command)?;
        Ok(TestExecution {
            result_file: result_file.to_path_buf(),
            output,
        })
    }

    /// Style check of `source_dir`, `None` when it does not apply
    pub fn check_style(&self, project_root: &Path, source_dir: &Path) -> Result<Option<ValidationResult>> {
        if !source_dir.is_dir() {
            tracing::debug!("No source directory at {}", source_dir.display());
            return Ok(None);
        }
        let Some(checkstyle_config) = self.config.checkstyle.clone() else {
            tracing::debug!("Checkstyle is not configured");
            return Ok(None);
        };
        if checkstyle_config.strategy.is_disabled() {
            tracing::debug!("Checkstyle is disabled");
            return Ok(None);
        }

        let checkstyle = Checkstyle::new(
            self.config.java.clone(),
            checkstyle_config,
            Arc::clone(&self.executor),
        );
        checkstyle.check(project_root, source_dir).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ProcessOutput;
    use crate::config::CheckstyleConfig;
    use crate::types::Strategy;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn tools_with(
        config: Config,
        executor: impl Fn(&ProcessCommand) -> Result<ProcessOutput> + Send + Sync + 'static,
    ) -> JavaTools {
        JavaTools::new(Arc::new(config), Arc::new(executor))
    }

    #[test]
    fn test_nonzero_exit_is_compile_failure() {
        let tools = tools_with(Config::default(), |_| {
            Ok(ProcessOutput {
                exit_code: Some(13),
                stdout: b"compiling".to_vec(),
                stderr: b"error: ';' expected".to_vec(),
            })
        });

        let result = tools.build(&ProcessCommand::new("ant")).unwrap();
        assert_eq!(result.status_code(), CompileResult::STATUS_FAILURE);
        assert_eq!(result.stderr(), b"error: ';' expected");
    }

    #[test]
    fn test_signal_exit_is_compile_failure() {
        let tools = tools_with(Config::default(), |_| Ok(ProcessOutput::default()));
        let result = tools.build(&ProcessCommand::new("ant")).unwrap();
        assert!(!result.is_success());
    }

    #[test]
    fn test_stale_result_file_is_removed_before_running() {
        let temp_dir = TempDir::new().unwrap();
        let result_file = temp_dir.path().join("results.txt");
        fs::write(&result_file, "[]").unwrap();

        let observed = result_file.clone();
        let tools = tools_with(Config::default(), move |_| {
            assert!(!observed.exists());
            Ok(ProcessOutput {
                exit_code: Some(0),
                ..Default::default()
            })
        });

        let execution = tools
            .execute_tests(
                temp_dir.path(),
                &temp_dir.path().join("test"),
                &result_file,
                &ClassPath::new(temp_dir.path()),
                &ExerciseDescriptor::new("ex", Vec::new()),
            )
            .unwrap();
        assert_eq!(execution.result_file, result_file);
    }

    #[test]
    fn test_style_check_not_applicable() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("src");
        let never = |_: &ProcessCommand| -> Result<ProcessOutput> {
            panic!("checkstyle must not run")
        };

        // no source directory
        let tools = tools_with(Config::default(), never);
        assert!(tools.check_style(temp_dir.path(), &src).unwrap().is_none());

        // not configured
        fs::create_dir(&src).unwrap();
        assert!(tools.check_style(temp_dir.path(), &src).unwrap().is_none());

        // disabled
        let config = Config {
            checkstyle: Some(CheckstyleConfig {
                jar: PathBuf::from("checkstyle.jar"),
                config_file: PathBuf::from("rules.xml"),
                strategy: Strategy::Disabled,
            }),
            ..Default::default()
        };
        let tools = tools_with(config, never);
        assert!(tools.check_style(temp_dir.path(), &src).unwrap().is_none());
    }
}
