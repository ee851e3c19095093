//! Apache Maven exercises

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{
    command::{CommandExecutor, ProcessCommand},
    config::Config,
    error::{Error, Result},
    java::{ClassPath, JavaTools},
    types::{CompileResult, ExerciseDescriptor, ValidationResult},
};

use super::{LanguagePlugin, TestExecution};

pub const POM_FILE: &str = "pom.xml";
const TARGET_DIR: &str = "target";
const CLASSPATH_FILE: &str = "classpath.txt";
const RESULT_FILE: &str = "results.txt";

/// Plugin for projects built with `mvn`
pub struct MavenPlugin {
    tools: JavaTools,
}

impl MavenPlugin {
    pub fn new(config: Arc<Config>, executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            tools: JavaTools::new(config, executor),
        }
    }

    fn maven_command(&self, path: &Path) -> ProcessCommand {
        let maven = &self.tools.config().maven;
        ProcessCommand::new(maven.command())
            .arg("--batch-mode")
            .args(maven.extra_args().iter().cloned())
            .with_working_dir(path)
    }

    pub fn build_command(&self, path: &Path) -> ProcessCommand {
        let goals = self.tools.config().maven.build_goals();
        self.maven_command(path).args(goals)
    }

    fn target_dir(path: &Path) -> PathBuf {
        path.join(TARGET_DIR)
    }

    fn test_dir(path: &Path) -> PathBuf {
        path.join("src").join("test").join("java")
    }

    /// Compiled classes followed by the dependencies Maven resolves for the project
    pub fn class_path(&self, path: &Path) -> Result<ClassPath> {
        let path = &std::path::absolute(path)?;
        let target = Self::target_dir(path);
        let output_file = target.join(CLASSPATH_FILE);
        let command = self
            .maven_command(path)
            .arg("dependency:build-classpath")
            .arg(format!("-Dmdep.outputFile={}", output_file.display()));
        tracing::debug!("Class path command: {}", command.to_shell_command());

        let output = self.tools.executor().execute(&command)?;
        if !output.success() {
            return Err(Error::ClassPathError(format!(
                "`{}` exited with {:?}: {}",
                command.to_shell_command(),
                output.exit_code,
                String::from_utf8_lossy(&output.stdout).trim()
            )));
        }
        let dependencies = std::fs::read_to_string(&output_file).map_err(|e| {
            Error::ClassPathError(format!("Failed to read {}: {e}", output_file.display()))
        })?;

        let mut class_path = ClassPath::new(target.join("classes"));
        class_path.add(target.join("test-classes"));
        class_path.extend(ClassPath::parse(&dependencies));
        Ok(class_path)
    }
}

impl LanguagePlugin for MavenPlugin {
    fn language_name(&self) -> &'static str {
        "apache-maven"
    }

    fn is_exercise_type_correct(&self, path: &Path) -> bool {
        path.join(POM_FILE).is_file()
    }

    fn build(&self, path: &Path) -> Result<CompileResult> {
        let path = std::path::absolute(path)?;
        self.tools.build(&self.build_command(&path))
    }

    fn scan_exercise(&self, path: &Path, exercise_name: &str) -> Result<Option<ExerciseDescriptor>> {
        self.tools.scan(&Self::test_dir(path), exercise_name)
    }

    fn execute_tests(&self, path: &Path, exercise: &ExerciseDescriptor) -> Result<TestExecution> {
        let path = &std::path::absolute(path)?;
        let class_path = self.class_path(path)?;
        self.tools.execute_tests(
            path,
            &Self::test_dir(path),
            &Self::target_dir(path).join(RESULT_FILE),
            &class_path,
            exercise,
        )
    }

    fn check_code_style(&self, path: &Path) -> Result<Option<ValidationResult>> {
        let path = &std::path::absolute(path)?;
        self.tools
            .check_style(path, &path.join("src").join("main").join("java"))
    }
}
