//! Apache Ant exercises

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{
    command::{CommandExecutor, ProcessCommand},
    config::Config,
    error::Result,
    java::{ClassPath, JavaTools},
    types::{CompileResult, ExerciseDescriptor, ValidationResult},
};

use super::{LanguagePlugin, TestExecution};

pub const BUILD_FILE: &str = "build.xml";
const TEST_DIR: &str = "test";
const SOURCE_DIR: &str = "src";
const LIB_DIR: &str = "lib";
const RESULT_FILE: &str = "results.txt";

/// Plugin for projects built with `ant`
pub struct AntPlugin {
    tools: JavaTools,
}

impl AntPlugin {
    pub fn new(config: Arc<Config>, executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            tools: JavaTools::new(config, executor),
        }
    }

    pub fn build_command(&self, path: &Path) -> Result<ProcessCommand> {
        let ant = &self.tools.config().ant;
        let path = std::path::absolute(path)?;
        let build_file = path.join(BUILD_FILE);

        Ok(ProcessCommand::new(ant.command())
            .arg("-Djavac.fork=true")
            .arg("-buildfile")
            .arg(build_file.display().to_string())
            .args(ant.extra_args().iter().cloned())
            .arg(ant.compile_target())
            .with_working_dir(&path))
    }

    /// Project dir, `lib` and its jars, then the compiled test and main classes
    pub fn class_path(&self, path: &Path) -> ClassPath {
        let mut class_path = ClassPath::new(path);
        class_path.add_dir_and_contents(&path.join(LIB_DIR));
        class_path.add(path.join("build").join("test").join("classes"));
        class_path.add(path.join("build").join("classes"));
        class_path
    }

    fn test_dir(path: &Path) -> PathBuf {
        path.join(TEST_DIR)
    }
}

impl LanguagePlugin for AntPlugin {
    fn language_name(&self) -> &'static str {
        "apache-ant"
    }

    fn is_exercise_type_correct(&self, path: &Path) -> bool {
        path.join(BUILD_FILE).is_file()
    }

    fn build(&self, path: &Path) -> Result<CompileResult> {
        let command = self.build_command(path)?;
        self.tools.build(&command)
    }

    fn scan_exercise(&self, path: &Path, exercise_name: &str) -> Result<Option<ExerciseDescriptor>> {
        self.tools.scan(&Self::test_dir(path), exercise_name)
    }

    fn execute_tests(&self, path: &Path, exercise: &ExerciseDescriptor) -> Result<TestExecution> {
        let path = &std::path::absolute(path)?;
        self.tools.execute_tests(
            path,
            &Self::test_dir(path),
            &path.join(RESULT_FILE),
            &self.class_path(path),
            exercise,
        )
    }

    fn check_code_style(&self, path: &Path) -> Result<Option<ValidationResult>> {
        let path = &std::path::absolute(path)?;
        self.tools.check_style(path, &path.join(SOURCE_DIR))
    }
}
