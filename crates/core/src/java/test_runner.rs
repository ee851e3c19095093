use std::path::Path;

use crate::{command::ProcessCommand, config::JavaConfig, types::ExerciseDescriptor};

use super::ClassPath;

/// System property telling the executor where compiled test classes live
pub const TEST_CLASS_DIR_PROPERTY: &str = "tmc.test_class_dir";
/// System property telling the executor where to write the result artifact
pub const RESULTS_FILE_PROPERTY: &str = "tmc.results_file";

/// Builds the JVM invocation that runs the scanned tests
pub struct TestRunnerArgumentBuilder<'a> {
    config: &'a JavaConfig,
    project_root: &'a Path,
    test_dir: &'a Path,
    result_file: &'a Path,
    class_path: &'a ClassPath,
    exercise: &'a ExerciseDescriptor,
}

impl<'a> TestRunnerArgumentBuilder<'a> {
    pub fn new(
        config: &'a JavaConfig,
        project_root: &'a Path,
        test_dir: &'a Path,
        result_file: &'a Path,
        class_path: &'a ClassPath,
        exercise: &'a ExerciseDescriptor,
    ) -> Self {
        Self {
            config,
            project_root,
            test_dir,
            result_file,
            class_path,
            exercise,
        }
    }

    pub fn build(&self) -> ProcessCommand {
        let mut class_path = self.class_path.clone();
        for jar in self.config.test_runner_classpath() {
            class_path.add(jar.clone());
        }

        ProcessCommand::new(self.config.command())
            .args(self.config.jvm_args().iter().cloned())
            .arg(format!(
                "-D{TEST_CLASS_DIR_PROPERTY}={}",
                self.test_dir.display()
            ))
            .arg(format!(
                "-D{RESULTS_FILE_PROPERTY}={}",
                self.result_file.display()
            ))
            .arg("-cp")
            .arg(class_path.to_string())
            .arg(self.config.test_runner_main_class())
            .args(self.test_method_args())
            .with_working_dir(self.project_root)
    }

    /// One `Class.method{point1,point2}` argument per scanned test
    fn test_method_args(&self) -> Vec<String> {
        self.exercise
            .tests
            .iter()
            .map(|test| {
                let (class_name, method_name) = test.class_and_method();
                format!("{class_name}.{method_name}{{{}}}", test.points.join(","))
            })
            .collect()
    }
}
