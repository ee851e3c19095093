//! First-match plugin dispatch

use exercise_runner_core::{
    CompileResult, Config, Error, ExerciseDescriptor, ExerciseRunner, LanguagePlugin,
    PluginRegistry, Result, TestExecution, ValidationResult,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Recognises directories containing `marker`
struct MarkerPlugin {
    name: &'static str,
    marker: &'static str,
}

impl LanguagePlugin for MarkerPlugin {
    fn language_name(&self) -> &'static str {
        self.name
    }

    fn is_exercise_type_correct(&self, path: &Path) -> bool {
        path.join(self.marker).exists()
    }

    fn build(&self, _path: &Path) -> Result<CompileResult> {
        Ok(CompileResult::failure(self.name.as_bytes().to_vec(), Vec::new()))
    }

    fn scan_exercise(&self, _path: &Path, name: &str) -> Result<Option<ExerciseDescriptor>> {
        Ok(Some(ExerciseDescriptor::new(name, Vec::new())))
    }

    fn execute_tests(&self, path: &Path, _exercise: &ExerciseDescriptor) -> Result<TestExecution> {
        Err(Error::NoPluginFound(path.to_path_buf()))
    }

    fn check_code_style(&self, _path: &Path) -> Result<Option<ValidationResult>> {
        Ok(None)
    }
}

fn registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    registry.register(Box::new(MarkerPlugin {
        name: "first",
        marker: "Makefile",
    }));
    registry.register(Box::new(MarkerPlugin {
        name: "second",
        marker: "Makefile",
    }));
    registry.register(Box::new(MarkerPlugin {
        name: "third",
        marker: "setup.py",
    }));
    registry
}

#[test]
fn test_first_registered_match_wins() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Makefile"), "").unwrap();
    fs::write(temp_dir.path().join("setup.py"), "").unwrap();

    let registry = registry();
    assert_eq!(registry.detect(temp_dir.path()).unwrap().language_name(), "first");
}

#[test]
fn test_later_plugin_matches_when_earlier_do_not() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("setup.py"), "").unwrap();

    let runner = ExerciseRunner::new(registry());
    assert_eq!(runner.detect(temp_dir.path()).unwrap().language_name(), "third");

    // compile failure short-circuits before the failing executor
    let result = runner.run_tests(temp_dir.path()).unwrap();
    assert!(result.test_results.is_empty());
    assert_eq!(result.logs["stdout"], "third");
}

#[test]
fn test_unknown_directory_has_no_plugin() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("README.md"), "# notes").unwrap();
    let runner = ExerciseRunner::with_config(Config::default());

    assert!(!runner.is_exercise_root_directory(temp_dir.path()));
    assert!(matches!(
        runner.run_tests(temp_dir.path()),
        Err(Error::NoPluginFound(_))
    ));
    assert!(matches!(
        runner.run_check_code_style(temp_dir.path()),
        Err(Error::NoPluginFound(_))
    ));
}

#[test]
fn test_built_in_plugins_by_marker() {
    let runner = ExerciseRunner::with_config(Config::default());

    let ant = TempDir::new().unwrap();
    fs::write(ant.path().join("build.xml"), "<project/>").unwrap();
    let maven = TempDir::new().unwrap();
    fs::write(maven.path().join("pom.xml"), "<project/>").unwrap();

    assert!(runner.is_exercise_root_directory(ant.path()));
    assert_eq!(runner.detect(ant.path()).unwrap().language_name(), "apache-ant");
    assert_eq!(
        runner.detect(maven.path()).unwrap().language_name(),
        "apache-maven"
    );
}
