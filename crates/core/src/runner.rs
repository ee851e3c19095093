//! Single entry point that routes every operation to the detected plugin

use std::path::Path;

use crate::{
    config::Config,
    error::Result,
    plugins::LanguagePlugin,
    registry::PluginRegistry,
    types::{CompileResult, ExerciseDescriptor, RunResult, ValidationResult},
};

pub struct ExerciseRunner {
    registry: PluginRegistry,
}

impl ExerciseRunner {
    pub fn new(registry: PluginRegistry) -> Self {
        Self { registry }
    }

    /// Runner with every built-in plugin
    pub fn with_config(config: Config) -> Self {
        Self::new(PluginRegistry::with_defaults(config))
    }

    /// Runner configured from the nearest config file above `path`
    pub fn load_for(path: &Path) -> Result<Self> {
        Ok(Self::with_config(Config::load_for(path)?))
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    pub fn detect(&self, path: &Path) -> Result<&dyn LanguagePlugin> {
        self.registry.detect(path)
    }

    pub fn is_exercise_root_directory(&self, path: &Path) -> bool {
        self.registry.is_exercise_root_directory(path)
    }

    pub fn run_check_code_style(&self, path: &Path) -> Result<Option<ValidationResult>> {
        self.detect(path)?.check_code_style(path)
    }

    pub fn run_tests(&self, path: &Path) -> Result<RunResult> {
        self.detect(path)?.run_tests(path)
    }

    pub fn scan_exercise(&self, path: &Path, exercise_name: &str) -> Result<Option<ExerciseDescriptor>> {
        self.detect(path)?.scan_exercise(path, exercise_name)
    }

    pub fn compile(&self, path: &Path) -> Result<CompileResult> {
        self.detect(path)?.build(path)
    }

    pub fn prepare_stub(&self, path: &Path) -> Result<()> {
        self.detect(path)?.prepare_stub(path)
    }

    pub fn prepare_solution(&self, path: &Path) -> Result<()> {
        self.detect(path)?.prepare_solution(path)
    }
}
