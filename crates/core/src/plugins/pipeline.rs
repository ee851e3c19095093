//! The compile, scan and run state machine shared by all plugins

use std::path::Path;

use crate::{
    error::{Error, Result},
    results,
    types::{RunResult, compile_result::logs_from_streams},
};

use super::LanguagePlugin;

/// Progress of a single pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Start,
    Building,
    BuildFailed,
    BuildOk,
    Scanning,
    ScanFailed,
    TestsDescribed,
    Running,
    RunFailed,
    ResultsReady,
}

impl PipelineState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            PipelineState::BuildFailed
                | PipelineState::ScanFailed
                | PipelineState::RunFailed
                | PipelineState::ResultsReady
        )
    }
}

/// Drives a plugin's leaf operations from build to parsed results.
///
/// A failed build short-circuits into a `CompileFailed` result; the tests are
/// neither scanned nor run. Plugins always receive the exercise path in
/// absolute form, since their child processes run inside it.
pub struct Pipeline<'a, P: LanguagePlugin + ?Sized> {
    plugin: &'a P,
    state: PipelineState,
}

impl<'a, P: LanguagePlugin + ?Sized> Pipeline<'a, P> {
    pub fn new(plugin: &'a P) -> Self {
        Self {
            plugin,
            state: PipelineState::Start,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    fn transition(&mut self, next: PipelineState) {
        tracing::debug!("Pipeline: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    pub fn run(&mut self, path: &Path) -> Result<RunResult> {
        let language = self.plugin.language_name();
        let path = &std::path::absolute(path)?;

        self.transition(PipelineState::Building);
        tracing::info!("Building {} project at {}", language, path.display());
        let compile_result = self.plugin.build(path)?;
        if !compile_result.is_success() {
            tracing::warn!("Build failed for {}", path.display());
            self.transition(PipelineState::BuildFailed);
            return Ok(RunResult::compile_failed(&compile_result));
        }
        tracing::info!("Built {}", path.display());
        self.transition(PipelineState::BuildOk);

        self.transition(PipelineState::Scanning);
        let exercise_name = exercise_name(path);
        let exercise = match self.plugin.scan_exercise(path, &exercise_name) {
            Ok(Some(exercise)) => exercise,
            Ok(None) => {
                self.transition(PipelineState::ScanFailed);
                return Err(Error::TestScannerError(path.to_path_buf()));
            }
            Err(e) => {
                self.transition(PipelineState::ScanFailed);
                return Err(e);
            }
        };
        self.transition(PipelineState::TestsDescribed);

        self.transition(PipelineState::Running);
        tracing::info!(
            "Running {} tests of {}",
            exercise.tests.len(),
            exercise.name
        );
        let parsed = self
            .plugin
            .execute_tests(path, &exercise)
            .and_then(|execution| {
                if !execution.output.success() {
                    tracing::warn!(
                        "Test executor exited with {:?}",
                        execution.output.exit_code
                    );
                }
                let parsed = results::parse_result_file(&execution.result_file, &exercise)?;
                Ok((parsed, execution.output))
            });
        let (parsed, output) = match parsed {
            Ok(parsed) => parsed,
            Err(e) => {
                self.transition(PipelineState::RunFailed);
                return Err(e.into_test_runner_error());
            }
        };
        self.transition(PipelineState::ResultsReady);

        let result = if parsed.complete {
            RunResult::from_test_results(parsed.test_results)
        } else {
            RunResult::incomplete(parsed.test_results)
        };
        tracing::info!("Tests of {} finished: {:?}", exercise.name, result.status);
        Ok(result.with_logs(logs_from_streams(&output.stdout, &output.stderr)))
    }
}

fn exercise_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
