pub mod check_style;
pub mod detect;
pub mod prepare;
pub mod scan;

pub use check_style::check_style_command;
pub use detect::detect_command;
pub use prepare::{prepare_solution_command, prepare_stub_command};
pub use run_tests::run_tests_command;
pub use scan::scan_command;

use anyhow::{Context, Result};
use exercise_runner_core::{Config, ExerciseRunner};
use std::path::Path;

/// Runner configured from `config`, or from the nearest config file above `path`
pub(crate) fn load_runner(path: &Path, config: Option<&Path>) -> Result<ExerciseRunner> {
    let config = match config {
        Some(file) => Config::load_from_file(file)
            .with_context(|| format!("Failed to load config {}", file.display()))?,
        None => Config::load_for(path)
            .with_context(|| format!("Failed to load config for {}", path.display()))?,
    };
    Ok(ExerciseRunner::with_config(config))
}
