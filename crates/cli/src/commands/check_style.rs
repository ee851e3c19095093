use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use super::load_runner;
use crate::utils::write_json;

pub fn check_style_command(path: &Path, config: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let runner = load_runner(path, config)?;
    let result = runner
        .run_check_code_style(path)
        .with_context(|| format!("Failed to check code style of {}", path.display()))?;

    match &result {
        Some(result) => info!("{} style violations", result.error_count()),
        None => info!("Style checking does not apply to {}", path.display()),
    }
    write_json(&result, output)
}
