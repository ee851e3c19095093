use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use super::load_runner;

pub fn prepare_stub_command(path: &Path, config: Option<&Path>) -> Result<()> {
    let runner = load_runner(path, config)?;
    runner
        .prepare_stub(path)
        .with_context(|| format!("Failed to prepare stub of {}", path.display()))?;
    info!("Prepared stub at {}", path.display());
    Ok(())
}

pub fn prepare_solution_command(path: &Path, config: Option<&Path>) -> Result<()> {
    let runner = load_runner(path, config)?;
    runner
        .prepare_solution(path)
        .with_context(|| format!("Failed to prepare solution of {}", path.display()))?;
    info!("Prepared solution at {}", path.display());
    Ok(())
}
