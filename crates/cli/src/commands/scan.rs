use anyhow::{Context, Result};
use std::path::Path;

use super::load_runner;
use crate::utils::write_json;

pub fn scan_command(
    path: &Path,
    name: Option<&str>,
    config: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let runner = load_runner(path, config)?;
    let name = match name {
        Some(name) => name.to_string(),
        None => default_exercise_name(path)?,
    };

    let exercise = runner
        .scan_exercise(path, &name)
        .with_context(|| format!("Failed to scan {}", path.display()))?;
    write_json(&exercise, output)
}

fn default_exercise_name(path: &Path) -> Result<String> {
    let path = path
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", path.display()))?;
    Ok(path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default())
}
