use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Writes `value` as pretty JSON to `output`, or to stdout when no file is given.
///
/// An absent value is written as `null`.
pub fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize result")?;

    match output {
        Some(file) => {
            fs::write(file, format!("{json}\n"))
                .with_context(|| format!("Failed to write {}", file.display()))?;
            tracing::debug!("Wrote result to {}", file.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
