use anyhow::Result;
use std::path::Path;

use super::load_runner;

pub fn detect_command(path: &Path, config: Option<&Path>) -> Result<()> {
    let runner = load_runner(path, config)?;
    let plugin = runner.detect(path)?;
    println!("{}", plugin.language_name());
    Ok(())
}
