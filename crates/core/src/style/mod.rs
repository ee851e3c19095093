//! Code style checking through checkstyle

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::{
    command::{CommandExecutor, ProcessCommand},
    config::{CheckstyleConfig, JavaConfig},
    error::{Error, Result},
    types::{ValidationError, ValidationResult},
};

/// Runs checkstyle over a source directory and collects its XML report
pub struct Checkstyle {
    java: JavaConfig,
    config: CheckstyleConfig,
    executor: Arc<dyn CommandExecutor>,
}

impl Checkstyle {
    pub fn new(java: JavaConfig, config: CheckstyleConfig, executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            java,
            config,
            executor,
        }
    }

    pub fn command(&self, project_root: &Path, source_dir: &Path) -> ProcessCommand {
        ProcessCommand::new(self.java.command())
            .arg("-jar")
            .arg(self.config.jar.display().to_string())
            .arg("-c")
            .arg(self.config.config_file.display().to_string())
            .arg("-f")
            .arg("xml")
            .arg(source_dir.display().to_string())
            .with_working_dir(project_root)
    }

    /// Checks `source_dir`; the exit code only counts violations, so the report decides
    pub fn check(&self, project_root: &Path, source_dir: &Path) -> Result<ValidationResult> {
        tracing::info!("Checking code style of {}", source_dir.display());

        let output = self.executor.execute(&self.command(project_root, source_dir))?;
        let validation_errors = parse_report(&output.stdout).map_err(|e| match e {
            Error::StyleCheckError(msg) => Error::StyleCheckError(format!(
                "{msg}; checkstyle stderr: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )),
            other => other,
        })?;

        let result = ValidationResult::new(self.config.strategy, validation_errors);
        tracing::info!(
            "Found {} style violations in {}",
            result.error_count(),
            source_dir.display()
        );
        Ok(result)
    }
}

/// Parses a checkstyle XML report into violations grouped by file.
///
/// Files without violations get no entry.
pub fn parse_report(xml: &[u8]) -> Result<BTreeMap<PathBuf, Vec<ValidationError>>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut errors: BTreeMap<PathBuf, Vec<ValidationError>> = BTreeMap::new();
    let mut current_file: Option<PathBuf> = None;
    let mut seen_root = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"checkstyle" => seen_root = true,
                b"file" => {
                    current_file = Some(PathBuf::from(required_attribute(&e, "name")?));
                }
                b"error" => {
                    let file = current_file.clone().ok_or_else(|| {
                        Error::StyleCheckError("error element outside of a file".to_string())
                    })?;
                    errors.entry(file).or_default().push(validation_error(&e)?);
                }
                _ => {}
            },
            Ok(Event::End(e)) if e.name().as_ref() == b"file" => current_file = None,
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::StyleCheckError(format!(
                    "Invalid checkstyle report at position {}: {e}",
                    reader.error_position()
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(Error::StyleCheckError(
            "No checkstyle report was produced".to_string(),
        ));
    }

    Ok(errors)
}

fn attribute(element: &BytesStart, name: &str) -> Result<Option<String>> {
    let attribute = element
        .try_get_attribute(name)
        .map_err(|e| Error::StyleCheckError(format!("Invalid attribute `{name}`: {e}")))?;
    match attribute {
        Some(attribute) => {
            let value = attribute
                .unescape_value()
                .map_err(|e| Error::StyleCheckError(format!("Invalid attribute `{name}`: {e}")))?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}

fn required_attribute(element: &BytesStart, name: &str) -> Result<String> {
    attribute(element, name)?
        .ok_or_else(|| Error::StyleCheckError(format!("Missing attribute `{name}`")))
}

fn number_attribute(element: &BytesStart, name: &str) -> Result<u32> {
    match attribute(element, name)? {
        Some(value) => value
            .parse()
            .map_err(|_| Error::StyleCheckError(format!("Attribute `{name}` is not a number: {value}"))),
        None => Ok(0),
    }
}

fn validation_error(element: &BytesStart) -> Result<ValidationError> {
    Ok(ValidationError {
        line: number_attribute(element, "line")?,
        column: number_attribute(element, "column")?,
        message: required_attribute(element, "message")?,
        source_name: attribute(element, "source")?.unwrap_or_default(),
    })
}
