//! Turning a full exercise into its student stub or its model solution
//!
//! Source files are filtered in place using comment markers:
//!
//! - `// BEGIN SOLUTION` .. `// END SOLUTION` delimit code only the solution keeps
//! - `// STUB: <code>` is a line only the stub keeps, uncommented
//! - `// SOLUTION FILE` marks a file that is not handed out at all

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};

static BEGIN_SOLUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*//\s*BEGIN SOLUTION\s*$").unwrap());
static END_SOLUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*//\s*END SOLUTION\s*$").unwrap());
static STUB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)//\s*STUB:\s?(.*)$").unwrap());
static SOLUTION_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*//\s*SOLUTION FILE\s*$").unwrap());

const SKIPPED_DIRS: [&str; 2] = ["build", "target"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Stub,
    Solution,
}

/// Strips solutions from every source file under `path`
pub fn prepare_stub(path: &Path) -> Result<()> {
    prepare(path, Variant::Stub)
}

/// Removes the stub markers from every source file under `path`
pub fn prepare_solution(path: &Path) -> Result<()> {
    prepare(path, Variant::Solution)
}

fn prepare(path: &Path, variant: Variant) -> Result<()> {
    tracing::info!("Preparing {:?} of {}", variant, path.display());

    for file in source_files(path)? {
        let contents = fs::read_to_string(&file)?;
        match filter(&contents, variant).map_err(|e| {
            Error::PreparationError(format!("{}: {e}", file.display()))
        })? {
            Some(filtered) => {
                if filtered != contents {
                    tracing::debug!("Rewriting {}", file.display());
                    fs::write(&file, filtered)?;
                }
            }
            None => {
                tracing::debug!("Removing solution file {}", file.display());
                fs::remove_file(&file)?;
            }
        }
    }
    Ok(())
}

fn is_skipped(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.iter().any(|dir| *dir == name)
}

fn source_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_skipped(e))
    {
        let entry = entry.map_err(|e| {
            Error::PreparationError(format!("Failed to walk {}: {e}", path.display()))
        })?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "java")
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Splits a line into its text and its original terminator (`\r\n`, `\n` or none)
fn split_terminator(line: &str) -> (&str, &str) {
    let text = line.strip_suffix('\n').unwrap_or(line);
    let text = text.strip_suffix('\r').unwrap_or(text);
    line.split_at(text.len())
}

/// Filtered contents, or `None` when the file must be removed.
///
/// Kept lines retain their own terminators.
fn filter(contents: &str, variant: Variant) -> std::result::Result<Option<String>, String> {
    let mut output = String::with_capacity(contents.len());
    let mut solution_start: Option<usize> = None;

    for (index, raw_line) in contents.split_inclusive('\n').enumerate() {
        let line_number = index + 1;
        let (line, terminator) = split_terminator(raw_line);

        if SOLUTION_FILE.is_match(line) {
            if variant == Variant::Stub {
                return Ok(None);
            }
            continue;
        }

        if BEGIN_SOLUTION.is_match(line) {
            if let Some(start) = solution_start {
                return Err(format!(
                    "line {line_number}: solution block opened on line {start} is not closed"
                ));
            }
            solution_start = Some(line_number);
            continue;
        }

        if END_SOLUTION.is_match(line) {
            if solution_start.take().is_none() {
                return Err(format!("line {line_number}: END SOLUTION without BEGIN SOLUTION"));
            }
            continue;
        }

        if solution_start.is_some() && variant == Variant::Stub {
            continue;
        }

        if let Some(captures) = STUB.captures(line) {
            if variant == Variant::Stub {
                output.push_str(&captures[1]);
                output.push_str(&captures[2]);
                output.push_str(terminator);
            }
            continue;
        }

        output.push_str(raw_line);
    }

    if let Some(start) = solution_start {
        return Err(format!("solution block opened on line {start} is not closed"));
    }

    Ok(Some(output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SOURCE: &str = "\
public class Calculator {
    public int add(int a, int b) {
        // BEGIN SOLUTION
        return a + b;
        // END SOLUTION
        // STUB: return 0;
    }
}
";

    #[test]
    fn test_stub_removes_solution_and_uncomments_stub() {
        let stub = filter(SOURCE, Variant::Stub).unwrap().unwrap();
        assert_eq!(
            stub,
            "\
public class Calculator {
    public int add(int a, int b) {
        return 0;
    }
}
"
        );
    }

    #[test]
    fn test_solution_keeps_code_without_markers() {
        let solution = filter(SOURCE, Variant::Solution).unwrap().unwrap();
        assert_eq!(
            solution,
            "\
public class Calculator {
    public int add(int a, int b) {
        return a + b;
    }
}
"
        );
    }

    #[test]
    fn test_line_endings_are_preserved() {
        let crlf = SOURCE.replace('\n', "\r\n");
        let stub = filter(&crlf, Variant::Stub).unwrap().unwrap();
        assert_eq!(
            stub,
            "public class Calculator {\r\n    public int add(int a, int b) {\r\n        return 0;\r\n    }\r\n}\r\n"
        );

        let unterminated = "class A {\n    // STUB: int x;\n}";
        assert_eq!(
            filter(unterminated, Variant::Stub).unwrap().unwrap(),
            "class A {\n    int x;\n}"
        );
        assert_eq!(
            filter(unterminated, Variant::Solution).unwrap().unwrap(),
            "class A {\n}"
        );
    }

    #[test]
    fn test_unterminated_block_is_error() {
        let source = "class A {\n// BEGIN SOLUTION\nint x;\n}\n";
        assert!(filter(source, Variant::Stub).is_err());
        assert!(filter("// END SOLUTION\n", Variant::Solution).is_err());
    }

    #[test]
    fn test_solution_file_is_removed_from_stub() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("Helper.java"), "// SOLUTION FILE\nclass Helper {}\n").unwrap();
        fs::write(src.join("Calculator.java"), SOURCE).unwrap();

        prepare_stub(temp_dir.path()).unwrap();

        assert!(!src.join("Helper.java").exists());
        assert!(
            !fs::read_to_string(src.join("Calculator.java"))
                .unwrap()
                .contains("a + b")
        );
    }

    #[test]
    fn test_solution_file_marker_is_dropped_from_solution() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("Helper.java");
        fs::write(&file, "// SOLUTION FILE\nclass Helper {}\n").unwrap();

        prepare_solution(temp_dir.path()).unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "class Helper {}\n");
    }

    #[test]
    fn test_build_output_is_left_alone() {
        let temp_dir = TempDir::new().unwrap();
        let generated = temp_dir.path().join("target").join("Generated.java");
        fs::create_dir_all(generated.parent().unwrap()).unwrap();
        fs::write(&generated, "// SOLUTION FILE\n").unwrap();

        prepare_stub(temp_dir.path()).unwrap();

        assert!(generated.exists());
    }
}
