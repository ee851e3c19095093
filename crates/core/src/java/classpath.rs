use std::fmt;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

#[cfg(windows)]
pub const SEPARATOR: char = ';';
#[cfg(not(windows))]
pub const SEPARATOR: char = ':';

/// Ordered, duplicate-free list of class path entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassPath {
    entries: Vec<PathBuf>,
}

impl ClassPath {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        let mut class_path = Self::default();
        class_path.add(base);
        class_path
    }

    /// Parses a separator-joined class path such as `mvn dependency:build-classpath` writes
    pub fn parse(value: &str) -> Self {
        let mut class_path = Self::default();
        for entry in value.trim().split(SEPARATOR).filter(|e| !e.is_empty()) {
            class_path.add(entry);
        }
        class_path
    }

    pub fn add(&mut self, entry: impl Into<PathBuf>) {
        let entry = entry.into();
        if !self.entries.contains(&entry) {
            self.entries.push(entry);
        }
    }

    /// Adds `dir` itself and every jar below it, in path order
    pub fn add_dir_and_contents(&mut self, dir: &Path) {
        self.add(dir);
        if !dir.is_dir() {
            return;
        }
        for entry in WalkDir::new(dir).sort_by_file_name().into_iter().flatten() {
            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "jar")
            {
                self.add(entry.into_path());
            }
        }
    }

    pub fn extend(&mut self, other: ClassPath) {
        for entry in other.entries {
            self.add(entry);
        }
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }
}

impl fmt::Display for ClassPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{}", entry.display())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_duplicates_are_ignored() {
        let mut class_path = ClassPath::new("/exercise");
        class_path.add("/exercise/build/classes");
        class_path.add("/exercise");

        assert_eq!(class_path.entries().len(), 2);
    }

    #[test]
    fn test_dir_and_jars_are_added_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let lib = temp_dir.path().join("lib");
        fs::create_dir_all(lib.join("testrunner")).unwrap();
        fs::write(lib.join("junit-4.12.jar"), "").unwrap();
        fs::write(lib.join("testrunner").join("runner.jar"), "").unwrap();
        fs::write(lib.join("notes.txt"), "").unwrap();

        let mut class_path = ClassPath::default();
        class_path.add_dir_and_contents(&lib);

        assert_eq!(
            class_path.entries(),
            [
                lib.clone(),
                lib.join("junit-4.12.jar"),
                lib.join("testrunner").join("runner.jar"),
            ]
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_parse_and_display() {
        let class_path = ClassPath::parse("/m2/junit.jar:/m2/hamcrest.jar\n");
        assert_eq!(class_path.entries().len(), 2);
        assert_eq!(class_path.to_string(), "/m2/junit.jar:/m2/hamcrest.jar");
    }
}
