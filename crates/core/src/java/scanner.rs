//! Static discovery of JUnit tests and their point annotations

use std::fs;
use std::path::{Path, PathBuf};

use tree_sitter::{Node, Parser, Tree};
use walkdir::WalkDir;

use crate::{
    error::{Error, Result},
    types::TestDescriptor,
};

const TEST_ANNOTATION: &str = "Test";
const POINTS_ANNOTATION: &str = "Points";

/// Finds `@Test` methods in Java sources without compiling them
pub struct TestScanner {
    parser: Parser,
}

impl TestScanner {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|e| Error::TreeSitterError(format!("Failed to set language: {e}")))?;
        Ok(Self { parser })
    }

    pub fn parse(&mut self, source: &str) -> Result<Tree> {
        self.parser
            .parse(source, None)
            .ok_or_else(|| Error::ScannerError("Failed to parse test source".to_string()))
    }

    /// Scans every `.java` file under `test_dir` in path order.
    ///
    /// Returns `None` when there is no test source to scan at all.
    pub fn scan_directory(&mut self, test_dir: &Path) -> Result<Option<Vec<TestDescriptor>>> {
        if !test_dir.is_dir() {
            tracing::debug!("No test directory at {}", test_dir.display());
            return Ok(None);
        }

        let files = java_files(test_dir)?;
        if files.is_empty() {
            tracing::debug!("No Java sources in {}", test_dir.display());
            return Ok(None);
        }

        let mut tests = Vec::new();
        for file in &files {
            let source = fs::read_to_string(file).map_err(|e| {
                Error::ScannerError(format!("Failed to read {}: {e}", file.display()))
            })?;
            let found = self.scan_source(&source).map_err(|e| match e {
                Error::ScannerError(msg) => {
                    Error::ScannerError(format!("{}: {msg}", file.display()))
                }
                other => other,
            })?;
            tracing::debug!("Found {} tests in {}", found.len(), file.display());
            tests.extend(found);
        }

        Ok(Some(tests))
    }

    pub fn scan_source(&mut self, source: &str) -> Result<Vec<TestDescriptor>> {
        let tree = self.parse(source)?;
        let root = tree.root_node();
        if root.has_error() {
            return Err(Error::ScannerError(
                "Syntax error in test source".to_string(),
            ));
        }

        let package = package_name(root, source);
        let mut tests = Vec::new();
        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            match child.kind() {
                "class_declaration" => collect_class_tests(child, source, package, None, &mut tests),
                "enum_declaration" | "interface_declaration" => {
                    collect_member_types(child, source, package, None, &mut tests)
                }
                _ => {}
            }
        }
        Ok(tests)
    }
}

fn java_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            Error::ScannerError(format!("Failed to walk {}: {e}", dir.display()))
        })?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "java")
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn text<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

fn package_name<'a>(root: Node, source: &'a str) -> Option<&'a str> {
    let mut cursor = root.walk();
    let declaration = root
        .named_children(&mut cursor)
        .find(|n| n.kind() == "package_declaration")?;

    let mut cursor = declaration.walk();
    let name = declaration
        .named_children(&mut cursor)
        .find(|n| matches!(n.kind(), "scoped_identifier" | "identifier"))?;
    Some(text(name, source))
}

/// Name the JVM knows a type by, e.g. `pkg.Outer$Inner`
fn binary_name(declaration: Node, source: &str, package: Option<&str>, outer: Option<&str>) -> Option<String> {
    let simple_name = text(declaration.child_by_field_name("name")?, source);
    Some(match (outer, package) {
        (Some(outer), _) => format!("{outer}${simple_name}"),
        (None, Some(package)) => format!("{package}.{simple_name}"),
        (None, None) => simple_name.to_string(),
    })
}

/// Enums and interfaces hold no tests themselves but may nest test classes
fn collect_member_types(
    declaration: Node,
    source: &str,
    package: Option<&str>,
    outer: Option<&str>,
    tests: &mut Vec<TestDescriptor>,
) {
    let Some(type_name) = binary_name(declaration, source, package, outer) else {
        return;
    };
    if let Some(body) = declaration.child_by_field_name("body") {
        collect_nested_types(body, source, package, &type_name, tests);
    }
}

fn collect_nested_types(
    body: Node,
    source: &str,
    package: Option<&str>,
    outer: &str,
    tests: &mut Vec<TestDescriptor>,
) {
    let mut cursor = body.walk();
    for member in body.named_children(&mut cursor) {
        match member.kind() {
            "class_declaration" => collect_class_tests(member, source, package, Some(outer), tests),
            "enum_declaration" | "interface_declaration" => {
                collect_member_types(member, source, package, Some(outer), tests)
            }
            // members after the constants of an enum
            "enum_body_declarations" => collect_nested_types(member, source, package, outer, tests),
            _ => {}
        }
    }
}

fn collect_class_tests(
    class: Node,
    source: &str,
    package: Option<&str>,
    outer: Option<&str>,
    tests: &mut Vec<TestDescriptor>,
) {
    let Some(class_name) = binary_name(class, source, package, outer) else {
        return;
    };

    let modifiers = modifiers_of(class);
    let is_abstract = modifiers.is_some_and(|m| has_keyword(m, "abstract"));
    let class_points = modifiers
        .map(|m| points_of(m, source))
        .unwrap_or_default();

    let Some(body) = class.child_by_field_name("body") else {
        return;
    };

    let mut cursor = body.walk();
    for member in body.named_children(&mut cursor) {
        match member.kind() {
            "method_declaration" if !is_abstract => {
                let Some(method_modifiers) = modifiers_of(member) else {
                    continue;
                };
                if !has_annotation(method_modifiers, source, TEST_ANNOTATION) {
                    continue;
                }
                let Some(method_name) = member.child_by_field_name("name") else {
                    continue;
                };

                let mut points = class_points.clone();
                for point in points_of(method_modifiers, source) {
                    if !points.contains(&point) {
                        points.push(point);
                    }
                }
                tests.push(TestDescriptor::new(
                    format!("{class_name} {}", text(method_name, source)),
                    points,
                ));
            }
            "class_declaration" => {
                collect_class_tests(member, source, package, Some(class_name.as_str()), tests)
            }
            "enum_declaration" | "interface_declaration" => {
                collect_member_types(member, source, package, Some(class_name.as_str()), tests)
            }
            _ => {}
        }
    }
}

fn modifiers_of(node: Node) -> Option<Node> {
    let mut cursor = node.walk();
    let modifiers = node
        .named_children(&mut cursor)
        .find(|n| n.kind() == "modifiers");
    modifiers
}

fn has_keyword(modifiers: Node, keyword: &str) -> bool {
    let mut cursor = modifiers.walk();
    let found = modifiers.children(&mut cursor).any(|n| n.kind() == keyword);
    found
}

/// Annotations of a modifier list, e.g. `@Test` and `@Points("1.1")`
fn annotations(modifiers: Node) -> Vec<Node> {
    let mut cursor = modifiers.walk();
    let annotations = modifiers
        .named_children(&mut cursor)
        .filter(|n| matches!(n.kind(), "marker_annotation" | "annotation"))
        .collect();
    annotations
}

/// Compares by simple name so `@org.junit.Test` matches `Test`
fn annotation_is(annotation: Node, source: &str, simple_name: &str) -> bool {
    annotation
        .child_by_field_name("name")
        .map(|name| text(name, source).rsplit('.').next() == Some(simple_name))
        .unwrap_or(false)
}

fn has_annotation(modifiers: Node, source: &str, simple_name: &str) -> bool {
    annotations(modifiers)
        .into_iter()
        .any(|a| annotation_is(a, source, simple_name))
}

fn points_of(modifiers: Node, source: &str) -> Vec<String> {
    let mut literals = Vec::new();
    for annotation in annotations(modifiers) {
        if !annotation_is(annotation, source, POINTS_ANNOTATION) {
            continue;
        }
        if let Some(arguments) = annotation.child_by_field_name("arguments") {
            collect_string_literals(arguments, source, &mut literals);
        }
    }

    let mut points = Vec::new();
    for point in literals.iter().flat_map(|l| l.split_whitespace()) {
        if !points.iter().any(|p| p == point) {
            points.push(point.to_string());
        }
    }
    points
}

fn collect_string_literals(node: Node, source: &str, out: &mut Vec<String>) {
    if node.kind() == "string_literal" {
        out.push(text(node, source).trim_matches('"').to_string());
        return;
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_string_literals(child, source, out);
    }
}
