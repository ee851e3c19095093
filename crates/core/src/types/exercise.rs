use serde::{Deserialize, Serialize};

/// A test case found by statically scanning test sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestDescriptor {
    /// `"<class name> <method name>"`
    pub name: String,
    pub points: Vec<String>,
}

impl TestDescriptor {
    pub fn new(name: impl Into<String>, points: Vec<String>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Splits the name into its class and method parts
    pub fn class_and_method(&self) -> (&str, &str) {
        match self.name.rsplit_once(' ') {
            Some((class_name, method_name)) => (class_name, method_name),
            None => ("", self.name.as_str()),
        }
    }
}

/// Everything that could run for one exercise, in scan order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseDescriptor {
    pub name: String,
    pub tests: Vec<TestDescriptor>,
}

impl ExerciseDescriptor {
    pub fn new(name: impl Into<String>, tests: Vec<TestDescriptor>) -> Self {
        Self {
            name: name.into(),
            tests,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_and_method() {
        let test = TestDescriptor::new("fi.example.CalculatorTest addsNumbers", vec![]);
        assert_eq!(
            test.class_and_method(),
            ("fi.example.CalculatorTest", "addsNumbers")
        );
    }

    #[test]
    fn test_class_and_method_without_class() {
        let test = TestDescriptor::new("lonely", vec![]);
        assert_eq!(test.class_and_method(), ("", "lonely"));
    }
}
