pub mod compile_result;
pub mod exercise;
pub mod run_result;
pub mod validation;

// Re-export commonly used types
pub use compile_result::CompileResult;
pub use exercise::{ExerciseDescriptor, TestDescriptor};
pub use run_result::{RunResult, RunStatus, TestResult};
pub use validation::{Strategy, ValidationError, ValidationResult};
