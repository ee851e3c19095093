//! Toolchain plugins and the build-and-test pipeline they share

pub mod ant;
pub mod maven;
pub mod pipeline;
pub mod traits;

// Re-export commonly used types
pub use ant::AntPlugin;
pub use maven::MavenPlugin;
pub use pipeline::{Pipeline, PipelineState};
pub use traits::{LanguagePlugin, TestExecution};
