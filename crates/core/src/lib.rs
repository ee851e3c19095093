//! exercise-runner - Builds and tests programming exercises across Java toolchains
//!
//! This crate provides functionality to:
//! - Detect which toolchain (Maven, Ant) an exercise directory belongs to
//! - Compile the exercise, describe its tests and run them through a test executor
//! - Report per-test outcomes, points and code style violations in one result model
//! - Prepare student stubs and model solutions from annotated sources
pub mod command;
pub mod config;
pub mod error;
pub mod java;
pub mod plugins;
pub mod preparation;
pub mod registry;
pub mod results;
pub mod runner;
pub mod style;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::{CommandExecutor, ProcessCommand, ProcessOutput, SystemExecutor};
pub use config::Config;
pub use plugins::{AntPlugin, LanguagePlugin, MavenPlugin, Pipeline, PipelineState, TestExecution};
pub use registry::{PluginRegistry, ProjectType};
pub use runner::ExerciseRunner;
