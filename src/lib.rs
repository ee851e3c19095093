//! Umbrella package for the workspace integration tests
pub use exercise_runner_core::*;
