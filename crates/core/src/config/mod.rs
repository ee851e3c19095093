//! Configuration management for exercise-runner

mod ant_config;
mod checkstyle_config;
mod java_config;
mod maven_config;
mod settings;

// Re-export main types
pub use ant_config::AntConfig;
pub use checkstyle_config::CheckstyleConfig;
pub use java_config::JavaConfig;
pub use maven_config::MavenConfig;
pub use settings::{CONFIG_FILE_NAMES, Config};
