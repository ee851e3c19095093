//! External process description and execution

pub mod executor;
pub mod process_command;

// Re-export commonly used types
pub use executor::{CommandExecutor, ProcessOutput, SystemExecutor};
pub use process_command::ProcessCommand;
