use serde::{Deserialize, Serialize};

pub const DEFAULT_ANT_COMMAND: &str = "ant";
pub const DEFAULT_ANT_COMPILE_TARGET: &str = "compile-test";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AntConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Target that compiles both sources and tests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compile_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_args: Option<Vec<String>>,
}

impl AntConfig {
    pub fn command(&self) -> &str {
        self.command.as_deref().unwrap_or(DEFAULT_ANT_COMMAND)
    }

    pub fn compile_target(&self) -> &str {
        self.compile_target
            .as_deref()
            .unwrap_or(DEFAULT_ANT_COMPILE_TARGET)
    }

    pub fn extra_args(&self) -> &[String] {
        self.extra_args.as_deref().unwrap_or_default()
    }
}
