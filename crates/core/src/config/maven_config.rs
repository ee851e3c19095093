use serde::{Deserialize, Serialize};

pub const DEFAULT_MAVEN_COMMAND: &str = "mvn";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MavenConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_goals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_args: Option<Vec<String>>,
}

impl MavenConfig {
    pub fn command(&self) -> &str {
        self.command.as_deref().unwrap_or(DEFAULT_MAVEN_COMMAND)
    }

    pub fn build_goals(&self) -> Vec<String> {
        match &self.build_goals {
            Some(goals) => goals.clone(),
            None => vec!["clean".to_string(), "test-compile".to_string()],
        }
    }

    pub fn extra_args(&self) -> &[String] {
        self.extra_args.as_deref().unwrap_or_default()
    }
}
