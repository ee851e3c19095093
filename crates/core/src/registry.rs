//! Ordered set of toolchain plugins and first-match detection

use std::path::Path;
use std::sync::Arc;

use crate::{
    command::{CommandExecutor, SystemExecutor},
    config::Config,
    error::{Error, Result},
    plugins::{AntPlugin, LanguagePlugin, MavenPlugin},
};

/// Built-in toolchains, in detection order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Maven,
    Ant,
}

impl ProjectType {
    /// Maven first, so a project carrying both `pom.xml` and `build.xml` is Maven
    pub const ALL: [ProjectType; 2] = [ProjectType::Maven, ProjectType::Ant];

    pub fn create_plugin(
        self,
        config: Arc<Config>,
        executor: Arc<dyn CommandExecutor>,
    ) -> Box<dyn LanguagePlugin> {
        match self {
            ProjectType::Maven => Box::new(MavenPlugin::new(config, executor)),
            ProjectType::Ant => Box::new(AntPlugin::new(config, executor)),
        }
    }
}

/// Manages all registered plugins.
///
/// Built once and only read afterwards, so one registry can serve concurrent
/// invocations.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn LanguagePlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in plugin, running real processes
    pub fn with_defaults(config: Config) -> Self {
        Self::with_executor(config, Arc::new(SystemExecutor))
    }

    /// Every built-in plugin, running processes through `executor`
    pub fn with_executor(config: Config, executor: Arc<dyn CommandExecutor>) -> Self {
        let config = Arc::new(config);
        let mut registry = Self::new();
        for project_type in ProjectType::ALL {
            registry.register(project_type.create_plugin(Arc::clone(&config), Arc::clone(&executor)));
        }
        registry
    }

    /// Adds a plugin after the ones already registered
    pub fn register(&mut self, plugin: Box<dyn LanguagePlugin>) {
        tracing::debug!("Registered plugin {}", plugin.language_name());
        self.plugins.push(plugin);
    }

    pub fn plugins(&self) -> impl Iterator<Item = &dyn LanguagePlugin> {
        self.plugins.iter().map(|p| p.as_ref())
    }

    /// First plugin, in registration order, that recognises `path`
    pub fn detect(&self, path: &Path) -> Result<&dyn LanguagePlugin> {
        let plugin = self
            .plugins()
            .find(|plugin| plugin.is_exercise_type_correct(path))
            .ok_or_else(|| Error::NoPluginFound(path.to_path_buf()))?;
        tracing::debug!("Detected {} at {}", plugin.language_name(), path.display());
        Ok(plugin)
    }

    pub fn is_exercise_root_directory(&self, path: &Path) -> bool {
        self.plugins()
            .any(|plugin| plugin.is_exercise_type_correct(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn registry() -> PluginRegistry {
        PluginRegistry::with_defaults(Config::default())
    }

    #[test]
    fn test_built_in_order() {
        let names: Vec<_> = registry().plugins().map(|p| p.language_name()).collect();
        assert_eq!(names, vec!["apache-maven", "apache-ant"]);
    }

    #[test]
    fn test_detects_ant_project() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("build.xml"), "<project/>").unwrap();

        let registry = registry();
        let plugin = registry.detect(temp_dir.path()).unwrap();
        assert_eq!(plugin.language_name(), "apache-ant");
    }

    #[test]
    fn test_maven_wins_over_ant() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("build.xml"), "<project/>").unwrap();
        fs::write(temp_dir.path().join("pom.xml"), "<project/>").unwrap();

        let registry = registry();
        assert_eq!(
            registry.detect(temp_dir.path()).unwrap().language_name(),
            "apache-maven"
        );
    }

    #[test]
    fn test_unknown_directory() {
        let temp_dir = TempDir::new().unwrap();
        let registry = registry();

        assert!(!registry.is_exercise_root_directory(temp_dir.path()));
        match registry.detect(temp_dir.path()) {
            Err(Error::NoPluginFound(path)) => assert_eq!(path, temp_dir.path()),
            Err(other) => panic!("expected NoPluginFound, got {other:?}"),
            Ok(plugin) => panic!("unexpected plugin {}", plugin.language_name()),
        }
    }

    #[test]
    fn test_empty_registry_matches_nothing() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pom.xml"), "<project/>").unwrap();
        assert!(PluginRegistry::new().detect(temp_dir.path()).is_err());
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PluginRegistry>();
    }
}
