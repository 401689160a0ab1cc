use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Resolver settings from `Resolver Settings.yaml`
///
/// Controls where the installation builder looks for companion tools and which
/// game profiles are redirected to a canonical content directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(rename = "Resolver_Settings")]
    pub resolver_settings: ResolverSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverSettings {
    /// Normalized game name mapped to the subdirectory of the install root
    /// whose `gameinfo.txt` should be preferred.
    #[serde(
        rename = "Preferred Directories",
        default = "default_preferred_directories"
    )]
    pub preferred_directories: IndexMap<String, String>,

    #[serde(rename = "Model Compiler", default = "default_model_compiler")]
    pub model_compiler: String,

    #[serde(rename = "Model Viewer", default = "default_model_viewer")]
    pub model_viewer: String,

    #[serde(rename = "Debug Mode", default)]
    pub debug_mode: bool,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            preferred_directories: default_preferred_directories(),
            model_compiler: default_model_compiler(),
            model_viewer: default_model_viewer(),
            debug_mode: false,
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            resolver_settings: ResolverSettings::default(),
        }
    }
}

fn default_preferred_directories() -> IndexMap<String, String> {
    let mut directories = IndexMap::new();
    directories.insert("Half-Life 2".to_string(), "hl2".to_string());
    directories
}

fn default_model_compiler() -> String {
    "studiomdl.exe".to_string()
}

fn default_model_viewer() -> String {
    "hlmv.exe".to_string()
}

impl ResolverSettings {
    /// Get the preferred content directory for a normalized game name
    pub fn preferred_directory(&self, game_name: &str) -> Option<&str> {
        self.preferred_directories
            .get(game_name)
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_settings_defaults() {
        let settings = ResolverSettings::default();
        assert_eq!(settings.model_compiler, "studiomdl.exe");
        assert_eq!(settings.model_viewer, "hlmv.exe");
        assert!(!settings.debug_mode);
        assert_eq!(settings.preferred_directory("Half-Life 2"), Some("hl2"));
        assert_eq!(settings.preferred_directory("Portal 2"), None);
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let yaml = "Resolver_Settings:\n  Debug Mode: true\n";
        let config: ResolverConfig = serde_yaml_ng::from_str(yaml).unwrap();

        assert!(config.resolver_settings.debug_mode);
        assert_eq!(config.resolver_settings.model_compiler, "studiomdl.exe");
        assert_eq!(
            config.resolver_settings.preferred_directory("Half-Life 2"),
            Some("hl2")
        );
    }
}
