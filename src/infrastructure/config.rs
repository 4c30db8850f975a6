use crate::domain::{
    config::AudioscreenConfig,
    error::{ClassifyError, ClassifyResult},
};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration manager
///
/// Resolves configuration from two locations: a global file under the user's
/// home directory and a project file found by walking up from the current
/// directory. Project settings override global ones; defaults fill the rest.
pub struct ConfigManager {
    global_config_path: Option<PathBuf>,
    project_config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create new configuration manager
    pub fn new() -> ClassifyResult<Self> {
        Ok(Self {
            global_config_path: Self::get_global_config_path(),
            project_config_path: Self::find_project_config_path(),
        })
    }

    /// Load configuration from discovered files, falling back to defaults
    pub fn load_config(&self) -> ClassifyResult<AudioscreenConfig> {
        let mut config = AudioscreenConfig::default();

        if let Some(global_path) = &self.global_config_path {
            if global_path.exists() {
                config = self.load_config_from_path(global_path)?;
            }
        }

        if let Some(project_path) = &self.project_config_path {
            if project_path.exists() {
                config = self.load_config_from_path(project_path)?;
            }
        }

        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_config_from_path(&self, path: &Path) -> ClassifyResult<AudioscreenConfig> {
        let content = fs::read_to_string(path).map_err(|e| ClassifyError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        toml::from_str(&content).map_err(|e| ClassifyError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }

    /// Get global configuration path
    fn get_global_config_path() -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        Some(home.join(".config").join("audioscreen").join("config.toml"))
    }

    /// Find project configuration path by walking up the directory tree
    fn find_project_config_path() -> Option<PathBuf> {
        let current_dir = std::env::current_dir().ok()?;
        let mut path = current_dir.as_path();

        loop {
            let config_path = path.join(".audioscreen").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            path = path.parent()?;
        }
    }
}
