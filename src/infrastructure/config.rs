use crate::domain::{config::NixGlHostConfig, error::{NixGlHostError, NixGlHostResult}};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV: &str = "NIXGLHOST_CONFIG";

/// Configuration manager
pub struct ConfigManager {
    config_path: Option<PathBuf>,
    /// The path was requested explicitly and must exist
    explicit: bool,
}

impl ConfigManager {
    /// Create new configuration manager
    pub fn new() -> NixGlHostResult<Self> {
        match std::env::var_os(CONFIG_ENV).filter(|value| !value.is_empty()) {
            Some(path) => Ok(Self::with_path(PathBuf::from(path))),
            None => Ok(Self {
                config_path: Self::get_default_config_path(),
                explicit: false,
            }),
        }
    }

    /// Create a manager for a specific configuration file
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: Some(path),
            explicit: true,
        }
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load_config(&self) -> NixGlHostResult<NixGlHostConfig> {
        let Some(path) = &self.config_path else {
            return Ok(NixGlHostConfig::default());
        };

        if !self.explicit && !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(NixGlHostConfig::default());
        }

        self.load_config_from_path(path)
    }

    /// Load configuration from specific path
    pub fn load_config_from_path(&self, path: &Path) -> NixGlHostResult<NixGlHostConfig> {
        let content = fs::read_to_string(path).map_err(|e| NixGlHostError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        toml::from_str(&content).map_err(|e| NixGlHostError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }

    /// Get the configuration path in use (if any)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Default configuration path under the user's config directory
    fn get_default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nixglhost").join("config.toml"))
    }
}
