use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// nixglhost configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NixGlHostConfig {
    /// Driver directory used when neither `-d` nor the environment names one
    #[serde(default)]
    pub driver_directory: Option<PathBuf>,
    /// Additional directories placed after the driver directory
    #[serde(default)]
    pub extra_library_dirs: Vec<PathBuf>,
    /// Variable the dynamic linker reads its search path from
    #[serde(default = "default_search_path_variable")]
    pub search_path_variable: String,
    /// Default log filter
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Default value functions
fn default_search_path_variable() -> String {
    "LD_LIBRARY_PATH".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for NixGlHostConfig {
    fn default() -> Self {
        Self {
            driver_directory: None,
            extra_library_dirs: Vec::new(),
            search_path_variable: default_search_path_variable(),
            log_level: default_log_level(),
        }
    }
}
