//! Config path utilities

use std::path::PathBuf;

/// File name of the editor configuration
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Get the default config file path
///
/// Returns: ~/.config/eqsurface/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("eqsurface")
        .join(CONFIG_FILENAME)
}
