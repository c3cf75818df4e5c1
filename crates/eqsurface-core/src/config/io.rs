//! Reading and writing the editor configuration
//!
//! [`load_editor_config`] never fails: a missing file is the normal first-run
//! case and anything unusable (unreadable, malformed, or rejected by
//! [`EditorConfig::validate`]) is logged and replaced by the defaults.
//! [`save_editor_config`] refuses to write a configuration that would be
//! rejected on the next start.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::EditorConfig;

/// Parse a YAML file, `Ok(None)` if it does not exist
pub fn read_config<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("Cannot read {}", path.display()));
        }
    };

    serde_yaml::from_str(&contents)
        .map(Some)
        .with_context(|| format!("Cannot parse {}", path.display()))
}

/// Serialize to YAML, creating parent directories as needed
pub fn write_config<T: Serialize>(config: &T, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(config).context("Cannot serialize config")?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create {}", dir.display()))?;
    }
    std::fs::write(path, yaml).with_context(|| format!("Cannot write {}", path.display()))
}

/// Load and validate the editor configuration, falling back to defaults
pub fn load_editor_config(path: &Path) -> EditorConfig {
    let config = match read_config::<EditorConfig>(path) {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::info!("No config at {}, using defaults", path.display());
            return EditorConfig::default();
        }
        Err(e) => {
            log::warn!("{:#}; using defaults", e);
            return EditorConfig::default();
        }
    };

    if let Err(e) = config.validate() {
        log::warn!("Ignoring {}: {}; using defaults", path.display(), e);
        return EditorConfig::default();
    }

    log::info!("Loaded config from {}", path.display());
    config
}

/// Validate and write the editor configuration
pub fn save_editor_config(config: &EditorConfig, path: &Path) -> Result<()> {
    config.validate().context("Refusing to save an invalid config")?;
    write_config(config, path)?;
    log::debug!("Saved config to {}", path.display());
    Ok(())
}
