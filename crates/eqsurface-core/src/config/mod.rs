//! Configuration for eqsurface
//!
//! Editor settings are stored as YAML in the user's config directory.
//! Default location: ~/.config/eqsurface/config.yaml
//!
//! # Usage
//!
//! ```ignore
//! use eqsurface_core::config::{default_config_path, load_editor_config};
//!
//! // Always usable: missing or invalid files yield the defaults
//! let config = load_editor_config(&default_config_path());
//! ```

mod editor;
mod io;
mod paths;

pub use editor::{BandsConfig, CurveConfig, EditorConfig, GainConfig, DEFAULT_BAND_LABELS};
pub use io::{load_editor_config, read_config, save_editor_config, write_config};
pub use paths::{default_config_path, CONFIG_FILENAME};
