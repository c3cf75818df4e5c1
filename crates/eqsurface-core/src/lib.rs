//! Core model for the eqsurface graphic equalizer
//!
//! This crate holds everything that has no GUI dependency:
//!
//! - **Band model**: the canonical, always-clamped band gains and their shared range
//! - **Presets**: the preset catalog interface, the built-in table and exact-match detection
//! - **Configuration**: YAML-backed editor settings shared with the application
//!
//! Gain values are abstract integers. Nothing here performs signal processing.

pub mod band;
pub mod config;
pub mod error;
pub mod preset;

pub use band::{format_gain_label, BandChange, BandModel, GainRange, DEFAULT_BAND_COUNT};
pub use error::{ConfigError, ConfigResult};
pub use preset::{
    detect_preset, find_preset_name, match_preset_name, BuiltinPresets, Preset, PresetCatalog,
    PresetMatch, FLAT_PRESET,
};
