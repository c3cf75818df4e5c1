//! Editor configuration sections

use serde::{Deserialize, Serialize};

use crate::band::{GainRange, DEFAULT_BAND_COUNT};
use crate::error::{ConfigError, ConfigResult};
use crate::preset::FLAT_PRESET;

/// Default band labels (octave centre frequencies)
pub const DEFAULT_BAND_LABELS: [&str; DEFAULT_BAND_COUNT] = [
    "31 Hz", "62 Hz", "125 Hz", "250 Hz", "500 Hz", "1 kHz", "2 kHz", "4 kHz", "8 kHz", "16 kHz",
];

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Band layout
    pub bands: BandsConfig,
    /// Shared gain range for every band
    pub gain: GainConfig,
    /// Curve view geometry
    pub curve: CurveConfig,
    /// Preset applied at start-up
    pub initial_preset: String,
    /// Start with all controls bypassed
    pub start_bypassed: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            bands: BandsConfig::default(),
            gain: GainConfig::default(),
            curve: CurveConfig::default(),
            initial_preset: FLAT_PRESET.to_string(),
            start_bypassed: false,
        }
    }
}

impl EditorConfig {
    /// Check the configuration for values the editor cannot work with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.bands.count == 0 {
            return Err(ConfigError::NoBands);
        }
        if self.bands.labels.len() > self.bands.count {
            return Err(ConfigError::TooManyLabels {
                labels: self.bands.labels.len(),
                bands: self.bands.count,
            });
        }
        if self.gain.max <= self.gain.min {
            return Err(ConfigError::InvalidGainRange {
                min: self.gain.min,
                max: self.gain.max,
            });
        }
        for (name, value) in [
            ("margin", self.curve.margin),
            ("point_radius", self.curve.point_radius),
            ("hit_distance", self.curve.hit_distance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidCurveSetting { name, value });
            }
        }
        Ok(())
    }

    /// Label for a band, falling back to "Band N" when none is configured
    pub fn band_label(&self, index: usize) -> String {
        self.bands
            .labels
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("Band {}", index + 1))
    }
}

/// Band layout section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandsConfig {
    /// Number of bands (fixed for the editor's lifetime)
    pub count: usize,
    /// Display label per band
    pub labels: Vec<String>,
}

impl Default for BandsConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_BAND_COUNT,
            labels: DEFAULT_BAND_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Gain range section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GainConfig {
    pub min: i32,
    pub max: i32,
}

impl Default for GainConfig {
    fn default() -> Self {
        let range = GainRange::default();
        Self {
            min: range.min(),
            max: range.max(),
        }
    }
}

impl GainConfig {
    pub fn range(&self) -> GainRange {
        GainRange::new(self.min, self.max)
    }
}

/// Curve view geometry section (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Inset between the widget bounds and the curve rect on every side
    pub margin: f32,
    /// Radius of the drawn band points
    pub point_radius: f32,
    /// Maximum pointer distance for hover and grab
    pub hit_distance: f32,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            margin: 16.0,
            point_radius: 6.0,
            hit_distance: 12.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.bands.count, 10);
        assert_eq!(config.bands.labels.len(), 10);
        assert_eq!(config.gain.range(), GainRange::new(-12, 12));
        assert_eq!(config.curve.hit_distance, 12.0);
        assert_eq!(config.initial_preset, "Flat");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: EditorConfig = serde_yaml::from_str("gain:\n  min: -6\n").unwrap();
        assert_eq!(config.gain.min, -6);
        assert_eq!(config.gain.max, 12);
        assert_eq!(config.bands.count, 10);
    }

    #[test]
    fn test_validate_rejects_zero_bands() {
        let mut config = EditorConfig::default();
        config.bands.count = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoBands));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut config = EditorConfig::default();
        config.gain.min = 5;
        config.gain.max = 5;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidGainRange { min: 5, max: 5 })
        );
    }

    #[test]
    fn test_validate_rejects_bad_curve_setting() {
        let mut config = EditorConfig::default();
        config.curve.hit_distance = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCurveSetting { name: "hit_distance", .. })
        ));
    }

    #[test]
    fn test_band_label_fallback() {
        let mut config = EditorConfig::default();
        config.bands.count = 12;
        assert_eq!(config.band_label(0), "31 Hz");
        assert_eq!(config.band_label(11), "Band 12");
    }
}
