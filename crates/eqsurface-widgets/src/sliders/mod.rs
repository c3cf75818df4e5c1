//! Linear band sliders
//!
//! One vertical slider per band, each with a band label above and a value
//! label (`+3 dB`) below. Sliders are identified by a [`SliderId`] and mapped
//! to bands through a fixed table built once at construction.

mod view;

pub use view::slider_bank;

use eqsurface_core::{format_gain_label, BandChange, GainRange};

use crate::WriteOrigin;

/// Identity of a slider control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliderId(pub usize);

/// One slider and the band it controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandSlider {
    pub id: SliderId,
    pub band_index: usize,
    /// Band name shown above the slider
    pub label: String,
    pub value: i32,
    /// Formatted value shown below the slider
    pub value_label: String,
}

/// The full row of band sliders
#[derive(Debug, Clone)]
pub struct SliderBank {
    sliders: Vec<BandSlider>,
    /// `band_for_slider[slider.0]` is the band a slider controls
    band_for_slider: Vec<usize>,
    range: GainRange,
    enabled: bool,
}

impl SliderBank {
    /// Create one slider per label, slider `i` controlling band `i`
    pub fn new(labels: Vec<String>, range: GainRange) -> Self {
        let value = range.clamp(0);
        let sliders: Vec<BandSlider> = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| BandSlider {
                id: SliderId(i),
                band_index: i,
                label,
                value,
                value_label: format_gain_label(value),
            })
            .collect();
        let band_for_slider = sliders.iter().map(|s| s.band_index).collect();

        Self {
            sliders,
            band_for_slider,
            range,
            enabled: true,
        }
    }

    pub fn sliders(&self) -> &[BandSlider] {
        &self.sliders
    }

    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    pub fn range(&self) -> GainRange {
        self.range
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Band controlled by a slider
    pub fn band_of(&self, slider: SliderId) -> Option<usize> {
        self.band_for_slider.get(slider.0).copied()
    }

    /// Slider controlling a band
    pub fn slider_for_band(&self, band: usize) -> Option<&BandSlider> {
        self.sliders.iter().find(|s| s.band_index == band)
    }

    pub fn values(&self) -> Vec<i32> {
        let mut values = vec![0; self.sliders.len()];
        for slider in &self.sliders {
            if let Some(slot) = values.get_mut(slider.band_index) {
                *slot = slider.value;
            }
        }
        values
    }

    /// The user moved a slider
    ///
    /// Ignored while disabled, for unknown sliders, and when the clamped
    /// value is unchanged.
    pub fn user_changed(&mut self, slider: SliderId, value: i32) -> Option<BandChange> {
        if !self.enabled {
            return None;
        }
        let band = self.band_of(slider)?;
        self.set_value(band, value, WriteOrigin::User)
    }

    /// Write a band's slider and value label
    ///
    /// Only [`WriteOrigin::User`] writes report a change.
    pub fn set_value(&mut self, band: usize, value: i32, origin: WriteOrigin) -> Option<BandChange> {
        let clamped = self.range.clamp(value);
        let slider = self.sliders.iter_mut().find(|s| s.band_index == band)?;
        if slider.value == clamped {
            return None;
        }

        slider.value = clamped;
        slider.value_label = format_gain_label(clamped);

        match origin {
            WriteOrigin::User => Some(BandChange {
                index: band,
                value: clamped,
            }),
            WriteOrigin::Sync => None,
        }
    }

    /// Mirror all values (missing entries are zero)
    pub fn set_values(&mut self, values: &[i32]) {
        for band in 0..self.sliders.len() {
            let value = values.get(band).copied().unwrap_or(0);
            self.set_value(band, value, WriteOrigin::Sync);
        }
    }

    /// Change the slider range, re-clamping every slider silently
    pub fn set_range(&mut self, range: GainRange) {
        self.range = range;
        let values = self.values();
        self.set_values(&values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> SliderBank {
        let labels = (0..10).map(|i| format!("B{}", i)).collect();
        SliderBank::new(labels, GainRange::default())
    }

    #[test]
    fn test_mapping_table() {
        let bank = bank();
        assert_eq!(bank.len(), 10);
        assert_eq!(bank.band_of(SliderId(7)), Some(7));
        assert_eq!(bank.band_of(SliderId(10)), None);
        assert_eq!(bank.slider_for_band(2).map(|s| s.id), Some(SliderId(2)));
    }

    #[test]
    fn test_user_change_reports_and_updates_label() {
        let mut bank = bank();
        let change = bank.user_changed(SliderId(1), 3);
        assert_eq!(change, Some(BandChange { index: 1, value: 3 }));
        assert_eq!(bank.sliders()[1].value_label, "+3 dB");

        assert_eq!(bank.user_changed(SliderId(1), 3), None);
    }

    #[test]
    fn test_user_change_clamps() {
        let mut bank = bank();
        let change = bank.user_changed(SliderId(0), -30);
        assert_eq!(change, Some(BandChange { index: 0, value: -12 }));
        assert_eq!(bank.sliders()[0].value_label, "-12 dB");
    }

    #[test]
    fn test_disabled_bank_ignores_user() {
        let mut bank = bank();
        bank.set_enabled(false);
        assert_eq!(bank.user_changed(SliderId(0), 5), None);
        assert_eq!(bank.values(), vec![0; 10]);

        // Mirrors still land while disabled
        bank.set_value(0, 5, WriteOrigin::Sync);
        assert_eq!(bank.values()[0], 5);
    }

    #[test]
    fn test_sync_write_is_silent() {
        let mut bank = bank();
        assert_eq!(bank.set_value(4, 6, WriteOrigin::Sync), None);
        assert_eq!(bank.sliders()[4].value, 6);
        assert_eq!(bank.sliders()[4].value_label, "+6 dB");
    }

    #[test]
    fn test_set_range_reclamps() {
        let mut bank = bank();
        bank.set_values(&[10, -10]);
        bank.set_range(GainRange::new(-3, 3));
        assert_eq!(&bank.values()[..3], &[3, -3, 0]);
        assert_eq!(bank.sliders()[1].value_label, "-3 dB");
    }
}
