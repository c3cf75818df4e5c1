//! Equalizer editor state and synchronization
//!
//! The editor is the only place where one surface's change is written into
//! the other. User gestures enter through [`EqualizerEditor::update`]; the
//! originating surface reports a [`BandChange`] only for its own
//! [`WriteOrigin::User`] writes, the canonical model is updated, and the
//! change is mirrored into the other surface with [`WriteOrigin::Sync`] so it
//! can never come back as a new edit.

use eqsurface_core::config::EditorConfig;
use eqsurface_core::{
    detect_preset, find_preset_name, BandChange, BandModel, BuiltinPresets, GainRange,
    PresetCatalog, PresetMatch,
};

use super::message::{EditorEvent, EqualizerMessage};
use crate::curve::{CurveEvent, CurveSurface};
use crate::preset_indicator::PresetIndicator;
use crate::sliders::SliderBank;
use crate::WriteOrigin;

/// Surface a user edit came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Surface {
    Curve,
    Sliders,
}

/// Curve, sliders and preset indicator kept consistent over one band model
#[derive(Debug, Clone)]
pub struct EqualizerEditor<C: PresetCatalog = BuiltinPresets> {
    model: BandModel,
    curve: CurveSurface,
    sliders: SliderBank,
    presets: PresetIndicator,
    catalog: C,
    bypassed: bool,
}

impl<C: PresetCatalog> EqualizerEditor<C> {
    /// Create a flat editor laid out from `config`
    pub fn new(catalog: C, config: &EditorConfig) -> Self {
        let count = config.bands.count;
        let range = config.gain.range();
        let labels = (0..count).map(|i| config.band_label(i)).collect();

        let mut editor = Self {
            model: BandModel::new(count, range),
            curve: CurveSurface::new(count, range, &config.curve),
            sliders: SliderBank::new(labels, range),
            presets: PresetIndicator::new(catalog.preset_names()),
            catalog,
            bypassed: false,
        };
        editor.set_bypassed(config.start_bypassed);
        editor.detect();
        editor
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn band_count(&self) -> usize {
        self.model.len()
    }

    /// Current values of all bands
    pub fn band_values(&self) -> Vec<i32> {
        self.model.values()
    }

    pub fn gain_range(&self) -> GainRange {
        self.model.range()
    }

    pub fn is_bypassed(&self) -> bool {
        self.bypassed
    }

    /// Preset the current values match
    pub fn active_preset(&self) -> &PresetMatch {
        self.presets.current()
    }

    pub fn preset_names(&self) -> &[String] {
        self.presets.names()
    }

    pub fn curve(&self) -> &CurveSurface {
        &self.curve
    }

    pub fn sliders(&self) -> &SliderBank {
        &self.sliders
    }

    pub fn presets(&self) -> &PresetIndicator {
        &self.presets
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    // ─────────────────────────────────────────────────────────────────────
    // Message handling
    // ─────────────────────────────────────────────────────────────────────

    /// Handle a message and report what changed
    pub fn update(&mut self, message: EqualizerMessage) -> Vec<EditorEvent> {
        match message {
            EqualizerMessage::SliderChanged { slider, value } => {
                match self.sliders.user_changed(slider, value) {
                    Some(change) => self.propagate(change, Surface::Sliders),
                    None => Vec::new(),
                }
            }
            EqualizerMessage::Curve(event) => match self.handle_curve_event(event) {
                Some(change) => self.propagate(change, Surface::Curve),
                None => Vec::new(),
            },
            EqualizerMessage::SelectPreset(name) => {
                vec![EditorEvent::PresetDetected(self.apply_preset(&name))]
            }
            EqualizerMessage::Reset => vec![EditorEvent::PresetDetected(self.reset_bands())],
            EqualizerMessage::SetBypassed(bypassed) => {
                if self.set_bypassed(bypassed) {
                    vec![EditorEvent::BypassChanged(bypassed)]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn handle_curve_event(&mut self, event: CurveEvent) -> Option<BandChange> {
        match event {
            CurveEvent::Pressed { position, size } => {
                self.curve.resize(size);
                self.curve.pointer_pressed(position)
            }
            CurveEvent::Moved { position, size } => {
                self.curve.resize(size);
                self.curve.pointer_moved(position)
            }
            CurveEvent::Released { position, size } => {
                self.curve.resize(size);
                self.curve.pointer_released(position);
                None
            }
            CurveEvent::Left => {
                self.curve.pointer_left();
                None
            }
        }
    }

    /// Mirror a user edit from `source` into the model and the other surface
    fn propagate(&mut self, change: BandChange, source: Surface) -> Vec<EditorEvent> {
        self.model.set_value(change.index, change.value);

        match source {
            Surface::Sliders => self.curve.set_band_value(change.index, change.value),
            Surface::Curve => {
                self.sliders
                    .set_value(change.index, change.value, WriteOrigin::Sync);
            }
        }

        log::debug!(
            "editor: band {} = {} (from {:?})",
            change.index,
            change.value,
            source
        );

        vec![
            EditorEvent::BandValueChanged(change),
            EditorEvent::PresetDetected(self.detect()),
        ]
    }

    /// Match the live values against the catalog and show the result
    fn detect(&mut self) -> PresetMatch {
        let detected = detect_preset(&self.catalog, self.model.as_slice());
        self.presets.show(&detected);
        detected
    }

    fn mirror_model(&mut self) {
        let values = self.model.values();
        self.curve.set_band_values(&values);
        self.sliders.set_values(&values);
    }

    fn mirror_range(&mut self) -> PresetMatch {
        let range = self.model.range();
        self.curve.set_gain_range(range);
        self.sliders.set_range(range);
        self.mirror_model();
        self.detect()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Programmatic API
    // ─────────────────────────────────────────────────────────────────────

    /// Overwrite all bands (zero-padded / truncated, clamped)
    ///
    /// Updates every surface and returns the detected preset. No
    /// `BandValueChanged` events are produced for programmatic writes.
    pub fn set_band_values(&mut self, values: &[i32]) -> PresetMatch {
        self.model.set_all(values);
        self.mirror_model();
        self.detect()
    }

    /// Set every band to 0
    pub fn reset_bands(&mut self) -> PresetMatch {
        log::info!("editor: resetting all bands");
        let flat = vec![0; self.model.len()];
        self.set_band_values(&flat)
    }

    /// Apply a catalog preset by name (case-insensitive)
    pub fn apply_preset(&mut self, name: &str) -> PresetMatch {
        match find_preset_name(&self.catalog, name) {
            Some(found) => log::info!("editor: applying preset '{}'", found),
            None => log::warn!("editor: unknown preset '{}', using the first entry", name),
        }
        let values = self.catalog.values_for_preset(name);
        self.set_band_values(&values)
    }

    /// Set both gain bounds (`max` is kept if they conflict)
    pub fn set_gain_range(&mut self, min: i32, max: i32) -> PresetMatch {
        self.model.set_range(min, max);
        self.mirror_range()
    }

    /// Set the minimum gain (`max` is pushed up if needed)
    pub fn set_minimum_gain(&mut self, min: i32) -> PresetMatch {
        self.model.set_minimum(min);
        self.mirror_range()
    }

    /// Set the maximum gain (`min` is pushed down if needed)
    pub fn set_maximum_gain(&mut self, max: i32) -> PresetMatch {
        self.model.set_maximum(max);
        self.mirror_range()
    }

    /// Enable or disable every interactive surface
    ///
    /// Stored values are untouched. Returns whether the state changed.
    pub fn set_bypassed(&mut self, bypassed: bool) -> bool {
        if self.bypassed == bypassed {
            return false;
        }

        self.bypassed = bypassed;
        self.curve.set_enabled(!bypassed);
        self.sliders.set_enabled(!bypassed);
        log::info!("editor: bypass {}", if bypassed { "on" } else { "off" });
        true
    }
}
