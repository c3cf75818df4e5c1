//! Messages for the equalizer editor

use eqsurface_core::{BandChange, PresetMatch};

use crate::curve::CurveEvent;
use crate::sliders::SliderId;

/// Messages handled by [`EqualizerEditor::update`](super::EqualizerEditor::update)
#[derive(Debug, Clone)]
pub enum EqualizerMessage {
    /// A slider was moved by the user
    SliderChanged { slider: SliderId, value: i32 },

    /// Pointer event from the curve canvas
    Curve(CurveEvent),

    /// Apply a preset by name
    SelectPreset(String),

    /// Set every band to 0
    Reset,

    /// Enable or disable all interactive surfaces
    SetBypassed(bool),
}

/// Outcomes reported back to the owner of the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// A gesture changed a band value (emitted once per actual change)
    BandValueChanged(BandChange),

    /// Preset detection ran after a settled change
    PresetDetected(PresetMatch),

    /// Bypass state toggled
    BypassChanged(bool),
}
