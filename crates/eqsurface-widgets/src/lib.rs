//! iced widgets for the eqsurface graphic equalizer
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State structs**: Pure data and state machines (`CurveSurface`, `SliderBank`,
//!   `PresetIndicator`, `EqualizerEditor`) that are unit-testable without a window
//! - **View functions**: Take state + callbacks, return `Element<Message>`
//! - **Canvas Programs**: Translate pointer events into messages and draw the curve
//!
//! ## Synchronization
//!
//! The curve and the sliders are two views over the same band gains. The
//! [`EqualizerEditor`] owns the canonical [`BandModel`](eqsurface_core::BandModel)
//! and mirrors every user edit into the other surface with
//! [`WriteOrigin::Sync`], which never produces a change notification. Only
//! [`WriteOrigin::User`] writes are reported, so a mirrored write can never
//! feed back into the editor as a new edit.

pub mod curve;
pub mod editor;
pub mod preset_indicator;
pub mod sliders;
pub mod theme;

pub use curve::{
    curve_view, CurveEvent, CurveGeometry, CurveSurface, CursorAffordance, DragState,
    CURVE_HEIGHT,
};
pub use editor::{equalizer_editor, EditorEvent, EqualizerEditor, EqualizerMessage};
pub use preset_indicator::{preset_selector, PresetIndicator};
pub use sliders::{slider_bank, BandSlider, SliderBank, SliderId};

/// Where a write into a surface came from
///
/// Only user writes are reported as changes; synchronized writes update the
/// surface silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOrigin {
    /// A gesture on the surface itself
    User,
    /// A mirror of a change that originated elsewhere
    Sync,
}
