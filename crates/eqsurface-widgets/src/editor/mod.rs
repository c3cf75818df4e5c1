//! Synchronized equalizer editor
//!
//! Combines the curve, the slider bank and the preset indicator over one
//! canonical band model.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Curve ●───●───●───●───●───●───●───●───●───●     (drag points)          │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  31 Hz  62 Hz  125 Hz  250 Hz  500 Hz  1 kHz  2 kHz  4 kHz  8 kHz 16 kHz │
//! │   ┃      ┃      ┃       ┃       ┃       ┃      ┃      ┃      ┃     ┃   │
//! │  0 dB  +3 dB  +5 dB   +4 dB   +1 dB   -1 dB  -2 dB  -1 dB  +2 dB +4 dB │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Edit flow:
//!
//! ```text
//! slider gesture ─▶ SliderBank (User) ─▶ BandModel ─▶ CurveSurface (Sync)
//! curve gesture  ─▶ CurveSurface (User) ─▶ BandModel ─▶ SliderBank (Sync)
//!                                              └─▶ preset detection ─▶ PresetIndicator
//! ```

mod message;
mod state;
mod view;

pub use message::{EditorEvent, EqualizerMessage};
pub use state::EqualizerEditor;
pub use view::equalizer_editor;
