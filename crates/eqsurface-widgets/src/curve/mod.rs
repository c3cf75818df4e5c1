//! Interactive equalizer curve
//!
//! Band gains drawn as points joined by a poly-line. Any point can be grabbed
//! and dragged vertically to change its band's gain.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ ┌──────────────────────────────────────────┐ │ <- margin on every side
//! │ │- - - - - - - - - - - - - - - - - - - - - │ │ <- max gain
//! │ │          ●───●                           │ │
//! │ │- - -●───/─ - -\- - - - - - - - -●- - - - │ │ <- 0
//! │ │    /           ●───●───●───●───/ ●       │ │
//! │ │- -●- - - - - - - - - - - - - - - - - - - │ │ <- min gain
//! │ └──────────────────────────────────────────┘ │
//! └──────────────────────────────────────────────┘
//!   band 0                             band N-1
//! ```
//!
//! ## Interaction
//!
//! - `Idle` → press within hit distance of a point → `Dragging(band)`
//! - `Dragging(band)` → move → value follows the pointer's y
//! - `Dragging(band)` → release → `Hovering(band)` or `Idle`
//! - `Idle`/`Hovering` → move → `Hovering(band)` or `Idle`
//! - leave while not dragging → `Idle`

mod canvas;
pub mod geometry;
mod state;
mod view;

pub use canvas::{CurveCanvas, CurveEvent};
pub use geometry::{hit_test, CurveGeometry};
pub use state::{CurveSurface, CursorAffordance, DragState};
pub use view::curve_view;

/// Height of the curve canvas
pub const CURVE_HEIGHT: f32 = 240.0;
