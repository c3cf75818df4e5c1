//! Curve surface state and drag state machine
//!
//! `CurveSurface` is pure state: it owns the displayed band values, the
//! geometry of the last known canvas size and the pointer interaction state.
//! The canvas program only translates iced events into calls on it (via
//! messages), so the whole gesture logic is testable without a window.

use eqsurface_core::config::CurveConfig;
use eqsurface_core::{BandChange, BandModel, GainRange};
use iced::{Point, Size};

use super::geometry::{hit_test, CurveGeometry};
use crate::WriteOrigin;

/// Pointer interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer is over a band point, no button held
    Hovering(usize),
    /// A band point is being dragged
    Dragging(usize),
}

/// Cursor shape the view should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAffordance {
    Default,
    /// Open hand over a grabbable point
    Grab,
    /// Closed hand while dragging
    Grabbing,
}

/// Interactive curve over a set of band values
#[derive(Debug, Clone)]
pub struct CurveSurface {
    model: BandModel,
    geometry: CurveGeometry,
    point_radius: f32,
    hit_distance: f32,
    drag: DragState,
    enabled: bool,
}

impl CurveSurface {
    /// Create a flat curve with `count` bands
    ///
    /// The surface starts with a zero size and ignores pointer input until
    /// it is resized.
    pub fn new(count: usize, range: GainRange, config: &CurveConfig) -> Self {
        Self {
            model: BandModel::new(count, range),
            geometry: CurveGeometry::new(Size::ZERO, config.margin),
            point_radius: config.point_radius,
            hit_distance: config.hit_distance,
            drag: DragState::Idle,
            enabled: true,
        }
    }

    pub fn band_count(&self) -> usize {
        self.model.len()
    }

    pub fn values(&self) -> Vec<i32> {
        self.model.values()
    }

    pub fn value(&self, index: usize) -> Option<i32> {
        self.model.value(index)
    }

    pub fn gain_range(&self) -> GainRange {
        self.model.range()
    }

    pub fn geometry(&self) -> CurveGeometry {
        self.geometry
    }

    /// Geometry for an arbitrary canvas size with this surface's margin
    pub fn geometry_for(&self, size: Size) -> CurveGeometry {
        CurveGeometry::new(size, self.geometry.margin)
    }

    pub fn point_radius(&self) -> f32 {
        self.point_radius
    }

    pub fn hit_distance(&self) -> f32 {
        self.hit_distance
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    /// Band being dragged, if any
    pub fn active_band(&self) -> Option<usize> {
        match self.drag {
            DragState::Dragging(band) => Some(band),
            _ => None,
        }
    }

    /// Band under the pointer while not dragging
    pub fn hovered_band(&self) -> Option<usize> {
        match self.drag {
            DragState::Hovering(band) => Some(band),
            _ => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable pointer interaction
    ///
    /// Disabling drops any hover or drag; values are kept and still drawn.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.drag = DragState::Idle;
        }
    }

    /// Update the canvas size used for hit-testing and value mapping
    pub fn resize(&mut self, size: Size) {
        self.geometry.size = size;
    }

    /// Screen position of a band under the current geometry
    pub fn band_position(&self, index: usize) -> Point {
        let value = self.model.value(index).unwrap_or(0);
        self.geometry
            .band_position(index, self.model.len(), value, self.model.range())
    }

    pub fn band_positions(&self) -> Vec<Point> {
        (0..self.model.len()).map(|i| self.band_position(i)).collect()
    }

    pub fn y_for_value(&self, value: i32) -> f32 {
        self.geometry.y_for_value(value, self.model.range())
    }

    pub fn value_for_y(&self, y: f32) -> i32 {
        self.geometry.value_for_y(y, self.model.range())
    }

    /// Band within hit distance of `point`, nearest first, lowest index on ties
    pub fn band_at(&self, point: Point) -> Option<usize> {
        if !self.geometry.is_valid() {
            return None;
        }
        hit_test(point, self.band_positions(), self.hit_distance)
    }

    /// Cursor shape for the current state
    pub fn cursor_affordance(&self) -> CursorAffordance {
        if !self.enabled {
            return CursorAffordance::Default;
        }
        match self.drag {
            DragState::Idle => CursorAffordance::Default,
            DragState::Hovering(_) => CursorAffordance::Grab,
            DragState::Dragging(_) => CursorAffordance::Grabbing,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Pointer gestures
    // ─────────────────────────────────────────────────────────────────────

    /// Left button pressed
    ///
    /// Grabs the nearest band point within hit distance and immediately sets
    /// its value from the pointer's y, so a click without movement already
    /// edits the band.
    pub fn pointer_pressed(&mut self, point: Point) -> Option<BandChange> {
        if !self.enabled || self.is_dragging() {
            return None;
        }

        let band = self.band_at(point)?;
        self.drag = DragState::Dragging(band);
        log::debug!("curve: grabbed band {}", band);

        let value = self.value_for_y(point.y);
        self.write(band, value, WriteOrigin::User)
    }

    /// Pointer moved
    ///
    /// While dragging only the vertical position matters. Otherwise the hover
    /// state is refreshed and no value is touched.
    pub fn pointer_moved(&mut self, point: Point) -> Option<BandChange> {
        if let DragState::Dragging(band) = self.drag {
            let value = self.value_for_y(point.y);
            return self.write(band, value, WriteOrigin::User);
        }

        self.update_hover(point);
        None
    }

    /// Left button released
    pub fn pointer_released(&mut self, point: Point) {
        if let DragState::Dragging(band) = self.drag {
            log::debug!("curve: released band {}", band);
            self.drag = DragState::Idle;
            self.update_hover(point);
        }
    }

    /// Pointer left the canvas
    pub fn pointer_left(&mut self) {
        if !self.is_dragging() {
            self.drag = DragState::Idle;
        }
    }

    fn update_hover(&mut self, point: Point) {
        self.drag = match self.band_at(point) {
            Some(band) if self.enabled => DragState::Hovering(band),
            _ => DragState::Idle,
        };
    }

    // ─────────────────────────────────────────────────────────────────────
    // Synchronized writes (never notify)
    // ─────────────────────────────────────────────────────────────────────

    /// Mirror a single band value
    pub fn set_band_value(&mut self, index: usize, value: i32) {
        self.write(index, value, WriteOrigin::Sync);
    }

    /// Mirror all band values (zero-padded / truncated)
    pub fn set_band_values(&mut self, values: &[i32]) {
        self.model.set_all(values);
    }

    /// Mirror the gain range, re-clamping displayed values
    pub fn set_gain_range(&mut self, range: GainRange) {
        self.model.set_range(range.min(), range.max());
    }

    fn write(&mut self, index: usize, value: i32, origin: WriteOrigin) -> Option<BandChange> {
        let change = self.model.set_value(index, value)?;
        match origin {
            WriteOrigin::User => Some(change),
            WriteOrigin::Sync => None,
        }
    }
}
