//! Coordinate mapping between band values and canvas pixels
//!
//! The curve rect is the canvas bounds inset by a fixed margin on all four
//! sides. Bands are spread evenly across its width (band 0 on the left edge,
//! band N-1 on the right edge); gains map linearly onto its height with the
//! maximum at the top.

use eqsurface_core::GainRange;
use iced::{Point, Rectangle, Size};

/// Geometry of the curve view for a given canvas size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveGeometry {
    /// Canvas size (local coordinates, origin at the top-left corner)
    pub size: Size,
    /// Inset on every side
    pub margin: f32,
}

impl CurveGeometry {
    pub fn new(size: Size, margin: f32) -> Self {
        Self { size, margin }
    }

    /// Drawable area after applying the margin
    pub fn curve_rect(&self) -> Rectangle {
        Rectangle {
            x: self.margin,
            y: self.margin,
            width: self.size.width - 2.0 * self.margin,
            height: self.size.height - 2.0 * self.margin,
        }
    }

    /// Whether the curve rect has a positive area
    pub fn is_valid(&self) -> bool {
        let rect = self.curve_rect();
        rect.width > 0.0 && rect.height > 0.0
    }

    fn center(&self) -> Point {
        self.curve_rect().center()
    }

    /// Screen position of a band
    ///
    /// A single band (or a degenerate rect) sits at the rect's center.
    pub fn band_position(&self, index: usize, count: usize, value: i32, range: GainRange) -> Point {
        if !self.is_valid() || count <= 1 {
            return self.center();
        }

        let rect = self.curve_rect();
        let step = rect.width / (count - 1) as f32;
        Point::new(rect.x + step * index as f32, self.y_for_value(value, range))
    }

    /// Map a gain to a y coordinate (higher gain, smaller y)
    pub fn y_for_value(&self, value: i32, range: GainRange) -> f32 {
        if !self.is_valid() {
            return self.center().y;
        }

        let span = range.span();
        if span == 0 {
            return self.center().y;
        }

        let rect = self.curve_rect();
        let offset = i64::from(range.clamp(value)) - i64::from(range.min());
        let ratio = offset as f64 / span as f64;
        let bottom = f64::from(rect.y + rect.height);
        (bottom - ratio * f64::from(rect.height)) as f32
    }

    /// Map a y coordinate back to a gain
    ///
    /// `y` is clamped into the rect first; the result is rounded to the
    /// nearest integer, halves away from zero. Computed in `f64` so gains
    /// far from zero keep integer precision.
    pub fn value_for_y(&self, y: f32, range: GainRange) -> i32 {
        if !self.is_valid() {
            return range.clamp(0);
        }

        let span = range.span();
        if span == 0 {
            return range.min();
        }

        let rect = self.curve_rect();
        let bottom = rect.y + rect.height;
        let clamped_y = y.clamp(rect.y, bottom);
        let value = f64::from(range.min())
            + f64::from(bottom - clamped_y) * span as f64 / f64::from(rect.height);

        let rounded = value
            .round()
            .clamp(f64::from(range.min()), f64::from(range.max()));
        rounded as i32
    }
}

/// Nearest position within `threshold` of `point`
///
/// Ties keep the first index seen (strict "closer than best" comparison).
pub fn hit_test<I>(point: Point, positions: I, threshold: f32) -> Option<usize>
where
    I: IntoIterator<Item = Point>,
{
    let mut best: Option<(usize, f32)> = None;

    for (index, position) in positions.into_iter().enumerate() {
        let distance = point.distance(position);
        if distance > threshold {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }

    best.map(|(index, _)| index)
}
