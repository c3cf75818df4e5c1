//! Band model
//!
//! The canonical ordered collection of band gains. Every write is clamped into
//! the shared [`GainRange`]; nothing is ever rejected. Writes that leave a value
//! unchanged are silent so downstream surfaces are not re-notified.

/// Number of bands in the reference layout
pub const DEFAULT_BAND_COUNT: usize = 10;

/// Inclusive gain range shared by all bands
///
/// Invariant: `max > min`. The fields are private so every range goes through
/// a constructor that restores the invariant. The constructors move the bound
/// the caller did not name; when that bound would leave `i32`, the named bound
/// gives way by one instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GainRange {
    min: i32,
    max: i32,
}

impl Default for GainRange {
    fn default() -> Self {
        Self { min: -12, max: 12 }
    }
}

impl GainRange {
    /// Build a range, keeping `max` and pushing `min` below it on conflict
    pub const fn new(min: i32, max: i32) -> Self {
        if max > min {
            Self { min, max }
        } else if max == i32::MIN {
            Self {
                min: i32::MIN,
                max: i32::MIN + 1,
            }
        } else {
            Self { min: max - 1, max }
        }
    }

    /// Build a range, keeping `min` and pushing `max` above it on conflict
    pub const fn with_fixed_min(min: i32, max: i32) -> Self {
        if max > min {
            Self { min, max }
        } else if min == i32::MAX {
            Self {
                min: i32::MAX - 1,
                max: i32::MAX,
            }
        } else {
            Self { min, max: min + 1 }
        }
    }

    pub const fn min(&self) -> i32 {
        self.min
    }

    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Clamp a value into the range
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    /// Whether the value lies inside the range
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Width of the range (`max - min`), always positive
    ///
    /// Widened so the full `i32` range does not overflow.
    pub fn span(&self) -> i64 {
        i64::from(self.max) - i64::from(self.min)
    }
}

/// Change notification produced by a write that actually altered a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandChange {
    pub index: usize,
    pub value: i32,
}

/// Ordered band gains sharing one [`GainRange`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandModel {
    values: Vec<i32>,
    range: GainRange,
}

impl Default for BandModel {
    fn default() -> Self {
        Self::new(DEFAULT_BAND_COUNT, GainRange::default())
    }
}

impl BandModel {
    /// Create a model with `count` bands, all at 0 (clamped into `range`)
    pub fn new(count: usize, range: GainRange) -> Self {
        Self {
            values: vec![range.clamp(0); count],
            range,
        }
    }

    /// Number of bands
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Current gain range
    pub fn range(&self) -> GainRange {
        self.range
    }

    /// Value of a single band, `None` if the index is out of range
    pub fn value(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied()
    }

    /// Copy of all band values
    pub fn values(&self) -> Vec<i32> {
        self.values.clone()
    }

    /// Borrow all band values
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Set both bounds at once
    ///
    /// On `max <= min` the maximum is kept and the minimum becomes `max - 1`.
    /// Returns the bands whose value moved because of re-clamping.
    pub fn set_range(&mut self, min: i32, max: i32) -> Vec<BandChange> {
        self.apply_range(GainRange::new(min, max))
    }

    /// Set the minimum, pushing the maximum to `min + 1` if needed
    pub fn set_minimum(&mut self, min: i32) -> Vec<BandChange> {
        self.apply_range(GainRange::with_fixed_min(min, self.range.max))
    }

    /// Set the maximum, pushing the minimum to `max - 1` if needed
    pub fn set_maximum(&mut self, max: i32) -> Vec<BandChange> {
        self.apply_range(GainRange::new(self.range.min, max))
    }

    fn apply_range(&mut self, range: GainRange) -> Vec<BandChange> {
        if range == self.range {
            return Vec::new();
        }

        self.range = range;

        let mut changes = Vec::new();
        for (index, value) in self.values.iter_mut().enumerate() {
            let clamped = range.clamp(*value);
            if clamped != *value {
                *value = clamped;
                changes.push(BandChange { index, value: clamped });
            }
        }
        changes
    }

    /// Write a single band
    ///
    /// Out-of-range indices are ignored. The value is clamped; `None` is
    /// returned when the clamped value equals the stored one.
    pub fn set_value(&mut self, index: usize, value: i32) -> Option<BandChange> {
        let clamped = self.range.clamp(value);
        let slot = self.values.get_mut(index)?;
        if *slot == clamped {
            return None;
        }
        *slot = clamped;
        Some(BandChange { index, value: clamped })
    }

    /// Overwrite every band
    ///
    /// Shorter input is zero-padded, longer input is truncated. Returns the
    /// bands that actually changed.
    pub fn set_all(&mut self, values: &[i32]) -> Vec<BandChange> {
        (0..self.values.len())
            .filter_map(|i| self.set_value(i, values.get(i).copied().unwrap_or(0)))
            .collect()
    }
}

/// Format a gain value the way band labels display it (`+3 dB`, `0 dB`, `-2 dB`)
pub fn format_gain_label(value: i32) -> String {
    if value > 0 {
        format!("+{} dB", value)
    } else {
        format!("{} dB", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_model_is_flat() {
        let model = BandModel::default();
        assert_eq!(model.len(), 10);
        assert_eq!(model.values(), vec![0; 10]);
        assert_eq!(model.range(), GainRange::new(-12, 12));
    }

    #[test]
    fn test_new_model_clamps_zero_into_range() {
        let model = BandModel::new(3, GainRange::new(2, 8));
        assert_eq!(model.values(), vec![2, 2, 2]);
    }

    #[test]
    fn test_set_value_clamps() {
        let mut model = BandModel::default();
        assert_eq!(model.set_value(0, 40), Some(BandChange { index: 0, value: 12 }));
        assert_eq!(model.set_value(1, -40), Some(BandChange { index: 1, value: -12 }));
        assert!(model.values().iter().all(|v| model.range().contains(*v)));
    }

    #[test]
    fn test_set_value_out_of_range_index_is_ignored() {
        let mut model = BandModel::default();
        assert_eq!(model.set_value(10, 5), None);
        assert_eq!(model.values(), vec![0; 10]);
    }

    #[test]
    fn test_unchanged_write_is_silent() {
        let mut model = BandModel::default();
        assert!(model.set_value(4, 3).is_some());
        assert_eq!(model.set_value(4, 3), None);

        // Clamps to the value already stored
        model.set_value(5, 12);
        assert_eq!(model.set_value(5, 99), None);
    }

    #[test]
    fn test_set_all_pads_and_truncates() {
        let mut model = BandModel::default();
        model.set_all(&[5, 5]);
        assert_eq!(model.values(), vec![5, 5, 0, 0, 0, 0, 0, 0, 0, 0]);

        model.set_all(&[1; 14]);
        assert_eq!(model.values(), vec![1; 10]);
    }

    #[test]
    fn test_set_all_reports_only_changes() {
        let mut model = BandModel::default();
        let changes = model.set_all(&[0, 3, 0, 20]);
        assert_eq!(
            changes,
            vec![
                BandChange { index: 1, value: 3 },
                BandChange { index: 3, value: 12 },
            ]
        );
    }

    #[test]
    fn test_set_range_auto_corrects_minimum() {
        let mut model = BandModel::default();
        model.set_range(10, 5);
        assert_eq!(model.range(), GainRange::new(4, 5));
        assert_eq!(model.values(), vec![4; 10]);
    }

    #[test]
    fn test_set_minimum_pushes_maximum() {
        let mut model = BandModel::default();
        model.set_minimum(20);
        assert_eq!(model.range(), GainRange::new(20, 21));
        assert_eq!(model.values(), vec![20; 10]);
    }

    #[test]
    fn test_set_maximum_pushes_minimum() {
        let mut model = BandModel::default();
        model.set_maximum(-20);
        assert_eq!(model.range(), GainRange::new(-21, -20));
    }

    #[test]
    fn test_set_range_reclamps_and_reports() {
        let mut model = BandModel::default();
        model.set_value(0, 10);
        model.set_value(1, -10);
        let changes = model.set_range(-6, 6);
        assert_eq!(
            changes,
            vec![
                BandChange { index: 0, value: 6 },
                BandChange { index: 1, value: -6 },
            ]
        );
    }

    #[test]
    fn test_set_range_unchanged_is_noop() {
        let mut model = BandModel::default();
        assert!(model.set_range(-12, 12).is_empty());
    }

    #[test]
    fn test_range_constructors_restore_invariant() {
        let kept_max = GainRange::new(5, 5);
        assert_eq!((kept_max.min(), kept_max.max()), (4, 5));

        let kept_min = GainRange::with_fixed_min(5, 5);
        assert_eq!((kept_min.min(), kept_min.max()), (5, 6));
    }

    #[test]
    fn test_range_conflicts_at_i32_limits() {
        assert_eq!(GainRange::new(5, i32::MIN).min(), i32::MIN);
        assert_eq!(GainRange::new(5, i32::MIN).max(), i32::MIN + 1);
        assert_eq!(
            GainRange::with_fixed_min(i32::MAX, 0),
            GainRange::new(i32::MAX - 1, i32::MAX)
        );

        let mut model = BandModel::default();
        model.set_minimum(i32::MAX);
        assert_eq!(model.range(), GainRange::new(i32::MAX - 1, i32::MAX));
        assert!(model.values().iter().all(|v| *v == i32::MAX - 1));

        model.set_maximum(i32::MIN);
        assert_eq!(model.range(), GainRange::new(i32::MIN, i32::MIN + 1));

        model.set_range(0, i32::MIN);
        assert!(model.range().max() > model.range().min());
    }

    #[test]
    fn test_full_i32_span_does_not_overflow() {
        let range = GainRange::new(i32::MIN, i32::MAX);
        assert_eq!(range.span(), u32::MAX as i64);
        assert_eq!(GainRange::default().span(), 24);
    }

    #[test]
    fn test_gain_label() {
        assert_eq!(format_gain_label(3), "+3 dB");
        assert_eq!(format_gain_label(0), "0 dB");
        assert_eq!(format_gain_label(-2), "-2 dB");
    }
}
