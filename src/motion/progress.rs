//! Progress mapping - scroll position to interpolation fraction.

/// Where a fraction falls relative to the interpolation range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Progress {
    /// Fraction below 0: the start value is emitted unchanged.
    Before,
    /// Fraction in `0.0..=1.0`: values are interpolated.
    Within(f64),
    /// Fraction above 1: the end value is emitted unchanged.
    After,
}

impl Progress {
    /// Classify a raw fraction.
    ///
    /// The fraction itself is never clamped. A `NaN` fraction compares false
    /// against both bounds and lands in `Within`.
    #[must_use]
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction < 0.0 {
            Self::Before
        } else if fraction > 1.0 {
            Self::After
        } else {
            Self::Within(fraction)
        }
    }

    /// Classify a position within a frame of the given length.
    #[must_use]
    pub fn at(position: f64, frame_length: f64) -> Self {
        Self::from_fraction(normalize(position, frame_length))
    }
}

/// Normalize a frame-relative position into a fraction of the frame length.
#[must_use]
pub fn normalize(position: f64, frame_length: f64) -> f64 {
    position / frame_length
}

/// Truncate toward zero into an integer.
///
/// Out-of-range values saturate and `NaN` becomes 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
pub fn truncate_to_int(x: f64) -> i32 {
    x.trunc() as i32
}

/// Linearly interpolate between two integers, truncating the result toward zero.
#[must_use]
pub fn interpolate_scalar(start: i32, end: i32, fraction: f64) -> i32 {
    let start = f64::from(start);
    let end = f64::from(end);
    truncate_to_int(start + (end - start) * fraction)
}
