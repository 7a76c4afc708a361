//! Linear gradients and positional stop interpolation.

use std::fmt;

use super::Interpolate;
use super::color::Color;
use super::progress::interpolate_scalar;
use super::render;
use crate::error::{MotionError, Result};

/// One color anchor within a gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GradientStop {
    /// Position along the gradient line, nominally 0 to 100.
    pub length_percentage: i32,
    pub color: Color,
}

impl GradientStop {
    #[must_use]
    pub const fn new(length_percentage: i32, color: Color) -> Self {
        Self {
            length_percentage,
            color,
        }
    }
}

impl Interpolate for GradientStop {
    fn interpolate(&self, end: &Self, fraction: f64) -> Self {
        Self {
            length_percentage: interpolate_scalar(
                self.length_percentage,
                end.length_percentage,
                fraction,
            ),
            color: self.color.interpolate(&end.color, fraction),
        }
    }
}

/// A linear gradient: an angle in degrees and an ordered list of stops.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Gradient {
    pub angle: i32,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    #[must_use]
    pub fn new(angle: i32, stops: Vec<GradientStop>) -> Self {
        Self { angle, stops }
    }

    /// Number of stops in this gradient.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Check whether the gradient has no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl Interpolate for Gradient {
    /// Stops are paired by index, never by position or color.
    fn interpolate(&self, end: &Self, fraction: f64) -> Self {
        Self {
            angle: interpolate_scalar(self.angle, end.angle, fraction),
            stops: self
                .stops
                .iter()
                .zip(&end.stops)
                .map(|(from, to)| from.interpolate(to, fraction))
                .collect(),
        }
    }

    fn check_compatible(&self, end: &Self) -> Result<()> {
        if self.len() == end.len() {
            Ok(())
        } else {
            Err(MotionError::MismatchedStops {
                start: self.len(),
                end: end.len(),
            })
        }
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::gradient_string(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    #[test]
    fn test_stops_pair_by_index() {
        let start = Gradient::new(0, vec![GradientStop::new(0, RED)]);
        let end = Gradient::new(90, vec![GradientStop::new(100, BLUE)]);

        let mid = start.interpolate(&end, 0.5);
        assert_eq!(mid.angle, 45);
        assert_eq!(
            mid.stops,
            vec![GradientStop::new(50, Color::rgb(127, 0, 127))]
        );
    }

    #[test]
    fn test_index_pairing_ignores_stop_order_by_position() {
        // Start stops descend, end stops ascend; pairing still follows the index.
        let start = Gradient::new(
            0,
            vec![GradientStop::new(100, RED), GradientStop::new(0, BLUE)],
        );
        let end = Gradient::new(
            0,
            vec![GradientStop::new(0, RED), GradientStop::new(100, BLUE)],
        );

        let mid = start.interpolate(&end, 0.25);
        assert_eq!(mid.stops[0].length_percentage, 75);
        assert_eq!(mid.stops[1].length_percentage, 25);
    }

    #[test]
    fn test_check_compatible() {
        let two = Gradient::new(0, vec![GradientStop::new(0, RED); 2]);
        let three = Gradient::new(0, vec![GradientStop::new(0, RED); 3]);

        assert!(two.check_compatible(&two.clone()).is_ok());
        assert!(matches!(
            two.check_compatible(&three),
            Err(MotionError::MismatchedStops { start: 2, end: 3 })
        ));
    }

    #[test]
    fn test_len() {
        assert!(Gradient::default().is_empty());
        assert_eq!(Gradient::new(0, vec![GradientStop::new(0, RED)]).len(), 1);
    }
}
