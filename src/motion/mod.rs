//! Scroll-driven motions for colors and linear gradients.
//!
//! A [`Motion`] holds a fixed start and end value plus a renderer strategy.
//! Each call to [`Animate::apply`] turns a frame-relative position into a
//! fraction, resolves the value for that fraction, and commits it to a sink:
//!
//! - fraction below 0: the start value, unchanged
//! - fraction above 1: the end value, unchanged
//! - otherwise: every channel, angle, and stop length interpolated with
//!   truncation toward zero
//!
//! # Usage
//!
//! ```
//! use scroll_motion::motion::{Animate, Color, ColorMotion, StyleMap, StyleProperty};
//!
//! let motion = ColorMotion::fill(Color::new(0, 0, 0, 1), Color::new(100, 200, 50, 1));
//! let mut element = StyleMap::new();
//!
//! motion.apply(25.0, &100.0, Some(&mut element));
//! assert_eq!(element.get(StyleProperty::Fill), Some("rgba(25, 50, 12, 1)"));
//! ```

pub mod adapters;
mod color;
mod frame;
mod gradient;
pub mod progress;
pub mod render;
mod sink;

use std::fmt;

use crate::error::Result;
use crate::log_debug;

// Re-exports
pub use color::{Color, ColorParseError};
pub use frame::{ScrollWindow, TimeFrame};
pub use gradient::{Gradient, GradientStop};
pub use progress::Progress;
pub use sink::{GradientNode, StyleMap, StyleProperty, StyleSink, SvgGradient, SvgStop};

/// A value shape that can be interpolated between two endpoints.
pub trait Interpolate: Clone {
    /// Value at `fraction` between `self` and `end`.
    ///
    /// Only called with fractions that passed the edge check, so
    /// implementations never need to clamp.
    #[must_use]
    fn interpolate(&self, end: &Self, fraction: f64) -> Self;

    /// Verify that `self` and `end` can be interpolated at all.
    ///
    /// # Errors
    /// Returns an error when the two endpoints are structurally incompatible.
    fn check_compatible(&self, _end: &Self) -> Result<()> {
        Ok(())
    }
}

/// Resolve the value at `fraction`, short-circuiting outside `0.0..=1.0`.
#[must_use]
pub fn resolve<V: Interpolate>(start: &V, end: &V, fraction: f64) -> V {
    match Progress::from_fraction(fraction) {
        Progress::Before => start.clone(),
        Progress::After => end.clone(),
        Progress::Within(fraction) => start.interpolate(end, fraction),
    }
}

/// Anything that can be driven by a position within a frame.
pub trait Animate {
    /// The write target this motion commits to.
    type Sink: ?Sized;

    /// Compute the value for `position` and commit it to `sink`.
    ///
    /// A missing sink is a no-op.
    fn apply(&self, position: f64, frame: &dyn TimeFrame, sink: Option<&mut Self::Sink>);
}

/// Strategy that commits a resolved value to a sink.
pub type Renderer<V, S> = fn(&V, &mut S);

/// An immutable start/end pair with the renderer used to commit values.
pub struct Motion<V, S: ?Sized> {
    start: V,
    end: V,
    render: Renderer<V, S>,
}

/// Solid color written as a style string.
pub type ColorMotion = Motion<Color, dyn StyleSink>;

/// Linear gradient written as a `background` style string.
pub type GradientStyleMotion = Motion<Gradient, dyn StyleSink>;

/// Linear gradient written into an SVG gradient node.
pub type GradientNodeMotion = Motion<Gradient, dyn GradientNode>;

impl<V: Interpolate, S: ?Sized> Motion<V, S> {
    /// Build a motion after checking that the endpoints are compatible.
    ///
    /// # Errors
    /// Returns an error if `start` and `end` cannot be interpolated, such as
    /// gradients with different stop counts.
    pub fn new(start: V, end: V, render: Renderer<V, S>) -> Result<Self> {
        if let Err(err) = start.check_compatible(&end) {
            log_debug!("Rejected motion endpoints: {}", err);
            return Err(err);
        }
        Ok(Self { start, end, render })
    }

    #[must_use]
    pub fn start(&self) -> &V {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &V {
        &self.end
    }

    /// Resolve the value for `position` without touching any sink.
    #[must_use]
    pub fn value_at(&self, position: f64, frame: &dyn TimeFrame) -> V {
        resolve(
            &self.start,
            &self.end,
            progress::normalize(position, frame.length()),
        )
    }
}

impl<V: Interpolate, S: ?Sized> Animate for Motion<V, S> {
    type Sink = S;

    fn apply(&self, position: f64, frame: &dyn TimeFrame, sink: Option<&mut S>) {
        let Some(sink) = sink else {
            log_debug!("No sink attached, skipping motion at position {}", position);
            return;
        };
        let value = self.value_at(position, frame);
        (self.render)(&value, sink);
    }
}

impl ColorMotion {
    /// Animate an element's `fill` color.
    #[must_use]
    pub fn fill(start: Color, end: Color) -> Self {
        Self {
            start,
            end,
            render: adapters::css::write_fill,
        }
    }

    /// Animate an element's solid `background` color.
    #[must_use]
    pub fn background(start: Color, end: Color) -> Self {
        Self {
            start,
            end,
            render: adapters::css::write_background_color,
        }
    }
}

impl GradientStyleMotion {
    /// Animate an element's `background` as a `linear-gradient(...)` string.
    ///
    /// # Errors
    /// Returns [`MotionError::MismatchedStops`](crate::MotionError::MismatchedStops)
    /// if the gradients have different stop counts.
    pub fn linear_gradient(start: Gradient, end: Gradient) -> Result<Self> {
        Self::new(start, end, adapters::css::write_background_gradient)
    }
}

impl GradientNodeMotion {
    /// Animate the stops and rotation of an SVG gradient node.
    ///
    /// # Errors
    /// Returns [`MotionError::MismatchedStops`](crate::MotionError::MismatchedStops)
    /// if the gradients have different stop counts.
    pub fn svg_gradient(start: Gradient, end: Gradient) -> Result<Self> {
        Self::new(start, end, adapters::svg::write_gradient_node)
    }
}

impl<V: Clone, S: ?Sized> Clone for Motion<V, S> {
    fn clone(&self) -> Self {
        Self {
            start: self.start.clone(),
            end: self.end.clone(),
            render: self.render,
        }
    }
}

impl<V: fmt::Debug, S: ?Sized> fmt::Debug for Motion<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Motion")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
