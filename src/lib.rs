//! Scroll Motion - scroll-driven color and gradient interpolation
//!
//! This library computes intermediate fill colors and linear gradients from a
//! scroll position within a bounded window, and writes them to style surfaces
//! or SVG gradient nodes supplied by the host.

#![allow(clippy::uninlined_format_args)] // Style preference
#![allow(clippy::format_push_string)] // Performance improvement but stylistic
#![allow(clippy::return_self_not_must_use)] // Builder pattern is clear enough

pub mod error;
pub mod logger;
pub mod motion;
pub mod timeline;

pub use error::{MotionError, Result};
pub use motion::{
    Animate, Color, ColorMotion, Gradient, GradientNodeMotion, GradientStop, GradientStyleMotion,
    Motion, ScrollWindow, TimeFrame,
};
pub use timeline::{Scene, SinkRegistry, Timeline};
