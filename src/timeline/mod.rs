//! TOML-configurable timelines of named motions.
//!
//! A timeline groups motions that each own a scroll window and a target
//! name. On every tick the host passes the absolute scroll offset and a
//! [`SinkRegistry`]; each motion looks up its target and writes to it.
//!
//! # Timeline File Format
//!
//! ```toml
//! [meta]
//! name = "Landing page"
//!
//! [[motions]]
//! name = "hero-fill"
//! kind = "fill"            # fill | background | gradient | svg-gradient
//! target = "hero"
//! window = { start = 0.0, end = 400.0 }
//! start = "#000000"
//! end = { r = 100, g = 200, b = 50, a = 1 }
//!
//! [[motions]]
//! name = "sky"
//! kind = "gradient"
//! target = "sky"
//! window = { start = 100.0, end = 600.0 }
//! start = { angle = 0, stops = [{ at = 0, color = "#ff0000" }] }
//! end = { angle = 90, stops = [{ at = 100, color = "#0000ff" }] }
//! ```

pub mod builtins;
mod loader;
mod scene;
mod schema;

use std::path::Path;

use crate::error::{MotionError, Result};
use crate::motion::{
    Animate, ColorMotion, GradientNode, GradientNodeMotion, GradientStyleMotion, ScrollWindow,
    StyleSink,
};
use crate::trace_debug;

// Re-exports
pub use loader::{load_from_file, load_from_str};
pub use scene::Scene;
pub use schema::{MotionKind, TimelineMeta};

/// Lookup of live sinks by target name.
///
/// Returning `None` means the target does not exist yet; the motion skips
/// the write.
pub trait SinkRegistry {
    fn style_sink(&mut self, target: &str) -> Option<&mut (dyn StyleSink + 'static)>;

    fn gradient_node(&mut self, target: &str) -> Option<&mut (dyn GradientNode + 'static)>;
}

/// A motion of any supported kind.
#[derive(Debug, Clone)]
pub enum AnyMotion {
    Fill(ColorMotion),
    Background(ColorMotion),
    Gradient(GradientStyleMotion),
    SvgGradient(GradientNodeMotion),
}

impl AnyMotion {
    #[must_use]
    pub const fn kind(&self) -> MotionKind {
        match self {
            Self::Fill(_) => MotionKind::Fill,
            Self::Background(_) => MotionKind::Background,
            Self::Gradient(_) => MotionKind::Gradient,
            Self::SvgGradient(_) => MotionKind::SvgGradient,
        }
    }
}

/// A motion bound to a scroll window and a target.
#[derive(Debug, Clone)]
pub struct ScheduledMotion {
    pub name: String,
    pub target: String,
    pub window: ScrollWindow,
    pub motion: AnyMotion,
}

impl ScheduledMotion {
    /// Apply the motion for an absolute scroll offset.
    pub fn apply(&self, scroll: f64, sinks: &mut dyn SinkRegistry) {
        let position = self.window.local_position(scroll);
        match &self.motion {
            AnyMotion::Fill(motion) | AnyMotion::Background(motion) => {
                motion.apply(position, &self.window, sinks.style_sink(&self.target));
            }
            AnyMotion::Gradient(motion) => {
                motion.apply(position, &self.window, sinks.style_sink(&self.target));
            }
            AnyMotion::SvgGradient(motion) => {
                motion.apply(position, &self.window, sinks.gradient_node(&self.target));
            }
        }
    }
}

/// An ordered set of scheduled motions.
#[derive(Debug, Clone)]
pub struct Timeline {
    /// Timeline metadata.
    pub meta: TimelineMeta,

    /// Motions in definition order.
    motions: Vec<ScheduledMotion>,
}

impl Timeline {
    /// Apply every motion for an absolute scroll offset, in definition order.
    pub fn tick(&self, scroll: f64, sinks: &mut dyn SinkRegistry) {
        trace_debug!(
            timeline = %self.meta.name,
            scroll,
            motions = self.motions.len(),
            "timeline tick"
        );
        for motion in &self.motions {
            motion.apply(scroll, sinks);
        }
    }

    /// Get a motion by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ScheduledMotion> {
        self.motions.iter().find(|m| m.name == name)
    }

    /// Get all motion names in definition order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.motions.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduledMotion> {
        self.motions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.motions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.motions.is_empty()
    }
}

/// Load a timeline by name: builtins first, then `<dir>/<name>.toml`.
///
/// # Errors
/// Returns an error if the timeline is not found or cannot be loaded.
pub fn load_by_name(name: &str, dir: Option<&Path>) -> Result<Timeline> {
    if let Some(timeline) = builtins::load_by_name(name) {
        return Ok(timeline);
    }

    if let Some(dir) = dir {
        let path = dir.join(format!("{name}.toml"));
        if path.exists() {
            return load_from_file(&path);
        }
    }

    Err(MotionError::TimelineNotFound {
        name: name.to_string(),
    })
}
