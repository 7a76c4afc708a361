//! TOML schema types for timeline files.
//!
//! These types define the structure of timeline TOML files and handle deserialization.

use std::fmt;

use serde::Deserialize;

/// Root structure of a timeline TOML file.
#[derive(Debug, Deserialize)]
pub struct TimelineFile {
    /// Timeline metadata.
    pub meta: TimelineMeta,

    /// Motion definitions, applied in file order.
    #[serde(default)]
    pub motions: Vec<MotionDef>,
}

/// Timeline metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineMeta {
    /// Display name of the timeline.
    pub name: String,

    /// Timeline description.
    #[serde(default)]
    pub description: Option<String>,
}

/// One motion definition.
#[derive(Debug, Deserialize)]
pub struct MotionDef {
    pub name: String,
    pub kind: MotionKind,
    /// Name of the sink this motion writes to.
    pub target: String,
    pub window: WindowDef,
    pub start: ValueDef,
    pub end: ValueDef,
}

/// What a motion animates and where it writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionKind {
    Fill,
    Background,
    Gradient,
    SvgGradient,
}

impl MotionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Background => "background",
            Self::Gradient => "gradient",
            Self::SvgGradient => "svg-gradient",
        }
    }
}

impl fmt::Display for MotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Absolute scroll range of a motion.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WindowDef {
    pub start: f64,
    pub end: f64,
}

/// A start or end value: a gradient table or a color.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ValueDef {
    Gradient(GradientDef),
    Color(ColorDef),
}

/// Color as a hex string or an explicit channel table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Channels {
        r: i32,
        g: i32,
        b: i32,
        #[serde(default = "default_alpha")]
        a: i32,
    },
}

fn default_alpha() -> i32 {
    crate::motion::Color::OPAQUE
}

/// Gradient definition.
#[derive(Debug, Clone, Deserialize)]
pub struct GradientDef {
    #[serde(default)]
    pub angle: i32,
    pub stops: Vec<StopDef>,
}

/// Gradient stop definition.
#[derive(Debug, Clone, Deserialize)]
pub struct StopDef {
    /// Length percentage of the stop.
    pub at: i32,
    pub color: ColorDef,
}
