//! Error types for motion construction and timeline loading.

use std::path::PathBuf;

use crate::motion::ColorParseError;
use crate::timeline::MotionKind;

/// Errors raised while building motions or loading timelines.
///
/// Applying a motion never fails; every variant here surfaces at
/// construction or load time.
#[derive(Debug, thiserror::Error)]
pub enum MotionError {
    /// Start and end gradients do not have the same number of stops.
    #[error("mismatched stop-list length: start has {start} stops, end has {end}")]
    MismatchedStops { start: usize, end: usize },

    /// A color literal could not be parsed.
    #[error("invalid color '{value}': {source}")]
    InvalidColor {
        value: String,
        #[source]
        source: ColorParseError,
    },

    /// Failed to read a timeline file.
    #[error("failed to read timeline file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse timeline TOML.
    #[error("failed to parse timeline {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    /// A motion's scroll window is not a finite, forward range.
    #[error("motion '{name}' has an invalid scroll window ({start}..{end})")]
    InvalidWindow { name: String, start: f64, end: f64 },

    /// A motion's start or end value does not fit its kind.
    #[error("motion '{name}' of kind '{kind}' expects {expected} values")]
    ShapeMismatch {
        name: String,
        kind: MotionKind,
        expected: &'static str,
    },

    /// A motion definition failed to build.
    #[error("motion '{name}': {source}")]
    Motion {
        name: String,
        #[source]
        source: Box<MotionError>,
    },

    /// No builtin or file timeline matched the requested name.
    #[error("timeline '{name}' not found")]
    TimelineNotFound { name: String },
}

/// Result alias for motion operations.
pub type Result<T> = std::result::Result<T, MotionError>;
