//! Timeline loader - loads timelines from TOML files.

use std::path::Path;

use super::schema::{ColorDef, GradientDef, MotionDef, MotionKind, TimelineFile, ValueDef};
use super::{AnyMotion, ScheduledMotion, Timeline};
use crate::error::{MotionError, Result};
use crate::{log_debug, log_info};
use crate::motion::{
    Color, ColorMotion, Gradient, GradientNodeMotion, GradientStop, GradientStyleMotion,
    ScrollWindow,
};

/// Load a timeline from a file path.
///
/// # Errors
/// Returns an error if the file cannot be read, parsed, or validated.
pub fn load_from_file(path: &Path) -> Result<Timeline> {
    log_info!("Loading timeline from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| MotionError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_from_str(&content, Some(path))
}

/// Load a timeline from a TOML string.
///
/// # Errors
/// Returns an error if the TOML is invalid or a motion fails validation.
pub fn load_from_str(content: &str, path: Option<&Path>) -> Result<Timeline> {
    let timeline_file: TimelineFile = toml::from_str(content).map_err(|e| MotionError::Parse {
        origin: path.map_or_else(|| "<inline>".to_string(), |p| format!("'{}'", p.display())),
        source: e,
    })?;

    build_timeline(timeline_file)
}

/// Build a validated Timeline from a parsed `TimelineFile`.
fn build_timeline(timeline_file: TimelineFile) -> Result<Timeline> {
    let motions = timeline_file
        .motions
        .into_iter()
        .map(build_motion)
        .collect::<Result<Vec<_>>>()?;

    log_debug!(
        "Loaded timeline '{}' with {} motions",
        timeline_file.meta.name,
        motions.len()
    );

    Ok(Timeline {
        meta: timeline_file.meta,
        motions,
    })
}

fn build_motion(def: MotionDef) -> Result<ScheduledMotion> {
    let (start, end) = (def.window.start, def.window.end);
    // NaN compares false, so test for a proper range rather than an empty one
    let forward = start.is_finite() && end.is_finite() && end > start;
    if !forward {
        return Err(MotionError::InvalidWindow {
            name: def.name,
            start,
            end,
        });
    }

    let motion = match def.kind {
        MotionKind::Fill | MotionKind::Background => {
            let (Some(start), Some(end)) = (as_color(&def.start), as_color(&def.end)) else {
                return Err(shape_mismatch(&def, "color"));
            };
            let start = resolve_color(start).map_err(|e| wrap(&def, e))?;
            let end = resolve_color(end).map_err(|e| wrap(&def, e))?;
            if def.kind == MotionKind::Fill {
                AnyMotion::Fill(ColorMotion::fill(start, end))
            } else {
                AnyMotion::Background(ColorMotion::background(start, end))
            }
        }
        MotionKind::Gradient | MotionKind::SvgGradient => {
            let (Some(start), Some(end)) = (as_gradient(&def.start), as_gradient(&def.end))
            else {
                return Err(shape_mismatch(&def, "gradient"));
            };
            let start = resolve_gradient(start).map_err(|e| wrap(&def, e))?;
            let end = resolve_gradient(end).map_err(|e| wrap(&def, e))?;
            if def.kind == MotionKind::Gradient {
                AnyMotion::Gradient(
                    GradientStyleMotion::linear_gradient(start, end).map_err(|e| wrap(&def, e))?,
                )
            } else {
                AnyMotion::SvgGradient(
                    GradientNodeMotion::svg_gradient(start, end).map_err(|e| wrap(&def, e))?,
                )
            }
        }
    };

    Ok(ScheduledMotion {
        name: def.name,
        target: def.target,
        window: ScrollWindow::new(def.window.start, def.window.end),
        motion,
    })
}

fn as_color(value: &ValueDef) -> Option<&ColorDef> {
    match value {
        ValueDef::Color(color) => Some(color),
        ValueDef::Gradient(_) => None,
    }
}

fn as_gradient(value: &ValueDef) -> Option<&GradientDef> {
    match value {
        ValueDef::Gradient(gradient) => Some(gradient),
        ValueDef::Color(_) => None,
    }
}

/// Resolve a color definition into a concrete color.
fn resolve_color(def: &ColorDef) -> Result<Color> {
    match def {
        ColorDef::Hex(hex) => Color::from_hex(hex).map_err(|e| MotionError::InvalidColor {
            value: hex.clone(),
            source: e,
        }),
        ColorDef::Channels { r, g, b, a } => Ok(Color::new(*r, *g, *b, *a)),
    }
}

fn resolve_gradient(def: &GradientDef) -> Result<Gradient> {
    let stops = def
        .stops
        .iter()
        .map(|stop| -> Result<GradientStop> {
            Ok(GradientStop::new(stop.at, resolve_color(&stop.color)?))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Gradient::new(def.angle, stops))
}

fn shape_mismatch(def: &MotionDef, expected: &'static str) -> MotionError {
    MotionError::ShapeMismatch {
        name: def.name.clone(),
        kind: def.kind,
        expected,
    }
}

fn wrap(def: &MotionDef, err: MotionError) -> MotionError {
    MotionError::Motion {
        name: def.name.clone(),
        source: Box::new(err),
    }
}
