//! Builtin timelines embedded in the library.

use super::Timeline;
use super::loader::load_from_str;

/// The embedded Fade to Night timeline TOML.
const FADE_TO_NIGHT_TOML: &str = include_str!("fade_to_night.toml");

/// The embedded Glow Line timeline TOML.
const GLOW_LINE_TOML: &str = include_str!("glow_line.toml");

/// Load the builtin Fade to Night timeline.
///
/// # Panics
/// Panics if the embedded timeline TOML is invalid (this would be a bug).
#[must_use]
pub fn fade_to_night() -> Timeline {
    load_from_str(FADE_TO_NIGHT_TOML, None).expect("builtin Fade to Night timeline should be valid")
}

/// Load the builtin Glow Line timeline.
///
/// # Panics
/// Panics if the embedded timeline TOML is invalid (this would be a bug).
#[must_use]
pub fn glow_line() -> Timeline {
    load_from_str(GLOW_LINE_TOML, None).expect("builtin Glow Line timeline should be valid")
}

/// Get all builtin timeline names with their display names.
#[must_use]
pub fn builtin_names() -> &'static [(&'static str, &'static str)] {
    &[
        ("fade-to-night", "Fade to Night"),
        ("glow-line", "Glow Line"),
    ]
}

/// Load a builtin timeline by name.
///
/// Returns `None` if the name is not a builtin timeline.
#[must_use]
pub fn load_by_name(name: &str) -> Option<Timeline> {
    match name {
        "fade-to-night" => Some(fade_to_night()),
        "glow-line" => Some(glow_line()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::MotionKind;

    #[test]
    fn test_all_builtins_load() {
        for (name, display_name) in builtin_names() {
            let timeline = load_by_name(name).unwrap();
            assert_eq!(timeline.meta.name, *display_name);
            assert!(!timeline.is_empty());
        }
    }

    #[test]
    fn test_fade_to_night_motions() {
        let timeline = fade_to_night();
        assert_eq!(timeline.names(), vec!["sky", "sun"]);
        assert_eq!(
            timeline.get("sky").map(|m| m.motion.kind()),
            Some(MotionKind::Gradient)
        );
    }

    #[test]
    fn test_unknown_builtin() {
        assert!(load_by_name("nonexistent").is_none());
    }
}
