use scroll_motion::motion::{StyleProperty, SvgStop};
use scroll_motion::timeline::{self, MotionKind};
use scroll_motion::{MotionError, Scene, Timeline};

use test_utils::{LANDING_TIMELINE, write_timeline};

fn landing_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add_element("hero");
    scene.add_element("sky");
    scene.add_gradient("glow");
    scene
}

fn load_landing() -> Timeline {
    let (_dir, path) = write_timeline("landing", LANDING_TIMELINE);
    timeline::load_from_file(&path).expect("Failed to load landing timeline")
}

fn stop(offset: &str, stop_color: &str) -> SvgStop {
    SvgStop {
        offset: offset.to_string(),
        stop_color: stop_color.to_string(),
    }
}

#[test]
fn test_load_from_file() {
    let timeline = load_landing();
    assert_eq!(timeline.meta.name, "Landing");
    assert_eq!(
        timeline.meta.description.as_deref(),
        Some("Hero fill plus a sky gradient")
    );
    assert_eq!(timeline.names(), vec!["hero-fill", "sky", "glow"]);
    let kinds: Vec<MotionKind> = timeline.iter().map(|m| m.motion.kind()).collect();
    assert_eq!(
        kinds,
        vec![MotionKind::Fill, MotionKind::Gradient, MotionKind::SvgGradient]
    );
}

#[test]
fn test_tick_early_scroll() {
    let timeline = load_landing();
    let mut scene = landing_scene();

    timeline.tick(25.0, &mut scene);

    let hero = scene.element("hero").expect("hero element");
    assert_eq!(hero.get(StyleProperty::Fill), Some("rgba(25, 50, 12, 1)"));

    // sky window has not started yet
    let sky = scene.element("sky").expect("sky element");
    assert_eq!(
        sky.get(StyleProperty::Background),
        Some("linear-gradient(0deg, rgba(255, 0, 0, 1) 0%)")
    );

    let glow = scene.gradient("glow").expect("glow gradient");
    assert_eq!(glow.attribute("gradientTransform"), Some("rotate(11)"));
    assert_eq!(
        glow.stops(),
        [
            stop("6%", "rgba(31, 31, 31, 1)"),
            stop("100%", "rgba(223, 223, 223, 1)"),
        ]
    );
}

#[test]
fn test_tick_late_scroll() {
    let timeline = load_landing();
    let mut scene = landing_scene();

    timeline.tick(200.0, &mut scene);

    let hero = scene.element("hero").expect("hero element");
    assert_eq!(hero.get(StyleProperty::Fill), Some("rgba(100, 200, 50, 1)"));

    let sky = scene.element("sky").expect("sky element");
    assert_eq!(
        sky.get(StyleProperty::Background),
        Some("linear-gradient(90deg, rgba(127, 0, 127, 1) 50%)")
    );

    let glow = scene.gradient("glow").expect("glow gradient");
    assert_eq!(glow.attribute("gradientTransform"), Some("rotate(90)"));
    assert_eq!(
        glow.stops(),
        [
            stop("50%", "rgba(255, 255, 255, 1)"),
            stop("100%", "rgba(0, 0, 0, 1)"),
        ]
    );
}

#[test]
fn test_tick_skips_missing_targets() {
    let timeline = load_landing();
    let mut scene = Scene::new();
    scene.add_element("hero");

    timeline.tick(50.0, &mut scene);

    let hero = scene.element("hero").expect("hero element");
    assert_eq!(hero.write_count(), 1);
    assert!(scene.element("sky").is_none());
    assert!(scene.gradient("glow").is_none());
}

#[test]
fn test_load_by_name_from_directory() {
    let (dir, _path) = write_timeline("landing", LANDING_TIMELINE);

    let timeline = timeline::load_by_name("landing", Some(dir.path()))
        .expect("Failed to load timeline by name");
    assert_eq!(timeline.len(), 3);

    let builtin = timeline::load_by_name("fade-to-night", None).expect("builtin timeline");
    assert_eq!(builtin.meta.name, "Fade to Night");

    let missing = timeline::load_by_name("nope", Some(dir.path()));
    assert!(matches!(
        missing,
        Err(MotionError::TimelineNotFound { ref name }) if name == "nope"
    ));
}

#[test]
fn test_load_errors_carry_path() {
    let (dir, path) = write_timeline("broken", "[meta\nname = 1");

    let err = timeline::load_from_file(&path).expect_err("broken TOML should fail");
    assert!(matches!(err, MotionError::Parse { .. }));
    assert!(err.to_string().contains("broken.toml"));

    let missing = dir.path().join("absent.toml");
    let err = timeline::load_from_file(&missing).expect_err("missing file should fail");
    assert!(matches!(err, MotionError::Io { .. }));
}
