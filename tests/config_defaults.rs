//! Config defaults, RON loading, and validation warnings.

use std::io::Write;

use letterfall::core::config::config::GameConfig;

#[test]
fn defaults_match_demo_tuning() {
    let cfg = GameConfig::default();
    assert_eq!(cfg.camera.frustum_height, 10.0);
    assert_eq!(cfg.camera.center_y, 4.8);
    assert_eq!(cfg.physics.gravity_y, -9.0);
    assert_eq!(cfg.physics.friction, 0.1);
    assert_eq!(cfg.physics.restitution, 0.7);
    assert_eq!(cfg.glyphs.radius, 0.25);
    assert_eq!(cfg.glyphs.lifetime_secs, 10.0);
    assert_eq!(cfg.glyphs.launch_vx.min, -1.0);
    assert_eq!(cfg.glyphs.launch_vx.max, 1.0);
    assert_eq!(cfg.glyphs.launch_vy, 12.0);
    assert_eq!(cfg.page_turn.cooldown_secs, 0.08);
    assert_eq!(cfg.page_turn.pool_size, 300);
    assert_eq!(cfg.page_turn.fill_scale, 30.0);
    assert_eq!(cfg.page_turn.ripple_scale, 8.0);
    assert_eq!(cfg.page_turn.fade_delay_secs, 0.25);
    assert_eq!(cfg.page_turn.fade_secs, 0.75);
}

#[test]
fn effect_defaults_only_rgb_shift_enabled() {
    let fx = GameConfig::default().effects;
    assert!(fx.rgb_shift.enabled);
    assert_eq!(fx.rgb_shift.amount, 0.004);
    assert_eq!(fx.rgb_shift.angle_deg, 90.0);
    assert!(!fx.bloom.enabled);
    assert!(!fx.film.enabled);
    assert!(!fx.pixelate.enabled);
    assert!(!fx.vignette.enabled);
    assert_eq!(fx.msaa_samples, 1);
}

#[test]
fn default_config_validates_clean() {
    assert!(GameConfig::default().validate().is_empty());
}

#[test]
fn partial_ron_fills_missing_fields_from_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"(
            window: (title: "custom", width: 640.0, height: 480.0),
            glyphs: (radius: 0.5),
        )"#
    )
    .expect("write ron");
    let cfg = GameConfig::load_from_file(file.path()).expect("parse");
    assert_eq!(cfg.window.title, "custom");
    assert_eq!(cfg.glyphs.radius, 0.5);
    // untouched sections keep defaults
    assert_eq!(cfg.glyphs.lifetime_secs, 10.0);
    assert_eq!(cfg.page_turn.pool_size, 300);
}

#[test]
fn missing_file_falls_back_to_defaults_with_reason() {
    let (cfg, err) = GameConfig::load_or_default("/nonexistent/path/game.ron");
    assert_eq!(cfg, GameConfig::default());
    assert!(err.is_some());
}

#[test]
fn malformed_ron_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "(window: (width: \"oops\"))").expect("write ron");
    assert!(GameConfig::load_from_file(file.path()).is_err());
}

#[test]
fn validate_flags_bad_tuning() {
    let mut cfg = GameConfig::default();
    cfg.glyphs.radius = 0.0;
    cfg.physics.gravity_y = 5.0;
    cfg.page_turn.pool_size = 0;
    cfg.glyphs.launch_vx.min = 2.0;
    let warnings = cfg.validate();
    assert!(warnings.iter().any(|w| w.contains("glyphs.radius")));
    assert!(warnings.iter().any(|w| w.contains("gravity_y")));
    assert!(warnings.iter().any(|w| w.contains("pool_size")));
    assert!(warnings.iter().any(|w| w.contains("launch_vx")));
}

#[test]
fn sanitized_clamps_effect_tunables() {
    let mut cfg = GameConfig::default();
    cfg.effects.rgb_shift.amount = 9.0;
    cfg.effects.pixelate.pixel_size = 1000.0;
    let s = cfg.effects.sanitized();
    assert_eq!(s.rgb_shift.amount, 0.1);
    assert_eq!(s.pixelate.pixel_size, 64.0);
    assert!(!cfg.validate().is_empty());
}
