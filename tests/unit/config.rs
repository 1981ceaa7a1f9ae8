use super::*;

#[test]
fn defaults_match_the_classic_reel() {
    let cfg = ReelConfig::default();
    assert_eq!(cfg.text, "YOUR TEXT HERE");
    assert_eq!((cfg.width, cfg.height, cfg.fps), (1080, 1920, 30));
    assert_eq!(cfg.seconds_per_font, 2.0);
    assert_eq!(cfg.output, PathBuf::from("font_reel_1080x1920.mp4"));
    assert!(cfg.fonts.is_empty());
    cfg.validate().unwrap();
}

#[test]
fn partial_json_keeps_defaults() {
    let json = r#"{
        "text": "Hello",
        "fps": 24,
        "fonts": [{ "family": "Lobster", "path": "fonts/Lobster.ttf" }]
    }"#;
    let cfg = ReelConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.text, "Hello");
    assert_eq!(cfg.fps().unwrap(), Fps::from_int(24).unwrap());
    assert_eq!(cfg.width, 1080);
    assert_eq!(cfg.fonts[0].path, PathBuf::from("fonts/Lobster.ttf"));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = ReelConfig::from_reader(r#"{ "txt": "typo" }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)));
}

#[test]
fn from_path_resolves_fonts_relative_to_the_file() {
    let dir = std::env::temp_dir().join(format!(
        "fontreel_config_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("reel.json");
    std::fs::write(
        &path,
        r#"{ "fonts": [
            { "family": "Rel", "path": "fonts/Rel.ttf" },
            { "family": "Abs", "path": "/opt/fonts/Abs.ttf" }
        ], "fonts_dir": "more" }"#,
    )
    .unwrap();

    let cfg = ReelConfig::from_path(&path).unwrap();
    assert_eq!(cfg.fonts[0].path, dir.join("fonts/Rel.ttf"));
    assert_eq!(cfg.fonts[1].path, PathBuf::from("/opt/fonts/Abs.ttf"));
    assert_eq!(cfg.fonts_dir, Some(dir.join("more")));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_is_an_error() {
    assert!(ReelConfig::from_path(Path::new("/nonexistent/fontreel/reel.json")).is_err());
}

fn with(edit: impl FnOnce(&mut ReelConfig)) -> ReelConfig {
    let mut cfg = ReelConfig::default();
    edit(&mut cfg);
    cfg
}

#[test]
fn validate_rejects_bad_values() {
    let bad: Vec<(&str, ReelConfig)> = vec![
        ("empty text", with(|c| c.text = "  ".into())),
        ("zero width", with(|c| c.width = 0)),
        ("odd height", with(|c| c.height = 1921)),
        ("too wide", with(|c| c.width = 70_000)),
        ("zero fps", with(|c| c.fps = 0)),
        ("zero secs", with(|c| c.seconds_per_font = 0.0)),
        ("nan secs", with(|c| c.seconds_per_font = f64::NAN)),
        ("huge secs", with(|c| c.seconds_per_font = 1e18)),
        ("no output", with(|c| c.output = PathBuf::new())),
        (
            "translucent background",
            with(|c| c.background = Rgba8 { a: 128, ..Rgba8::BLACK }),
        ),
    ];
    for (what, cfg) in bad {
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ReelError::Validation(_)), "{what}: {err}");
    }
}

#[test]
fn long_hold_below_frame_limit_is_accepted() {
    let cfg = with(|c| c.seconds_per_font = 3600.0);
    cfg.validate().unwrap();
}

#[test]
fn descriptive_field_names_are_accepted() {
    let json = r#"{
        "text": "Hi",
        "canvas_width": 720,
        "canvas_height": 1280,
        "frame_rate": 24,
        "seconds_per_font": 1.5,
        "output_path": "x.mp4"
    }"#;
    let cfg = ReelConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!((cfg.width, cfg.height, cfg.fps), (720, 1280, 24));
    assert_eq!(cfg.seconds_per_font, 1.5);
    assert_eq!(cfg.output, PathBuf::from("x.mp4"));
    cfg.validate().unwrap();
}

#[test]
fn canvas_carries_colors() {
    let cfg = ReelConfig {
        background: Rgba8::opaque(10, 20, 30),
        ..ReelConfig::default()
    };
    let c = cfg.canvas();
    assert_eq!((c.width, c.height), (1080, 1920));
    assert_eq!(c.background, Rgba8::opaque(10, 20, 30));
    assert_eq!(c.foreground, Rgba8::WHITE);
}
