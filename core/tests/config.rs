use galleria_core::{ConfigError, EngineConfig};

#[test]
fn empty_object_yields_defaults() {
    let config = EngineConfig::from_json("{}").expect("config");
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.settle_delay_ms, 50);
    assert_eq!(config.jump_resume_ms, 1_500);
    assert_eq!(config.tick_interval_ms, 20);
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = EngineConfig::from_json(
        r##"{"gallery_selector": "#works", "debug": true, "wheel_routes": ["/"]}"##,
    )
    .expect("config");
    assert_eq!(config.gallery_selector, "#works");
    assert!(config.debug);
    assert!(config.is_wheel_route("/"));
    assert!(!config.is_wheel_route("/press"));
    assert_eq!(config.centered_class, "in-center");
}

#[test]
fn custom_categories_build_index() {
    let config = EngineConfig::from_json(
        r#"{"categories": [{"key": "Glass", "thumb_id": "glass-cat"}]}"#,
    )
    .expect("config");
    let index = config.category_index();
    assert_eq!(index.thumb_for("glass"), Some("glass-cat"));
    assert_eq!(index.thumb_for("bronze"), None);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = EngineConfig::from_json(r##"{"galery_selector": "#x"}"##).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn invalid_values_are_rejected() {
    assert_eq!(
        EngineConfig::from_json(r#"{"tick_interval_ms": 0}"#),
        Err(ConfigError::ZeroInterval)
    );
    assert_eq!(
        EngineConfig::from_json(r#"{"title_selector": "  "}"#),
        Err(ConfigError::Empty {
            field: "title_selector"
        })
    );
    assert_eq!(
        EngineConfig::from_json(r#"{"center_thresholds": [0.0, 1.5]}"#),
        Err(ConfigError::OutOfRange {
            field: "center_thresholds",
            value: 1.5
        })
    );
    assert!(matches!(
        EngineConfig::from_json(r#"{"tick_step_px": -1.0}"#),
        Err(ConfigError::InvalidStep(_))
    ));
}

#[test]
fn errors_render_readable_messages() {
    assert_eq!(
        ConfigError::ZeroInterval.to_string(),
        "tick_interval_ms must be positive"
    );
    assert_eq!(
        ConfigError::OutOfRange {
            field: "center_min_ratio",
            value: 2.0
        }
        .to_string(),
        "center_min_ratio out of range: 2"
    );
}
