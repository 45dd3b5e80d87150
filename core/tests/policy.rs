use galleria_core::{
    Axis, CenterStrategyKind, EngineConfig, LayoutMode, LayoutPolicy, RouteProfile, ScrollExtent,
};

const WIDE: ScrollExtent = ScrollExtent {
    scroll_width: 2_000.0,
    client_width: 800.0,
    scroll_height: 600.0,
    client_height: 600.0,
};

const TALL: ScrollExtent = ScrollExtent {
    scroll_width: 800.0,
    client_width: 800.0,
    scroll_height: 3_000.0,
    client_height: 600.0,
};

#[test]
fn desktop_horizontal_uses_geometry_without_autoscroll() {
    let config = EngineConfig::default();
    let policy = LayoutPolicy::evaluate(&config, &RouteProfile::new("/", false), WIDE);
    assert_eq!(policy.mode, LayoutMode::DesktopHorizontal);
    assert_eq!(policy.axis, Axis::Horizontal);
    assert_eq!(policy.strategy, CenterStrategyKind::Geometric);
    assert!(!policy.autoscroll);
    assert!(policy.wheel_capture);
}

#[test]
fn horizontal_autoscroll_is_opt_in() {
    let config = EngineConfig {
        autoscroll_horizontal: true,
        ..EngineConfig::default()
    };
    let policy = LayoutPolicy::evaluate(&config, &RouteProfile::new("/", false), WIDE);
    assert!(policy.autoscroll);
}

#[test]
fn desktop_vertical_autoscrolls() {
    let config = EngineConfig::default();
    let policy = LayoutPolicy::evaluate(&config, &RouteProfile::new("/press", false), TALL);
    assert_eq!(policy.mode, LayoutMode::DesktopVertical);
    assert_eq!(policy.axis, Axis::Vertical);
    assert_eq!(policy.strategy, CenterStrategyKind::Geometric);
    assert!(policy.autoscroll);
    assert!(policy.wheel_capture);
}

#[test]
fn narrow_press_scrolls_natively() {
    let config = EngineConfig::default();
    let policy = LayoutPolicy::evaluate(&config, &RouteProfile::new("/press", true), WIDE);
    assert_eq!(policy.mode, LayoutMode::Mobile);
    assert_eq!(policy.axis, Axis::Vertical);
    assert_eq!(policy.strategy, CenterStrategyKind::VisibilityRatio);
    assert!(policy.native_scroll);
    assert!(!policy.autoscroll);
}

#[test]
fn narrow_press_keeps_vertical_wheel_redirect() {
    let config = EngineConfig::default();
    let policy = LayoutPolicy::evaluate(&config, &RouteProfile::new("/press", true), TALL);
    assert!(policy.native_scroll);
    assert_eq!(policy.axis, Axis::Vertical);
    assert!(policy.wheel_capture);
}

#[test]
fn narrow_home_keeps_engine_motion() {
    let config = EngineConfig::default();
    let policy = LayoutPolicy::evaluate(&config, &RouteProfile::new("/", true), TALL);
    assert_eq!(policy.mode, LayoutMode::Mobile);
    assert_eq!(policy.strategy, CenterStrategyKind::VisibilityRatio);
    assert!(!policy.native_scroll);
    assert!(policy.autoscroll);
    assert!(policy.wheel_capture);
}

#[test]
fn wheel_capture_respects_allow_list() {
    let config = EngineConfig::default();
    let policy = LayoutPolicy::evaluate(&config, &RouteProfile::new("/about", false), TALL);
    assert!(!policy.wheel_capture);
}
