use galleria_core::{plan_jump, wheel_scroll_delta, Align, Axis, Rect, ResumeTrigger};

#[test]
fn jump_centers_on_active_axis() {
    let labels = [Some("Bronze"), None, Some("Painted"), Some("painted")];
    let plan = plan_jump(labels, "painted", Axis::Vertical).expect("plan");
    assert_eq!(plan.index, 2);
    assert_eq!(plan.block, Align::Center);
    assert_eq!(plan.inline, Align::Nearest);

    let plan = plan_jump(labels, " BRONZE ", Axis::Horizontal).expect("plan");
    assert_eq!(plan.index, 0);
    assert_eq!(plan.block, Align::Nearest);
    assert_eq!(plan.inline, Align::Center);
}

#[test]
fn jump_without_match_plans_nothing() {
    let labels = [Some("Bronze"), Some("Painted")];
    assert_eq!(plan_jump(labels, "jewelry", Axis::Vertical), None);
    assert_eq!(plan_jump(labels, "", Axis::Vertical), None);
}

#[test]
fn resume_prefers_scrollend() {
    assert_eq!(ResumeTrigger::select(true, 1_500), ResumeTrigger::ScrollEnd);
    assert_eq!(ResumeTrigger::select(false, 1_500), ResumeTrigger::Timeout(1_500));
}

#[test]
fn wheel_redirects_only_when_gallery_is_visible() {
    let visible = Rect::new(0.0, 100.0, 800.0, 400.0);
    assert_eq!(wheel_scroll_delta(40.0, visible, 900.0), Some(40.0));
    assert_eq!(wheel_scroll_delta(0.0, visible, 900.0), None);

    let above = Rect::new(0.0, -500.0, 800.0, 400.0);
    assert_eq!(wheel_scroll_delta(40.0, above, 900.0), None);

    let below = Rect::new(0.0, 950.0, 800.0, 400.0);
    assert_eq!(wheel_scroll_delta(-40.0, below, 900.0), None);

    let partly = Rect::new(0.0, -300.0, 800.0, 400.0);
    assert_eq!(wheel_scroll_delta(-40.0, partly, 900.0), Some(-40.0));
}
