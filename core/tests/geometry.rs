use galleria_core::{pick_centered, Axis, Rect, ScrollExtent};

fn row(lefts: &[f64], width: f64) -> Vec<Rect> {
    lefts
        .iter()
        .map(|left| Rect::new(*left, 0.0, width, 100.0))
        .collect()
}

#[test]
fn middle_of_three_equal_items_is_centered() {
    let container = Rect::new(0.0, 0.0, 300.0, 100.0);
    let items = row(&[0.0, 100.0, 200.0], 100.0);
    assert_eq!(pick_centered(container, Axis::Horizontal, &items, true), Some(1));
    assert_eq!(pick_centered(container, Axis::Horizontal, &items, false), Some(1));
}

#[test]
fn empty_items_yield_none() {
    let container = Rect::new(0.0, 0.0, 300.0, 100.0);
    assert_eq!(pick_centered(container, Axis::Horizontal, &[], true), None);
}

#[test]
fn ties_keep_document_order() {
    let container = Rect::new(0.0, 0.0, 200.0, 100.0);
    // Both midpoints sit 50px from the container midpoint.
    let items = row(&[0.0, 100.0], 100.0);
    assert_eq!(pick_centered(container, Axis::Horizontal, &items, false), Some(0));
}

#[test]
fn bias_prefers_large_item_over_small_one_on_midpoint() {
    let container = Rect::new(0.0, 0.0, 400.0, 100.0);
    let items = vec![
        // Small item exactly on the midpoint.
        Rect::new(195.0, 0.0, 10.0, 100.0),
        // Large item slightly off-center.
        Rect::new(30.0, 0.0, 360.0, 100.0),
    ];
    assert_eq!(pick_centered(container, Axis::Horizontal, &items, false), Some(0));
    assert_eq!(pick_centered(container, Axis::Horizontal, &items, true), Some(1));
}

#[test]
fn container_partly_off_screen_uses_its_own_midpoint() {
    // Container scrolled half above the viewport top.
    let container = Rect::new(0.0, -200.0, 100.0, 400.0);
    let items = vec![
        Rect::new(0.0, -200.0, 100.0, 100.0),
        Rect::new(0.0, -100.0, 100.0, 100.0),
        Rect::new(0.0, 0.0, 100.0, 100.0),
        Rect::new(0.0, 100.0, 100.0, 100.0),
    ];
    // Midpoint is at y = 0; items 1 and 2 are equally close, first wins.
    assert_eq!(pick_centered(container, Axis::Vertical, &items, false), Some(1));
}

#[test]
fn orientation_follows_horizontal_overflow() {
    let horizontal = ScrollExtent {
        scroll_width: 900.0,
        client_width: 300.0,
        scroll_height: 300.0,
        client_height: 300.0,
    };
    assert_eq!(horizontal.axis(), Axis::Horizontal);

    let vertical = ScrollExtent {
        scroll_width: 300.0,
        client_width: 300.0,
        scroll_height: 900.0,
        client_height: 300.0,
    };
    assert_eq!(vertical.axis(), Axis::Vertical);
    assert_eq!(vertical.content(Axis::Vertical), 900.0);
    assert_eq!(vertical.visible(Axis::Vertical), 300.0);
}

#[test]
fn nan_rects_are_skipped() {
    let container = Rect::new(0.0, 0.0, 300.0, 100.0);
    let items = vec![
        Rect::new(f64::NAN, 0.0, 100.0, 100.0),
        Rect::new(200.0, 0.0, 100.0, 100.0),
    ];
    assert_eq!(pick_centered(container, Axis::Horizontal, &items, true), Some(1));
}
