use galleria_core::{
    band_margin, category_update, pick_highest_ratio, Axis, CategoryIndex, IntersectionSample,
    ThumbSelection,
};

fn sample(index: usize, ratio: f64) -> IntersectionSample {
    IntersectionSample {
        index,
        ratio,
        intersecting: ratio > 0.0,
    }
}

#[test]
fn highest_ratio_wins() {
    let batch = [sample(0, 0.25), sample(1, 0.75), sample(2, 0.5)];
    assert_eq!(pick_highest_ratio(&batch, 0.0), Some(1));
}

#[test]
fn equal_ratios_keep_first() {
    let batch = [sample(3, 0.5), sample(4, 0.5)];
    assert_eq!(pick_highest_ratio(&batch, 0.0), Some(3));
}

#[test]
fn batch_without_intersections_changes_nothing() {
    let batch = [sample(0, 0.0), sample(1, 0.0)];
    assert_eq!(pick_highest_ratio(&batch, 0.0), None);
    assert_eq!(pick_highest_ratio(&[], 0.0), None);
}

#[test]
fn ratios_at_or_below_floor_are_ignored() {
    let batch = [sample(0, 0.2), sample(1, 0.25)];
    assert_eq!(pick_highest_ratio(&batch, 0.25), None);
    assert_eq!(pick_highest_ratio(&batch, 0.1), Some(1));
}

#[test]
fn band_margin_follows_axis() {
    assert_eq!(band_margin(Axis::Vertical, 45.0), "-45% 0px -45% 0px");
    assert_eq!(band_margin(Axis::Horizontal, 50.0), "0px -50% 0px -50%");
}

#[test]
fn category_update_renders_title_and_moves_selection() {
    let index = CategoryIndex::default();
    let mut selection = ThumbSelection::new();

    let first = category_update(" Bronze ", &index, &mut selection).expect("update");
    assert_eq!(first.key, "bronze");
    assert_eq!(first.title.first, "Bronze");
    assert_eq!(first.title.rest, None);
    let change = first.selection.expect("selection");
    assert_eq!(change.deselect, None);
    assert_eq!(change.select, "bronze-cat");

    let second = category_update("Painted", &index, &mut selection).expect("update");
    let change = second.selection.expect("selection");
    assert_eq!(change.deselect.as_deref(), Some("bronze-cat"));
    assert_eq!(selection.current(), Some("painted-cat"));
}

#[test]
fn unknown_category_updates_title_only() {
    let index = CategoryIndex::default();
    let mut selection = ThumbSelection::new();
    selection.select("bronze-cat");

    let update = category_update("Mixed Media", &index, &mut selection).expect("update");
    assert_eq!(update.title.first, "Mixed");
    assert_eq!(update.title.rest.as_deref(), Some("Media"));
    assert_eq!(update.selection, None);
    assert_eq!(selection.current(), Some("bronze-cat"));
}

#[test]
fn blank_label_is_skipped() {
    let index = CategoryIndex::default();
    let mut selection = ThumbSelection::new();
    assert_eq!(category_update("  ", &index, &mut selection), None);
    assert_eq!(selection.current(), None);
}
