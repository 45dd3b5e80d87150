//! Decisions taken on intersection notification batches.

use crate::category::{
    normalize_category, CategoryIndex, SelectionChange, ThumbSelection, TitleLines,
};
use crate::geometry::Axis;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub index: usize,
    pub ratio: f64,
    pub intersecting: bool,
}

/// Sample with the highest ratio strictly above `min_ratio`. Ties keep the
/// earlier sample; a batch with nothing above the floor yields `None` so the
/// previous highlight stays in place.
pub fn pick_highest_ratio(samples: &[IntersectionSample], min_ratio: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for sample in samples {
        if !sample.intersecting && sample.ratio <= 0.0 {
            continue;
        }
        let floor = best.map(|(_, ratio)| ratio).unwrap_or(min_ratio);
        if sample.ratio > floor {
            best = Some((sample.index, sample.ratio));
        }
    }
    best.map(|(index, _)| index)
}

/// Root margin that shrinks the observer root to a band around its midline.
pub fn band_margin(axis: Axis, inset_percent: f64) -> String {
    let inset = format!("-{}%", inset_percent.abs());
    match axis {
        Axis::Vertical => format!("{inset} 0px {inset} 0px"),
        Axis::Horizontal => format!("0px {inset} 0px {inset}"),
    }
}

/// What to write to the page when an item enters the category band.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryUpdate {
    pub key: String,
    pub title: TitleLines,
    pub selection: Option<SelectionChange>,
}

/// Turns an entering item's label into title text and a thumbnail move.
/// Blank labels produce nothing.
pub fn category_update(
    label: &str,
    index: &CategoryIndex,
    selection: &mut ThumbSelection,
) -> Option<CategoryUpdate> {
    let key = normalize_category(label)?;
    let title = TitleLines::from_label(label)?;
    let selection = index
        .thumb_for(&key)
        .map(|thumb_id| selection.select(thumb_id));
    Some(CategoryUpdate {
        key,
        title,
        selection,
    })
}
