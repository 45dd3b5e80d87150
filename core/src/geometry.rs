//! Layout-independent centered-item math.
//!
//! Rectangles are in viewport coordinates, as reported by
//! `getBoundingClientRect`, so the container midpoint stays correct when the
//! container itself is scrolled partly off-screen.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn midpoint(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left + self.width / 2.0,
            Axis::Vertical => self.top + self.height / 2.0,
        }
    }

    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// True when any part of the rect lies between `0` and `viewport_height`.
    pub fn overlaps_viewport_vertically(&self, viewport_height: f64) -> bool {
        !(self.bottom() < 0.0 || self.top > viewport_height)
    }
}

/// Scroll metrics of a container, mirroring `scrollWidth`/`clientWidth` and
/// their vertical counterparts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollExtent {
    pub scroll_width: f64,
    pub client_width: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollExtent {
    pub fn axis(&self) -> Axis {
        if self.scroll_width > self.client_width {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    pub fn content(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.scroll_width,
            Axis::Vertical => self.scroll_height,
        }
    }

    pub fn visible(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.client_width,
            Axis::Vertical => self.client_height,
        }
    }
}

/// Index of the item whose midpoint is closest to the container midpoint on
/// `axis`. With `bias`, half of `min(item extent, container extent)` is taken
/// off each distance so a large, mostly centered item beats a small one that
/// sits exactly on the midpoint. Ties keep the earlier item.
pub fn pick_centered(container: Rect, axis: Axis, items: &[Rect], bias: bool) -> Option<usize> {
    let container_mid = container.midpoint(axis);
    let container_extent = container.extent(axis);
    let mut best: Option<(usize, f64)> = None;
    for (index, item) in items.iter().enumerate() {
        let mut distance = (item.midpoint(axis) - container_mid).abs();
        if bias {
            distance -= item.extent(axis).min(container_extent) / 2.0;
        }
        if distance.is_nan() {
            continue;
        }
        match best {
            Some((_, closest)) if distance >= closest => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}
