use crate::geometry::Rect;

/// Scroll delta to apply to the gallery for a wheel gesture, or `None` when the
/// page should scroll natively: a zero vertical delta, or a gallery entirely
/// above or below the viewport.
pub fn wheel_scroll_delta(delta_y: f64, gallery: Rect, viewport_height: f64) -> Option<f64> {
    if delta_y == 0.0 || !delta_y.is_finite() {
        return None;
    }
    if !gallery.overlaps_viewport_vertically(viewport_height) {
        return None;
    }
    Some(delta_y)
}
