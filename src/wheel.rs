use galleria_core::{wheel_scroll_delta, Axis};
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, WheelEvent};

use crate::dom::{self, HasClientRect};

/// Window-wide wheel listener that scrolls `gallery` along its active axis
/// instead of the page. Non-passive so the native scroll can be cancelled.
pub(crate) fn install_redirect(gallery: &Element, axis: Axis) -> Option<EventListener> {
    let window = web_sys::window()?;
    let gallery = gallery.clone();
    let options = EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    };
    Some(EventListener::new_with_options(
        &window,
        "wheel",
        options,
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            let Some(viewport_height) = dom::viewport_height() else {
                return;
            };
            let Some(delta) =
                wheel_scroll_delta(event.delta_y(), gallery.layout_rect(), viewport_height)
            else {
                return;
            };
            let offset = dom::scroll_offset(&gallery, axis);
            dom::set_scroll_offset(&gallery, axis, offset + delta);
            event.prevent_default();
        },
    ))
}
