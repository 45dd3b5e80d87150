use galleria_core::{Axis, Rect, ScrollExtent};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomRect, Element, HtmlElement};

pub(crate) trait HasClientRect {
    fn client_rect(&self) -> DomRect;

    fn layout_rect(&self) -> Rect {
        let rect = self.client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

impl HasClientRect for Element {
    fn client_rect(&self) -> DomRect {
        self.get_bounding_client_rect()
    }
}

pub(crate) fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

pub(crate) fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

pub(crate) fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub(crate) fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    collect_elements(&list)
}

pub(crate) fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    collect_elements(&list)
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Alt text of the first image inside `element`, if it has a non-blank one.
pub(crate) fn image_label(element: &Element) -> Option<String> {
    let img = element.query_selector("img").ok().flatten()?;
    let alt = img.get_attribute("alt")?;
    if alt.trim().is_empty() {
        return None;
    }
    Some(alt)
}

pub(crate) fn scroll_extent(element: &Element) -> ScrollExtent {
    ScrollExtent {
        scroll_width: element.scroll_width() as f64,
        client_width: element.client_width() as f64,
        scroll_height: element.scroll_height() as f64,
        client_height: element.client_height() as f64,
    }
}

fn scroll_property(axis: Axis) -> &'static str {
    match axis {
        Axis::Horizontal => "scrollLeft",
        Axis::Vertical => "scrollTop",
    }
}

/// Current scroll position as the browser reports it, sub-pixel part included.
pub(crate) fn scroll_offset(element: &Element, axis: Axis) -> f64 {
    let key = JsValue::from_str(scroll_property(axis));
    if let Some(offset) = js_sys::Reflect::get(element, &key)
        .ok()
        .and_then(|value| value.as_f64())
    {
        return offset;
    }
    match axis {
        Axis::Horizontal => element.scroll_left() as f64,
        Axis::Vertical => element.scroll_top() as f64,
    }
}

pub(crate) fn set_scroll_offset(element: &Element, axis: Axis, offset: f64) {
    let key = JsValue::from_str(scroll_property(axis));
    if js_sys::Reflect::set(element, &key, &JsValue::from_f64(offset)).is_err() {
        let offset = offset.round() as i32;
        match axis {
            Axis::Horizontal => element.set_scroll_left(offset),
            Axis::Vertical => element.set_scroll_top(offset),
        }
    }
}

/// Restricts native overflow to the active axis.
pub(crate) fn apply_overflow(element: &Element, axis: Axis) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = element.style();
    let (x, y) = match axis {
        Axis::Horizontal => ("auto", "hidden"),
        Axis::Vertical => ("hidden", "auto"),
    };
    let _ = style.set_property("overflow-x", x);
    let _ = style.set_property("overflow-y", y);
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

/// Marks exactly `winner` among `items`.
pub(crate) fn mark_exclusive(items: &[Element], winner: &Element, class: &str) {
    for item in items {
        set_class(item, class, item == winner);
    }
}

pub(crate) fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

pub(crate) fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub(crate) fn media_matches(query: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|list| list.matches())
        .unwrap_or(false)
}
