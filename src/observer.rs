use std::cell::RefCell;
use std::rc::Rc;

use galleria_core::{
    band_margin, category_update, Axis, CategoryIndex, EngineConfig, ThumbSelection, TitleLines,
};
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

type BatchCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// A connected `IntersectionObserver`. Dropping it disconnects.
pub(crate) struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: BatchCallback,
}

impl ObserverHandle {
    pub(crate) fn observe<F>(
        root: Option<&Element>,
        root_margin: &str,
        thresholds: &[f64],
        targets: &[Element],
        mut on_batch: F,
    ) -> Result<Self, JsValue>
    where
        F: FnMut(Vec<IntersectionObserverEntry>) + 'static,
    {
        let callback: BatchCallback = Closure::wrap(Box::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let entries = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .collect::<Vec<_>>();
                on_batch(entries);
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root(root);
        options.set_root_margin(root_margin);
        let threshold = thresholds
            .iter()
            .map(|value| JsValue::from_f64(*value))
            .collect::<Array>();
        options.set_threshold(&threshold);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for target in targets {
            observer.observe(target);
        }
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watches items crossing the middle of the viewport and keeps the heading and
/// the thumbnail strip on the category of the latest one.
pub(crate) fn observe_categories(
    items: &[Element],
    axis: Axis,
    config: &Rc<EngineConfig>,
    index: &Rc<CategoryIndex>,
    selection: &Rc<RefCell<ThumbSelection>>,
) -> Option<ObserverHandle> {
    if items.is_empty() {
        return None;
    }
    let margin = band_margin(axis, config.category_band_percent);
    let config = config.clone();
    let index = index.clone();
    let selection = selection.clone();
    let result = ObserverHandle::observe(None, &margin, &[0.0], items, move |entries| {
        for entry in entries {
            if !entry.is_intersecting() {
                continue;
            }
            let Some(label) = dom::image_label(&entry.target()) else {
                continue;
            };
            let Some(update) = category_update(&label, &index, &mut selection.borrow_mut()) else {
                continue;
            };
            if config.debug {
                gloo::console::log!("galleria: category", update.key.clone());
            }
            if let Some(title) = dom::query(&config.title_selector) {
                render_title(&title, &update.title);
            }
            if let Some(change) = update.selection {
                if let Some(previous) = change.deselect.as_deref().and_then(dom::element_by_id) {
                    dom::set_class(&previous, &config.selected_class, false);
                }
                if let Some(next) = dom::element_by_id(&change.select) {
                    dom::set_class(&next, &config.selected_class, true);
                }
            }
        }
    });
    match result {
        Ok(handle) => Some(handle),
        Err(err) => {
            gloo::console::warn!("galleria: category observer failed", dom::js_err(err));
            None
        }
    }
}

/// Writes the heading as text nodes: the first word, a line break, the rest.
pub fn render_title(target: &Element, title: &TitleLines) {
    target.set_text_content(Some(&title.first));
    let Some(rest) = title.rest.as_deref() else {
        return;
    };
    let Some(document) = target.owner_document() else {
        return;
    };
    if let Ok(line_break) = document.create_element("br") {
        let _ = target.append_with_node_1(&line_break);
    }
    let _ = target.append_with_str_1(rest);
}
