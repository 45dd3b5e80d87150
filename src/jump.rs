use std::cell::RefCell;
use std::rc::{Rc, Weak};

use galleria_core::{category_from_thumb, plan_jump, Align, EngineConfig, ResumeTrigger, Slot};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;
use crate::page_config;
use crate::ticker::AutoScroll;

/// Click handler on a thumbnail's image, or on the thumbnail itself when it
/// has none.
struct JumpBinding {
    target: Element,
    _listener: EventListener,
}

/// Whichever of the two resume triggers was armed.
struct PendingResume {
    _scroll_end: Option<EventListener>,
    _timeout: Option<Timeout>,
}

/// Click-to-center for the category thumbnails. Bindings survive lifecycle
/// cycles: click targets already bound are skipped, detached ones are dropped.
pub(crate) struct JumpController {
    config: Rc<EngineConfig>,
    ticker: Rc<AutoScroll>,
    bindings: RefCell<Vec<JumpBinding>>,
    resume: RefCell<Slot<PendingResume>>,
}

impl JumpController {
    pub(crate) fn new(config: Rc<EngineConfig>, ticker: Rc<AutoScroll>) -> Rc<Self> {
        Rc::new(Self {
            config,
            ticker,
            bindings: RefCell::new(Vec::new()),
            resume: RefCell::new(Slot::new()),
        })
    }

    /// Binds every thumbnail not bound yet. Returns how many were added.
    pub(crate) fn bind_thumbnails(self: &Rc<Self>) -> usize {
        let mut bindings = self.bindings.borrow_mut();
        bindings.retain(|binding| binding.target.is_connected());
        let mut added = 0;
        for thumb in dom::query_all(&self.config.thumb_selector) {
            let image = thumb.query_selector("img").ok().flatten();
            let alt = image.as_ref().and_then(|image| image.get_attribute("alt"));
            let target = image.unwrap_or_else(|| thumb.clone());
            if bindings.iter().any(|binding| binding.target == target) {
                continue;
            }
            let Some(category) = category_from_thumb(alt.as_deref(), &thumb.id()) else {
                continue;
            };
            if let Some(target) = target.dyn_ref::<HtmlElement>() {
                let _ = target.style().set_property("cursor", "pointer");
            }
            let controller = Rc::downgrade(self);
            let listener = EventListener::new(&target, "click", move |_| {
                if let Some(controller) = controller.upgrade() {
                    controller.jump_to(&category);
                }
            });
            bindings.push(JumpBinding {
                target,
                _listener: listener,
            });
            added += 1;
        }
        added
    }

    /// Smooth-scrolls the first item of `category` to the middle of the
    /// gallery, pausing the ticker until the scroll settles. Returns false
    /// when there is no gallery or no such item; nothing is touched then.
    pub(crate) fn jump_to(self: &Rc<Self>, category: &str) -> bool {
        let Some(gallery) = dom::query(&self.config.gallery_selector) else {
            return false;
        };
        let items = dom::query_all_within(&gallery, &self.config.item_selector);
        let labels = items.iter().map(dom::image_label).collect::<Vec<_>>();
        let axis = page_config::layout_policy(&self.config, &gallery).axis;
        let Some(plan) = plan_jump(labels.iter().map(Option::as_deref), category, axis) else {
            if self.config.debug {
                gloo::console::log!("galleria: no item for category", category.to_string());
            }
            return false;
        };
        let Some(item) = items.get(plan.index) else {
            return false;
        };

        self.ticker.stop();
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(logical_position(plan.block));
        options.set_inline(logical_position(plan.inline));
        item.scroll_into_view_with_scroll_into_view_options(&options);
        self.schedule_resume(&gallery);
        true
    }

    fn schedule_resume(self: &Rc<Self>, gallery: &Element) {
        let trigger = ResumeTrigger::select(scrollend_supported(), self.config.jump_resume_ms);
        let controller = Rc::downgrade(self);
        self.resume.borrow_mut().reacquire(|| {
            Some(match trigger {
                ResumeTrigger::ScrollEnd => PendingResume {
                    _scroll_end: Some(EventListener::once(gallery, "scrollend", move |_| {
                        resume_ticker(&controller)
                    })),
                    _timeout: None,
                },
                ResumeTrigger::Timeout(delay_ms) => PendingResume {
                    _scroll_end: None,
                    _timeout: Some(Timeout::new(delay_ms, move || resume_ticker(&controller))),
                },
            })
        });
    }

    pub(crate) fn cancel_resume(&self) {
        self.resume.borrow_mut().release();
    }

    pub(crate) fn binding_count(&self) -> usize {
        self.bindings.borrow().len()
    }

    pub(crate) fn has_pending_resume(&self) -> bool {
        self.resume.borrow().is_held()
    }
}

fn resume_ticker(controller: &Weak<JumpController>) {
    let Some(controller) = controller.upgrade() else {
        return;
    };
    controller.resume.borrow_mut().release();
    controller.ticker.start();
}

fn logical_position(align: Align) -> ScrollLogicalPosition {
    match align {
        Align::Center => ScrollLogicalPosition::Center,
        Align::Nearest => ScrollLogicalPosition::Nearest,
    }
}

fn scrollend_supported() -> bool {
    let Some(document) = dom::document() else {
        return false;
    };
    js_sys::Reflect::has(&document, &JsValue::from_str("onscrollend")).unwrap_or(false)
}
