use std::cell::RefCell;
use std::rc::Rc;

use galleria_core::{Axis, EngineConfig, TickStep};
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use web_sys::Element;

use crate::dom;

#[derive(Clone)]
struct TickerTarget {
    gallery: Element,
    axis: Axis,
    step: f64,
    interval_ms: u32,
}

/// Auto-scroll driver. At most one interval is live; `start` and `stop` are
/// both idempotent.
pub(crate) struct AutoScroll {
    target: RefCell<Option<TickerTarget>>,
    interval: RefCell<Option<Interval>>,
}

impl AutoScroll {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            target: RefCell::new(None),
            interval: RefCell::new(None),
        })
    }

    /// Points the ticker at a new gallery. Always stops first.
    pub(crate) fn configure(&self, gallery: &Element, axis: Axis, config: &EngineConfig) {
        self.stop();
        *self.target.borrow_mut() = Some(TickerTarget {
            gallery: gallery.clone(),
            axis,
            step: config.tick_step_px,
            interval_ms: config.tick_interval_ms,
        });
    }

    /// Stops and forgets the gallery; `start` is a no-op until reconfigured.
    pub(crate) fn clear(&self) {
        self.stop();
        self.target.borrow_mut().take();
    }

    pub(crate) fn start(&self) -> bool {
        if self.is_running() {
            return false;
        }
        let Some(target) = self.target.borrow().clone() else {
            return false;
        };
        let interval_ms = target.interval_ms;
        let interval = Interval::new(interval_ms, move || {
            let extent = dom::scroll_extent(&target.gallery);
            let step = TickStep {
                offset: dom::scroll_offset(&target.gallery, target.axis),
                visible: extent.visible(target.axis),
                content: extent.content(target.axis),
                step: target.step,
            };
            dom::set_scroll_offset(&target.gallery, target.axis, step.next());
        });
        *self.interval.borrow_mut() = Some(interval);
        true
    }

    pub(crate) fn stop(&self) -> bool {
        self.interval.borrow_mut().take().is_some()
    }

    pub(crate) fn is_running(&self) -> bool {
        self.interval.borrow().is_some()
    }
}

/// Pauses the ticker while the pointer is over the gallery.
pub(crate) fn hover_pause(gallery: &Element, ticker: &Rc<AutoScroll>) -> Vec<EventListener> {
    let on_enter = {
        let ticker = ticker.clone();
        EventListener::new(gallery, "mouseenter", move |_| {
            ticker.stop();
        })
    };
    let on_leave = {
        let ticker = ticker.clone();
        EventListener::new(gallery, "mouseleave", move |_| {
            ticker.start();
        })
    };
    vec![on_enter, on_leave]
}
