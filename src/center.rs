//! Centered-item tracking.
//!
//! Desktop layouts poll geometry on scroll and resize; narrow viewports rely
//! on intersection ratios inside a band around the gallery midline. Exactly
//! one of the two is attached per lifecycle cycle.

use std::cell::RefCell;
use std::rc::Rc;

use galleria_core::{
    band_margin, pick_centered, pick_highest_ratio, Axis, CenterStrategyKind, EngineConfig,
    IntersectionSample, Rect,
};
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::Element;

use crate::dom::{self, HasClientRect};
use crate::observer::ObserverHandle;
use crate::page_config;

pub(crate) struct CenterContext<'a> {
    pub(crate) gallery: &'a Element,
    pub(crate) items: &'a [Element],
    pub(crate) axis: Axis,
    pub(crate) config: &'a Rc<EngineConfig>,
}

pub(crate) trait CenterStrategy {
    fn kind(&self) -> CenterStrategyKind;

    fn attach(&self, cx: CenterContext<'_>) -> Option<CenterTracker>;
}

/// Live tracking resources for the current cycle. Dropping detaches them.
pub(crate) struct CenterTracker {
    kind: CenterStrategyKind,
    _geometric: Option<GeometricTracker>,
    _observer: Option<ObserverHandle>,
}

impl CenterTracker {
    fn geometric(tracker: GeometricTracker) -> Self {
        Self {
            kind: CenterStrategyKind::Geometric,
            _geometric: Some(tracker),
            _observer: None,
        }
    }

    fn ratio(observer: ObserverHandle) -> Self {
        Self {
            kind: CenterStrategyKind::VisibilityRatio,
            _geometric: None,
            _observer: Some(observer),
        }
    }

    pub(crate) fn kind(&self) -> CenterStrategyKind {
        self.kind
    }
}

pub(crate) fn strategy_for(kind: CenterStrategyKind) -> &'static dyn CenterStrategy {
    match kind {
        CenterStrategyKind::Geometric => &GeometricCenter,
        CenterStrategyKind::VisibilityRatio => &RatioCenter,
    }
}

/// Marks the item closest to the gallery midpoint with the centered class and
/// clears it everywhere else. Items are queried fresh on every call.
pub fn compute_centered(gallery: &Element, config: &EngineConfig) -> Option<Element> {
    let axis = page_config::layout_policy(config, gallery).axis;
    let items = dom::query_all_within(gallery, &config.item_selector);
    mark_centered(gallery, &items, axis, config)
}

fn mark_centered(
    gallery: &Element,
    items: &[Element],
    axis: Axis,
    config: &EngineConfig,
) -> Option<Element> {
    if items.is_empty() {
        return None;
    }
    let rects = items
        .iter()
        .map(|item| item.layout_rect())
        .collect::<Vec<Rect>>();
    let index = pick_centered(gallery.layout_rect(), axis, &rects, config.visibility_bias)?;
    let winner = items.get(index)?.clone();
    dom::mark_exclusive(items, &winner, &config.centered_class);
    if config.debug {
        gloo::console::log!("galleria: centered item", index as u32);
    }
    Some(winner)
}

pub(crate) struct GeometricCenter;

pub(crate) struct GeometricTracker {
    _listeners: Vec<EventListener>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
}

impl Drop for GeometricTracker {
    fn drop(&mut self) {
        self.frame.borrow_mut().take();
    }
}

impl CenterStrategy for GeometricCenter {
    fn kind(&self) -> CenterStrategyKind {
        CenterStrategyKind::Geometric
    }

    fn attach(&self, cx: CenterContext<'_>) -> Option<CenterTracker> {
        let window = web_sys::window()?;
        let frame = Rc::new(RefCell::new(None::<AnimationFrame>));
        let mut listeners = Vec::with_capacity(2);

        let on_scroll = {
            let frame = frame.clone();
            let gallery = cx.gallery.clone();
            let config = cx.config.clone();
            EventListener::new(cx.gallery, "scroll", move |_| {
                queue_recompute(&frame, &gallery, &config);
            })
        };
        listeners.push(on_scroll);

        let on_resize = {
            let frame = frame.clone();
            let gallery = cx.gallery.clone();
            let config = cx.config.clone();
            EventListener::new(&window, "resize", move |_| {
                queue_recompute(&frame, &gallery, &config);
            })
        };
        listeners.push(on_resize);

        mark_centered(cx.gallery, cx.items, cx.axis, cx.config);
        Some(CenterTracker::geometric(GeometricTracker {
            _listeners: listeners,
            frame,
        }))
    }
}

/// Coalesces bursts of scroll/resize events into one computation per frame.
fn queue_recompute(
    frame: &Rc<RefCell<Option<AnimationFrame>>>,
    gallery: &Element,
    config: &Rc<EngineConfig>,
) {
    if frame.borrow().is_some() {
        return;
    }
    let pending = frame.clone();
    let gallery = gallery.clone();
    let config = config.clone();
    let handle = request_animation_frame(move |_| {
        pending.borrow_mut().take();
        compute_centered(&gallery, &config);
    });
    *frame.borrow_mut() = Some(handle);
}

pub(crate) struct RatioCenter;

impl CenterStrategy for RatioCenter {
    fn kind(&self) -> CenterStrategyKind {
        CenterStrategyKind::VisibilityRatio
    }

    fn attach(&self, cx: CenterContext<'_>) -> Option<CenterTracker> {
        if cx.items.is_empty() {
            return None;
        }
        let observed = cx.items.to_vec();
        let config = cx.config.clone();
        let margin = band_margin(cx.axis, config.center_band_percent);
        let thresholds = config.center_thresholds.clone();
        let result = ObserverHandle::observe(
            Some(cx.gallery),
            &margin,
            &thresholds,
            cx.items,
            move |entries| {
                let samples = entries
                    .iter()
                    .filter_map(|entry| {
                        let target = entry.target();
                        let index = observed.iter().position(|item| *item == target)?;
                        Some(IntersectionSample {
                            index,
                            ratio: entry.intersection_ratio(),
                            intersecting: entry.is_intersecting(),
                        })
                    })
                    .collect::<Vec<_>>();
                let Some(index) = pick_highest_ratio(&samples, config.center_min_ratio) else {
                    return;
                };
                let Some(winner) = observed.get(index) else {
                    return;
                };
                dom::mark_exclusive(&observed, winner, &config.centered_class);
                if config.debug {
                    gloo::console::log!("galleria: centered item (ratio)", index as u32);
                }
            },
        );
        match result {
            Ok(handle) => Some(CenterTracker::ratio(handle)),
            Err(err) => {
                gloo::console::warn!("galleria: center observer failed", dom::js_err(err));
                None
            }
        }
    }
}
