use std::cell::RefCell;
use std::rc::Rc;

use galleria_core::{
    CategoryIndex, CenterStrategyKind, EngineConfig, LayoutPolicy, Lifecycle, ResourceCounts, Slot,
    ThumbSelection, Transition,
};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;

use crate::center::{self, CenterContext, CenterTracker};
use crate::dom;
use crate::jump::JumpController;
use crate::navigation::{self, NavigationSource};
use crate::observer::{self, ObserverHandle};
use crate::page_config;
use crate::ticker::{self, AutoScroll};
use crate::wheel;

struct EngineState {
    lifecycle: Lifecycle,
    policy: Option<LayoutPolicy>,
    category_observer: Slot<ObserverHandle>,
    center: Slot<CenterTracker>,
    wheel: Slot<EventListener>,
    hover: Slot<Vec<EventListener>>,
    settle: Slot<Timeout>,
    ready: Slot<EventListener>,
    navigation_hook: Option<u64>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            lifecycle: Lifecycle::new(),
            policy: None,
            category_observer: Slot::new(),
            center: Slot::new(),
            wheel: Slot::new(),
            hover: Slot::new(),
            settle: Slot::new(),
            ready: Slot::new(),
            navigation_hook: None,
        }
    }

    /// Releases everything tied to the current gallery. The ticker is
    /// stopped by the caller before this runs.
    fn release_cycle(&mut self) {
        self.center.release();
        self.category_observer.release();
        self.wheel.release();
        self.hover.release();
        self.policy = None;
    }
}

/// The gallery synchronization controller. One instance per page; every
/// listener and timer it creates is owned by it.
pub struct Engine {
    config: Rc<EngineConfig>,
    index: Rc<CategoryIndex>,
    selection: Rc<RefCell<ThumbSelection>>,
    ticker: Rc<AutoScroll>,
    jumps: Rc<JumpController>,
    state: RefCell<EngineState>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Rc<Self> {
        let config = Rc::new(config);
        let ticker = AutoScroll::new();
        let jumps = JumpController::new(config.clone(), ticker.clone());
        Rc::new(Self {
            index: Rc::new(config.category_index()),
            config,
            selection: Rc::new(RefCell::new(ThumbSelection::new())),
            ticker,
            jumps,
            state: RefCell::new(EngineState::new()),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Subscribes to navigation signals and runs the first cycle, right away
    /// or once the document has finished parsing.
    pub fn install(self: &Rc<Self>) {
        navigation::install_popstate_bridge();
        let engine = Rc::downgrade(self);
        let hook = navigation::add_navigation_hook(Rc::new(move |source| {
            if let Some(engine) = engine.upgrade() {
                engine.on_navigation(source);
            }
        }));
        if let Some(previous) = self.state.borrow_mut().navigation_hook.replace(hook) {
            navigation::remove_navigation_hook(previous);
        }

        let Some(document) = dom::document() else {
            return;
        };
        if document.ready_state() == "loading" {
            let engine = Rc::downgrade(self);
            let listener = EventListener::once(&document, "DOMContentLoaded", move |_| {
                if let Some(engine) = engine.upgrade() {
                    engine.state.borrow_mut().ready.release();
                    engine.run_cycle();
                }
            });
            self.state.borrow_mut().ready.reacquire(|| Some(listener));
        } else {
            self.run_cycle();
        }
    }

    fn on_navigation(self: &Rc<Self>, source: NavigationSource) {
        if self.config.debug {
            gloo::console::log!("galleria: navigation", format!("{source:?}"));
        }
        self.schedule_cycle();
    }

    /// Runs a cycle after the settle delay. A signal arriving while one is
    /// pending replaces it, so bursts collapse into a single cycle.
    pub fn schedule_cycle(self: &Rc<Self>) {
        self.ticker.stop();
        let engine = Rc::downgrade(self);
        let delay_ms = self.config.settle_delay_ms;
        self.state.borrow_mut().settle.reacquire(|| {
            Some(Timeout::new(delay_ms, move || {
                let Some(engine) = engine.upgrade() else {
                    return;
                };
                engine.state.borrow_mut().settle.release();
                engine.run_cycle();
            }))
        });
    }

    /// One lifecycle cycle: tear down whatever the previous cycle wired, then
    /// wire the current page. Thumbnail jump bindings persist across cycles.
    pub fn run_cycle(self: &Rc<Self>) {
        self.ticker.stop();
        let mut state = self.state.borrow_mut();
        let transition = state.lifecycle.begin_cycle();
        state.release_cycle();
        self.jumps.cancel_resume();
        self.ticker.clear();

        let Some(gallery) = dom::query(&self.config.gallery_selector) else {
            if self.config.debug {
                gloo::console::log!("galleria: no gallery on this page");
            }
            drop(state);
            self.jumps.bind_thumbnails();
            return;
        };
        let items = dom::query_all_within(&gallery, &self.config.item_selector);
        let policy = page_config::layout_policy(&self.config, &gallery);
        state.policy = Some(policy);
        dom::apply_overflow(&gallery, policy.axis);

        let strategy = center::strategy_for(policy.strategy);
        state.center.reacquire(|| {
            strategy.attach(CenterContext {
                gallery: &gallery,
                items: &items,
                axis: policy.axis,
                config: &self.config,
            })
        });
        state.category_observer.reacquire(|| {
            observer::observe_categories(
                &items,
                policy.axis,
                &self.config,
                &self.index,
                &self.selection,
            )
        });
        state.wheel.reacquire(|| {
            if policy.wheel_capture {
                wheel::install_redirect(&gallery, policy.axis)
            } else {
                None
            }
        });
        if policy.autoscroll {
            self.ticker.configure(&gallery, policy.axis, &self.config);
            state
                .hover
                .reacquire(|| Some(ticker::hover_pause(&gallery, &self.ticker)));
            self.ticker.start();
        }
        drop(state);

        let bound = self.jumps.bind_thumbnails();
        gloo::console::log!(
            "galleria: cycle",
            match transition {
                Transition::Activate => "activate",
                Transition::Reset => "reset",
            },
            format!("{:?}", policy.mode),
            format!("{:?}", strategy.kind()),
            items.len() as u32,
            bound as u32
        );
    }

    pub fn policy(&self) -> Option<LayoutPolicy> {
        self.state.borrow().policy
    }

    /// Strategy of the live center tracker, if one is attached.
    pub fn center_strategy(&self) -> Option<CenterStrategyKind> {
        self.state.borrow().center.get().map(CenterTracker::kind)
    }

    pub fn ticker_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Same as clicking the thumbnail of `category`.
    pub fn jump_to(&self, category: &str) -> bool {
        self.jumps.jump_to(category)
    }

    pub fn resource_counts(&self) -> ResourceCounts {
        let state = self.state.borrow();
        ResourceCounts {
            category_observers: usize::from(state.category_observer.is_held()),
            center_trackers: usize::from(state.center.is_held()),
            wheel_listeners: usize::from(state.wheel.is_held()),
            hover_listeners: state.hover.get().map(Vec::len).unwrap_or(0),
            tickers: usize::from(self.ticker.is_running()),
            jump_bindings: self.jumps.binding_count(),
            pending_resumes: usize::from(self.jumps.has_pending_resume()),
            pending_settles: usize::from(state.settle.is_held()),
        }
    }
}
