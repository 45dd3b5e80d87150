//! In-page gallery synchronization: centered-item tracking, category heading
//! and thumbnail sync, auto-scroll, wheel redirect and click-to-center, rewired
//! on every client-side navigation.
//!
//! The host page loads the module, calls `start()` once, and calls
//! `notifyNavigation()` from its router after every route change.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

mod center;
mod dom;
mod engine;
mod jump;
mod navigation;
mod observer;
mod page_config;
mod ticker;
mod wheel;

pub use center::compute_centered;
pub use engine::Engine;
pub use galleria_core::{
    CenterStrategyKind, EngineConfig, LayoutMode, LayoutPolicy, ResourceCounts, TitleLines,
};
pub use navigation::NavigationSource;
pub use observer::render_title;

thread_local! {
    static ENGINE: RefCell<Option<Rc<Engine>>> = RefCell::new(None);
}

/// Installs the engine with the page's configuration. Later calls are no-ops.
#[wasm_bindgen]
pub fn start() {
    if ENGINE.with(|slot| slot.borrow().is_some()) {
        return;
    }
    let engine = Engine::new(page_config::load_engine_config());
    ENGINE.with(|slot| {
        *slot.borrow_mut() = Some(engine.clone());
    });
    engine.install();
}

/// Called by the host router after a push/replace navigation.
#[wasm_bindgen(js_name = notifyNavigation)]
pub fn notify_navigation() {
    navigation::notify(NavigationSource::Router);
}

/// Re-wires the engine against the current DOM without a settle delay.
#[wasm_bindgen]
pub fn reinitialize() {
    let engine = ENGINE.with(|slot| slot.borrow().clone());
    if let Some(engine) = engine {
        engine.run_cycle();
    }
}

/// Emits a navigation signal to every installed engine.
pub fn notify(source: NavigationSource) {
    navigation::notify(source);
}
