use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationSource {
    /// The host router changed the route (push/replace).
    Router,
    /// Browser back/forward.
    PopState,
}

pub(crate) type NavigationHook = Rc<dyn Fn(NavigationSource)>;

thread_local! {
    static NAVIGATION_HOOKS: RefCell<Vec<(u64, NavigationHook)>> = RefCell::new(Vec::new());
    static NEXT_HOOK_ID: RefCell<u64> = RefCell::new(1);
    static POPSTATE_LISTENER: RefCell<Option<EventListener>> = RefCell::new(None);
}

pub(crate) fn add_navigation_hook(hook: NavigationHook) -> u64 {
    NAVIGATION_HOOKS.with(|hooks| {
        let id = NEXT_HOOK_ID.with(|next| {
            let mut next = next.borrow_mut();
            let id = *next;
            *next = next.saturating_add(1);
            id
        });
        hooks.borrow_mut().push((id, hook));
        id
    })
}

pub(crate) fn remove_navigation_hook(id: u64) {
    NAVIGATION_HOOKS.with(|hooks| {
        hooks.borrow_mut().retain(|(hook_id, _)| *hook_id != id);
    });
}

pub(crate) fn notify(source: NavigationSource) {
    let hooks = NAVIGATION_HOOKS.with(|hooks| {
        hooks
            .borrow()
            .iter()
            .map(|(_, hook)| hook.clone())
            .collect::<Vec<_>>()
    });
    for hook in hooks {
        hook(source);
    }
}

/// Funnels the browser's `popstate` into [`notify`]. Installing twice keeps a
/// single listener.
pub(crate) fn install_popstate_bridge() {
    let Some(window) = web_sys::window() else {
        return;
    };
    POPSTATE_LISTENER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return;
        }
        *slot = Some(EventListener::new(&window, "popstate", |_| {
            notify(NavigationSource::PopState);
        }));
    });
}
