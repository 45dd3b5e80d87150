use std::cell::RefCell;
use std::rc::Rc;

use galleria_core::{Lifecycle, Phase, Slot, Transition};

struct Handle {
    id: u32,
    log: Rc<RefCell<Vec<String>>>,
}

impl Handle {
    fn acquire(id: u32, log: &Rc<RefCell<Vec<String>>>) -> Self {
        log.borrow_mut().push(format!("acquire {id}"));
        Self {
            id,
            log: log.clone(),
        }
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.log.borrow_mut().push(format!("release {}", self.id));
    }
}

#[test]
fn reacquire_releases_before_acquiring() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut slot = Slot::new();
    assert!(slot.reacquire(|| Some(Handle::acquire(1, &log))));
    assert!(slot.reacquire(|| Some(Handle::acquire(2, &log))));
    assert_eq!(*log.borrow(), vec!["acquire 1", "release 1", "acquire 2"]);
    assert_eq!(slot.get().map(|handle| handle.id), Some(2));
}

#[test]
fn failed_acquire_leaves_slot_empty() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut slot = Slot::new();
    slot.reacquire(|| Some(Handle::acquire(1, &log)));
    assert!(!slot.reacquire(|| None));
    assert!(!slot.is_held());
    assert_eq!(*log.borrow(), vec!["acquire 1", "release 1"]);
}

#[test]
fn release_is_idempotent() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut slot = Slot::new();
    slot.reacquire(|| Some(Handle::acquire(7, &log)));
    assert!(slot.release());
    assert!(!slot.release());
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn first_cycle_activates_then_resets() {
    let mut lifecycle = Lifecycle::new();
    assert_eq!(lifecycle.phase(), Phase::Idle);
    assert_eq!(lifecycle.begin_cycle(), Transition::Activate);
    assert_eq!(lifecycle.phase(), Phase::Active);
    assert_eq!(lifecycle.begin_cycle(), Transition::Reset);
    assert_eq!(lifecycle.begin_cycle(), Transition::Reset);
    assert_eq!(lifecycle.cycles(), 3);
}
