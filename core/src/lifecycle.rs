//! Lifecycle bookkeeping shared by the browser engine.
//!
//! Listener and timer handles release their resource on drop, so a [`Slot`]
//! owning one is enough to guarantee that the previous resource is gone before
//! its replacement is acquired.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Active,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Activate,
    Reset,
}

#[derive(Clone, Copy, Debug)]
pub struct Lifecycle {
    phase: Phase,
    cycles: u64,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            cycles: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn begin_cycle(&mut self) -> Transition {
        let transition = match self.phase {
            Phase::Idle => Transition::Activate,
            Phase::Active => Transition::Reset,
        };
        self.phase = Phase::Active;
        self.cycles = self.cycles.saturating_add(1);
        transition
    }
}

/// Holds at most one live resource of a kind.
#[derive(Debug)]
pub struct Slot<T> {
    held: Option<T>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self { held: None }
    }
}

impl<T> Slot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.held.as_ref()
    }

    /// Drops the held resource. Returns whether there was one.
    pub fn release(&mut self) -> bool {
        self.held.take().is_some()
    }

    /// Releases the current resource, then stores whatever `acquire` returns.
    /// `acquire` never runs while the old resource is alive.
    pub fn reacquire<F>(&mut self, acquire: F) -> bool
    where
        F: FnOnce() -> Option<T>,
    {
        self.release();
        self.held = acquire();
        self.held.is_some()
    }
}

/// Live listener and timer counts, per kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResourceCounts {
    pub category_observers: usize,
    pub center_trackers: usize,
    pub wheel_listeners: usize,
    pub hover_listeners: usize,
    pub tickers: usize,
    pub jump_bindings: usize,
    pub pending_resumes: usize,
    pub pending_settles: usize,
}
