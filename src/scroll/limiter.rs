//! Rate limiting for high-frequency browser events.
//!
//! Two strategies, matching the two the page needs: `FrameGate` coalesces
//! scroll events to at most one recompute per animation frame, and
//! `Debouncer` collapses resize bursts into one trailing call.
use std::cell::Cell;
use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Resize waits for this quiet period before remeasuring.
pub const RESIZE_WINDOW_MS: u32 = 250;

/// One-recompute-per-frame gate. `admit` returns true for the first event
/// of a frame and false until `settle` marks the scheduled recompute done.
#[derive(Debug, Default)]
pub struct FrameGate {
    ticking: Cell<bool>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admit(&self) -> bool {
        if self.ticking.get() {
            false
        } else {
            self.ticking.set(true);
            true
        }
    }

    pub fn settle(&self) {
        self.ticking.set(false);
    }
}

/// Trailing-edge debounce: each call re-arms the timer, so the callback
/// runs once per burst, `window_ms` after the last event. Dropping the
/// debouncer (or calling `cancel`) drops the pending timeout with it.
pub struct Debouncer {
    window_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call(&self, f: impl FnOnce() + 'static) {
        let pending = self.pending.clone();
        let timeout = Timeout::new(self.window_ms, move || {
            pending.borrow_mut().take();
            f();
        });
        // replacing the previous handle cancels it
        *self.pending.borrow_mut() = Some(timeout);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_admits_first_event_only() {
        let gate = FrameGate::new();
        assert!(gate.admit());
        // burst of events inside the same frame
        for _ in 0..50 {
            assert!(!gate.admit());
        }
    }

    #[test]
    fn gate_reopens_after_settle() {
        let gate = FrameGate::new();
        assert!(gate.admit());
        gate.settle();
        assert!(gate.admit());
    }

    #[test]
    fn settle_without_admit_is_harmless() {
        let gate = FrameGate::new();
        gate.settle();
        assert!(gate.admit());
    }
}
