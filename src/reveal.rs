//! Visibility-triggered reveal animations.
//!
//! Targets get the `animate-in` class the first time enough of them enters
//! the viewport. Revealing is a one-way latch: the watcher unobserves each
//! target on its first crossing, so nothing ever un-reveals.
use std::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the target that must be visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Negative bottom margin: the target has to be noticeably inside the
/// viewport, not just touching its edge.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const REVEALED_CLASS: &str = "animate-in";

/// Fires exactly once. Used for run-at-most-once triggers like the stats
/// counter.
#[derive(Debug, Default)]
pub struct OnceLatch {
    fired: Cell<bool>,
}

impl OnceLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// True only on the first call.
    pub fn fire(&self) -> bool {
        !self.fired.replace(true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

/// Adds the revealed class. Returns false when the element already carried
/// it, so repeated crossings are visible no-ops.
pub fn mark_revealed(element: &Element) -> bool {
    let classes = element.class_list();
    if classes.contains(REVEALED_CLASS) {
        return false;
    }
    let _ = classes.add_1(REVEALED_CLASS);
    true
}

/// IntersectionObserver wrapper with the page's reveal contract baked in:
/// 0.1 threshold, -50px bottom margin, unobserve on first crossing.
pub struct RevealWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealWatcher {
    pub fn new(on_reveal: impl Fn(&Element) + 'static) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let target = entry.target();
                        observer.unobserve(&target);
                        on_reveal(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for RevealWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once() {
        let latch = OnceLatch::new();
        assert!(!latch.has_fired());
        assert!(latch.fire());
        assert!(latch.has_fired());
    }

    #[test]
    fn repeated_fires_are_no_ops() {
        let latch = OnceLatch::new();
        assert!(latch.fire());
        for _ in 0..10 {
            assert!(!latch.fire());
        }
        assert!(latch.has_fired());
    }
}
