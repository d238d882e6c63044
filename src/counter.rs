//! Animated stat counters.
//!
//! A stat element displays something like "1500+"; the animator counts the
//! numeric part up from zero in fixed time steps and reattaches the
//! non-numeric remainder each frame. The final frame is clamped to the
//! exact target text.
use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub const COUNTER_TICK_MS: u32 = 50;
pub const COUNTER_STEPS: u32 = 60;

/// Parsed stat text: the digits, and every non-digit character in order.
/// Text without digits yields a zero target.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTarget {
    pub value: u32,
    pub suffix: String,
}

impl CounterTarget {
    pub fn parse(text: &str) -> Self {
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        let suffix: String = text.chars().filter(|c| !c.is_ascii_digit()).collect();
        Self {
            value: digits.parse().unwrap_or(0),
            suffix,
        }
    }

    pub fn final_text(&self) -> String {
        format!("{}{}", self.value, self.suffix)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Running(String),
    Done(String),
}

impl Frame {
    pub fn text(&self) -> &str {
        match self {
            Frame::Running(text) | Frame::Done(text) => text,
        }
    }
}

/// Fixed-step interpolation from zero to the target value. Each tick
/// advances by `value / steps`; the displayed value is the floor of the
/// running total until the total reaches the target, which is then shown
/// exactly.
#[derive(Debug)]
pub struct CounterAnimation {
    target: CounterTarget,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: CounterTarget, steps: u32) -> Self {
        let increment = f64::from(target.value) / f64::from(steps.max(1));
        Self {
            target,
            increment,
            current: 0.0,
        }
    }

    pub fn tick(&mut self) -> Frame {
        self.current += self.increment;
        if self.current >= f64::from(self.target.value) {
            Frame::Done(self.target.final_text())
        } else {
            Frame::Running(format!(
                "{}{}",
                self.current.floor() as u64,
                self.target.suffix
            ))
        }
    }
}

/// Counts a single stat element up to its displayed value. The interval
/// drops itself once the final frame is written.
pub fn animate_element(element: HtmlElement) {
    let text = element.text_content().unwrap_or_default();
    let mut animation = CounterAnimation::new(CounterTarget::parse(&text), COUNTER_STEPS);

    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let slot = handle.clone();
    let interval = Interval::new(COUNTER_TICK_MS, move || match animation.tick() {
        Frame::Running(text) => element.set_text_content(Some(&text)),
        Frame::Done(text) => {
            element.set_text_content(Some(&text));
            slot.borrow_mut().take();
        }
    });
    *handle.borrow_mut() = Some(interval);
}

/// Starts every `.stat-number` on the page. The caller guards this behind
/// a once-latch; the function itself just fans out.
pub fn animate_stat_numbers(document: &Document) {
    let Ok(nodes) = document.query_selector_all(".stat-number") else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            if let Ok(element) = node.dyn_into::<HtmlElement>() {
                animate_element(element);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_value_and_suffix() {
        let target = CounterTarget::parse("1500+");
        assert_eq!(target.value, 1500);
        assert_eq!(target.suffix, "+");
        assert_eq!(target.final_text(), "1500+");
    }

    #[test]
    fn parses_percent_suffix() {
        let target = CounterTarget::parse("99%");
        assert_eq!(target.value, 99);
        assert_eq!(target.suffix, "%");
    }

    #[test]
    fn text_without_digits_is_zero() {
        let target = CounterTarget::parse("soon");
        assert_eq!(target.value, 0);
        assert_eq!(target.suffix, "soon");
    }

    #[test]
    fn empty_text_is_zero() {
        assert_eq!(CounterTarget::parse("").value, 0);
    }

    #[test]
    fn animation_ends_exactly_at_target() {
        let mut animation = CounterAnimation::new(CounterTarget::parse("1500+"), 60);
        let mut last = Frame::Running(String::new());
        for _ in 0..1000 {
            last = animation.tick();
            if let Frame::Done(_) = last {
                break;
            }
        }
        assert_eq!(last, Frame::Done("1500+".to_string()));
    }

    #[test]
    fn displayed_value_never_exceeds_target() {
        let mut animation = CounterAnimation::new(CounterTarget::parse("1500+"), 7);
        loop {
            let frame = animation.tick();
            let digits: String = frame
                .text()
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            assert!(digits.parse::<u32>().unwrap() <= 1500);
            if let Frame::Done(_) = frame {
                break;
            }
        }
    }

    #[test]
    fn displayed_values_are_monotonic() {
        let mut animation = CounterAnimation::new(CounterTarget::parse("500+"), 60);
        let mut previous = 0;
        loop {
            let frame = animation.tick();
            let digits: String = frame
                .text()
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            let value = digits.parse::<u32>().unwrap();
            assert!(value >= previous);
            previous = value;
            if let Frame::Done(_) = frame {
                break;
            }
        }
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut animation = CounterAnimation::new(CounterTarget::parse("soon"), 60);
        assert_eq!(animation.tick(), Frame::Done("0soon".to_string()));
    }
}
