//! Wires the scroll projector to the page.
//!
//! On mount: measure the `section[id]` regions once, install a
//! frame-coalesced scroll listener and a debounced resize listener, run an
//! initial projection. Every tick recomputes the full state first and only
//! applies the resulting diff to the DOM afterwards.
use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};
use yew::prelude::*;

use super::limiter::{Debouncer, FrameGate, RESIZE_WINDOW_MS};
use super::state::{Projector, Section, StateDiff};

/// Fixed offset subtracted when jumping to an anchor, so the section top
/// lands below the header.
const ANCHOR_OFFSET: f64 = 100.0;

fn section_title(id: &str) -> &'static str {
    match id {
        "home" => "Home",
        "about" => "About Us",
        "products" => "Products",
        "services" => "Services",
        "contact" => "Contact",
        _ => super::state::WELCOME_TITLE,
    }
}

fn measure_sections(document: &Document) -> Vec<Section> {
    let mut sections = Vec::new();
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return sections;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Ok(el) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        let id = el.id();
        sections.push(Section::new(
            id.clone(),
            el.offset_top() as f64,
            el.offset_height() as f64,
            section_title(&id),
        ));
    }
    sections
}

/// Applies a state diff as class toggles and the breadcrumb text write.
/// Affordances missing from the page are skipped.
fn apply_diff(document: &Document, diff: &StateDiff) {
    if let Some(header) = document.get_element_by_id("site-header") {
        if let Some(compact) = diff.header_compact {
            let _ = if compact {
                header.class_list().add_1("scrolled")
            } else {
                header.class_list().remove_1("scrolled")
            };
        }
        if let Some(hidden) = diff.header_hidden {
            let _ = if hidden {
                header.class_list().add_1("nav-hidden")
            } else {
                header.class_list().remove_1("nav-hidden")
            };
        }
    }
    if let Some(title) = &diff.active_title {
        if let Some(label) = document.get_element_by_id("current-section") {
            label.set_text_content(Some(title));
        }
    }
    if let Some(visible) = diff.back_to_top_visible {
        if let Some(button) = document.get_element_by_id("backToTop") {
            let _ = if visible {
                button.class_list().add_1("visible")
            } else {
                button.class_list().remove_1("visible")
            };
        }
    }
}

fn project_now(window: &Window, document: &Document, projector: &Rc<RefCell<Projector>>) {
    let offset = window.scroll_y().unwrap_or(0.0);
    let diff = projector.borrow_mut().project(offset);
    if !diff.is_empty() {
        apply_diff(document, &diff);
    }
}

/// Smooth-scrolls to the section with `id`, keeping the header offset.
pub fn smooth_scroll_to(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(target) = document.get_element_by_id(id) else {
        return;
    };
    let Some(target) = target.dyn_ref::<HtmlElement>().cloned() else {
        return;
    };
    let top = (target.offset_top() as f64 - ANCHOR_OFFSET).max(0.0);
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Invisible component owning the listeners for the page's scroll state.
#[function_component(ScrollController)]
pub fn scroll_controller() -> Html {
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let sections = measure_sections(&document);
            debug!("scroll controller tracking {} sections", sections.len());
            let projector = Rc::new(RefCell::new(Projector::new(sections)));
            let gate = Rc::new(FrameGate::new());

            // One recompute per animation frame, scheduled by the scroll
            // listener below.
            let raf_callback: Rc<Closure<dyn FnMut()>> = {
                let window = window.clone();
                let document = document.clone();
                let projector = projector.clone();
                let gate = gate.clone();
                Rc::new(Closure::wrap(Box::new(move || {
                    project_now(&window, &document, &projector);
                    gate.settle();
                }) as Box<dyn FnMut()>))
            };

            let scroll_callback = {
                let window = window.clone();
                let gate = gate.clone();
                let raf = raf_callback.clone();
                Closure::wrap(Box::new(move || {
                    if gate.admit()
                        && window
                            .request_animation_frame((*raf).as_ref().unchecked_ref())
                            .is_err()
                    {
                        gate.settle();
                    }
                }) as Box<dyn FnMut()>)
            };
            window
                .add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Resize invalidates the measured geometry; remeasure after the
            // burst quiets down, then reproject at the current offset.
            let resize_debouncer = Rc::new(Debouncer::new(RESIZE_WINDOW_MS));
            let resize_callback = {
                let window = window.clone();
                let document = document.clone();
                let projector = projector.clone();
                let debouncer = resize_debouncer.clone();
                Closure::wrap(Box::new(move || {
                    let window = window.clone();
                    let document = document.clone();
                    let projector = projector.clone();
                    debouncer.call(move || {
                        projector
                            .borrow_mut()
                            .set_sections(measure_sections(&document));
                        project_now(&window, &document, &projector);
                    });
                }) as Box<dyn FnMut()>)
            };
            window
                .add_event_listener_with_callback(
                    "resize",
                    resize_callback.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Initial tick so a reloaded page mid-scroll starts consistent.
            project_now(&window, &document, &projector);

            move || {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                window
                    .remove_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                resize_debouncer.cancel();
                drop(raf_callback);
            }
        },
        (),
    );

    html! {}
}
