//! Startup overlay, hidden once the page finishes loading.
//!
//! Hides on the window `load` event, with a timeout fallback in case the
//! event fired before the app mounted (or never fires). Hiding twice is
//! harmless: the class adds are idempotent and removing an already
//! detached node is a no-op.
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const FALLBACK_MS: u32 = 3000;
const REMOVE_DELAY_MS: u32 = 500;

#[function_component(Preloader)]
pub fn preloader() -> Html {
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let hide: Rc<dyn Fn()> = {
                let document = document.clone();
                Rc::new(move || {
                    let Some(overlay) = document.get_element_by_id("preloader") else {
                        return;
                    };
                    let _ = overlay.class_list().add_1("fade-out");
                    if let Some(content) = document.get_element_by_id("page-content") {
                        let _ = content.class_list().add_1("loaded");
                    }
                    Timeout::new(REMOVE_DELAY_MS, move || overlay.remove()).forget();
                })
            };

            let load_callback = {
                let hide = hide.clone();
                Closure::wrap(Box::new(move || hide()) as Box<dyn FnMut()>)
            };
            window
                .add_event_listener_with_callback("load", load_callback.as_ref().unchecked_ref())
                .unwrap();

            // The app mounts from a module script, so "load" may already be
            // behind us; hide right away in that case.
            if document.ready_state() == "complete" {
                hide();
            }
            let fallback = {
                let hide = hide.clone();
                Timeout::new(FALLBACK_MS, move || hide())
            };

            move || {
                window
                    .remove_event_listener_with_callback(
                        "load",
                        load_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                drop(fallback);
            }
        },
        (),
    );

    html! {
        <div id="preloader" class="preloader">
            <div class="spinner"></div>
        </div>
    }
}
