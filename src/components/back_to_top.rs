use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Floating back-to-top button. The scroll controller toggles its
/// `visible` class; clicking it glides back to the top of the page.
#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <button id="backToTop" class="back-to-top" {onclick}>
            {"\u{2191}"}
        </button>
    }
}
