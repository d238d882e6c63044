use web_sys::MouseEvent;
use yew::prelude::*;

use crate::scroll::controller::smooth_scroll_to;

const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About Us"),
    ("products", "Products"),
    ("services", "Services"),
    ("contact", "Contact"),
];

/// Fixed header: logo, section links, hamburger menu and the breadcrumb
/// label. The scroll controller toggles `scrolled` / `nav-hidden` on the
/// header element and rewrites `#current-section`; this component only
/// owns the menu state.
#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_link = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            smooth_scroll_to(id);
        })
    };

    html! {
        <header id="site-header" class="header">
            <nav class="navbar">
                <a href="#home" class="nav-logo" onclick={nav_link("home")}>
                    {"La Molina Store"}
                </a>
                <button
                    class={classes!("hamburger", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-menu", (*menu_open).then(|| "active"))}>
                    { for NAV_LINKS.iter().map(|&(id, label)| html! {
                        <a href={format!("#{id}")} class="nav-link" onclick={nav_link(id)}>
                            { label }
                        </a>
                    }) }
                </div>
            </nav>
            <div class="breadcrumb">
                <span class="breadcrumb-prefix">{"You are here:"}</span>
                <span id="current-section">{"Welcome"}</span>
            </div>
        </header>
    }
}
