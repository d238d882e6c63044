use log::{info, warn, Level};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew::prelude::*;

mod config;
mod counter;
mod gallery;
mod reveal;
mod components {
    pub mod back_to_top;
    pub mod forms;
    pub mod nav;
    pub mod notification;
    pub mod preloader;
}
mod pages {
    pub mod landing;
}
mod scroll {
    pub mod controller;
    pub mod limiter;
    pub mod state;
}

use components::back_to_top::BackToTop;
use components::nav::Nav;
use components::preloader::Preloader;
use config::DeviceConfig;
use gallery::GalleryModal;
use pages::landing::Landing;
use scroll::controller::ScrollController;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub device: DeviceConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let active_gallery = use_state(|| None::<String>);

    let open_gallery = {
        let active_gallery = active_gallery.clone();
        Callback::from(move |category: String| active_gallery.set(Some(category)))
    };
    let close_gallery = {
        let active_gallery = active_gallery.clone();
        Callback::from(move |_| active_gallery.set(None))
    };

    html! {
        <>
            <Preloader />
            <Nav />
            <div id="page-content">
                <Landing device={props.device} on_open_gallery={open_gallery} />
            </div>
            <GalleryModal category={(*active_gallery).clone()} on_close={close_gallery} />
            <BackToTop />
            <ScrollController />
        </>
    }
}

/// Best effort; the page works the same without it.
fn register_service_worker() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let container = window.navigator().service_worker();
    spawn_local(async move {
        match JsFuture::from(container.register("/sw.js")).await {
            Ok(_) => info!("service worker registered"),
            Err(err) => warn!("service worker registration failed: {err:?}"),
        }
    });
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let device = DeviceConfig::detect();
    info!(
        "starting storefront (mobile: {}, tablet: {}, touch: {}, reduced motion: {}, \
         particles: {}, hover effects: {})",
        device.is_mobile,
        device.is_tablet,
        device.is_touch,
        device.reduced_motion,
        device.particle_count,
        device.enable_hover_effects
    );
    register_service_worker();

    yew::Renderer::<App>::with_props(AppProps { device }).render();
}
