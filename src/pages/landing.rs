use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::components::forms::{ContactForm, NewsletterForm};
use crate::config::DeviceConfig;
use crate::counter;
use crate::reveal::{mark_revealed, OnceLatch, RevealWatcher};
use crate::scroll::controller::smooth_scroll_to;

/// Elements animated in as they enter the viewport.
const REVEAL_SELECTOR: &str =
    ".hero-content, .about-content, .stat-item, .product-card, .service-card";

/// Stagger step between consecutive reveal targets, scaled by the device
/// animation speed.
const STAGGER_STEP_S: f64 = 0.1;

fn product_card(
    title: &str,
    description: &str,
    category: &'static str,
    on_open_gallery: &Callback<String>,
) -> Html {
    let onclick = {
        let on_open_gallery = on_open_gallery.clone();
        Callback::from(move |_: MouseEvent| on_open_gallery.emit(category.to_string()))
    };
    html! {
        <div class="product-card">
            <h3>{ title }</h3>
            <p>{ description }</p>
            <button class="btn-view-gallery" data-gallery={category} {onclick}>
                {"View Gallery"}
            </button>
        </div>
    }
}

fn stat_item(number: &str, label: &str) -> Html {
    html! {
        <div class="stat-item">
            <span class="stat-number">{ number }</span>
            <span class="stat-label">{ label }</span>
        </div>
    }
}

fn mark_all_revealed(document: &Document) {
    if let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) {
        for i in 0..nodes.length() {
            if let Some(el) = nodes
                .item(i)
                .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
            {
                mark_revealed(&el);
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub device: DeviceConfig,
    pub on_open_gallery: Callback<String>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Start at the top on initial mount.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    // Reveal animations and the one-shot stats counter trigger.
    {
        let device = props.device;
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let mut reveal_watcher = None;
                if device.enable_animations {
                    match RevealWatcher::new(|el| {
                        mark_revealed(el);
                    }) {
                        Ok(watcher) => {
                            if let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) {
                                for i in 0..nodes.length() {
                                    let Some(el) = nodes.item(i) else { continue };
                                    let Ok(el) = el.dyn_into::<HtmlElement>() else {
                                        continue;
                                    };
                                    let _ = el.class_list().add_1("fade-in-up");
                                    let delay = i as f64 * STAGGER_STEP_S
                                        / device.animation_speed_factor;
                                    let _ = el
                                        .style()
                                        .set_property("transition-delay", &format!("{delay:.1}s"));
                                    watcher.observe(&el);
                                }
                            }
                            reveal_watcher = Some(watcher);
                        }
                        Err(err) => {
                            warn!("reveal watcher unavailable: {err:?}");
                            mark_all_revealed(&document);
                        }
                    }
                } else {
                    mark_all_revealed(&document);
                }

                // The stats counter runs once, the first time the stats
                // block becomes visible. Not gated on enable_animations:
                // the numbers must appear either way.
                let stats_latch = Rc::new(OnceLatch::new());
                let stats_watcher = {
                    let document = document.clone();
                    RevealWatcher::new(move |_| {
                        if stats_latch.fire() {
                            counter::animate_stat_numbers(&document);
                        }
                    })
                    .map_err(|err| warn!("stats watcher unavailable: {err:?}"))
                    .ok()
                };
                if let Some(watcher) = &stats_watcher {
                    if let Ok(Some(stats)) = document.query_selector(".stats") {
                        watcher.observe(&stats);
                    }
                }

                move || {
                    drop(reveal_watcher);
                    drop(stats_watcher);
                }
            },
            (),
        );
    }

    html! {
        <main class="landing">
            <section id="home" class="hero">
                <div class="hero-content">
                    <h1>{"La Molina Store"}</h1>
                    <p class="hero-subtitle">
                        {"Everything for you and your home, with the service of a neighborhood shop."}
                    </p>
                    <a
                        href="#products"
                        class="btn btn-primary hero-cta"
                        onclick={Callback::from(|e: MouseEvent| {
                            e.prevent_default();
                            smooth_scroll_to("products");
                        })}
                    >
                        {"Browse Products"}
                    </a>
                </div>
            </section>

            <section id="about" class="about">
                <div class="about-content">
                    <h2>{"About Us"}</h2>
                    <p>
                        {"Family-run since the beginning, we bring a curated selection of \
                          clothing, technology and home goods to the neighborhood."}
                    </p>
                </div>
                <div class="stats">
                    { stat_item("500+", "Happy Customers") }
                    { stat_item("1500+", "Products Sold") }
                    { stat_item("25+", "Years in Business") }
                    { stat_item("99%", "Satisfaction") }
                </div>
            </section>

            <section id="products" class="products">
                <h2>{"Products"}</h2>
                <div class="product-grid">
                    { product_card(
                        "Clothing",
                        "Shirts, trousers, shoes and accessories for every season.",
                        "clothing",
                        &props.on_open_gallery,
                    ) }
                    { product_card(
                        "Technology",
                        "Smartphones, laptops and the gadgets that go with them.",
                        "technology",
                        &props.on_open_gallery,
                    ) }
                    { product_card(
                        "Home",
                        "Decoration, kitchen and garden essentials.",
                        "home",
                        &props.on_open_gallery,
                    ) }
                </div>
            </section>

            <section id="services" class="services">
                <h2>{"Services"}</h2>
                <div class="service-grid">
                    <div class="service-card">
                        <h3>{"Free Delivery"}</h3>
                        <p>{"Same-day delivery on orders within the district."}</p>
                    </div>
                    <div class="service-card">
                        <h3>{"Gift Wrapping"}</h3>
                        <p>{"Complimentary wrapping for any purchase."}</p>
                    </div>
                    <div class="service-card">
                        <h3>{"Extended Warranty"}</h3>
                        <p>{"Two extra years of coverage on technology."}</p>
                    </div>
                </div>
            </section>

            <section id="contact" class="contact">
                <h2>{"Contact"}</h2>
                <ContactForm />
                <div class="newsletter">
                    <h3>{"Get a discount coupon"}</h3>
                    <NewsletterForm />
                </div>
            </section>

            <footer class="footer">
                <p>{"La Molina Store"}</p>
            </footer>
        </main>
    }
}
