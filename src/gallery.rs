//! Product gallery: a static catalog and the modal that renders it.
//!
//! The catalog is configuration data shipped with the page, parsed once on
//! first use. Unknown categories resolve to an empty list; the modal still
//! renders, just without items.
use std::collections::HashMap;
use std::sync::OnceLock;

use log::warn;
use serde::Deserialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

const CATALOG_JSON: &str = include_str!("catalog.json");

static CATALOG: OnceLock<Catalog> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GalleryItem {
    pub name: String,
    pub image: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Catalog {
    #[serde(flatten)]
    categories: HashMap<String, Vec<GalleryItem>>,
}

impl Catalog {
    pub fn global() -> &'static Catalog {
        CATALOG.get_or_init(|| {
            serde_json::from_str(CATALOG_JSON).unwrap_or_else(|err| {
                warn!("gallery catalog failed to parse: {err}");
                Catalog::default()
            })
        })
    }

    pub fn items(&self, category: &str) -> &[GalleryItem] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// "clothing" becomes "Gallery - Clothing".
pub fn gallery_title(category: &str) -> String {
    let mut chars = category.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    format!("Gallery - {capitalized}")
}

#[derive(Properties, PartialEq)]
pub struct GalleryModalProps {
    /// Category to show; `None` keeps the modal closed.
    pub category: Option<String>,
    pub on_close: Callback<()>,
}

#[function_component(GalleryModal)]
pub fn gallery_modal(props: &GalleryModalProps) -> Html {
    let open = props.category.is_some();

    // Lock body scroll while the modal is up.
    use_effect_with_deps(
        move |open| {
            if let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                let _ = if *open {
                    body.style().set_property("overflow", "hidden")
                } else {
                    body.style().remove_property("overflow").map(|_| ())
                };
            }
            || ()
        },
        open,
    );

    // Escape closes while open.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open| {
                let open = *open;
                let document = web_sys::window().and_then(|w| w.document());
                let keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                    if open && event.key() == "Escape" {
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);
                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        keydown.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(document) = &document {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            open,
        );
    }

    let Some(category) = props.category.clone() else {
        return html! {};
    };
    let items = Catalog::global().items(&category);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |event: MouseEvent| {
            // only the backdrop itself, not clicks inside the content
            if event.target() == event.current_target() {
                on_close.emit(());
            }
        })
    };

    html! {
        <div id="galleryModal" class="modal active" onclick={backdrop_click}>
            <div class="modal-content">
                <button class="modal-close" onclick={close}>{"\u{00d7}"}</button>
                <h3 id="galleryTitle">{ gallery_title(&category) }</h3>
                <div id="galleryGrid" class="gallery-grid">
                    { for items.iter().map(|item| html! {
                        <div class="gallery-item">
                            <img src={item.image.clone()} alt={item.name.clone()} loading="lazy" />
                            <div class="gallery-item-overlay">
                                <h4>{ &item.name }</h4>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog: Catalog = serde_json::from_str(CATALOG_JSON).expect("catalog must parse");
        assert_eq!(catalog.items("clothing").len(), 4);
        assert_eq!(catalog.items("technology").len(), 4);
        assert_eq!(catalog.items("home").len(), 4);
    }

    #[test]
    fn unknown_category_is_empty() {
        let catalog: Catalog = serde_json::from_str(CATALOG_JSON).unwrap();
        assert!(catalog.items("toys").is_empty());
        // lookups are case-sensitive
        assert!(catalog.items("Clothing").is_empty());
    }

    #[test]
    fn titles_capitalize_the_category() {
        assert_eq!(gallery_title("clothing"), "Gallery - Clothing");
        assert_eq!(gallery_title(""), "Gallery - ");
    }
}
