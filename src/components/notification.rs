//! Transient toast notifications.
//!
//! Built imperatively so any handler can fire one without threading
//! component state around. The toast slides in shortly after insertion and
//! removes itself after a few seconds. Failing to build one is silently
//! ignored.
use gloo_timers::callback::Timeout;

const SHOW_DELAY_MS: u32 = 100;
const VISIBLE_MS: u32 = 4000;
const EXIT_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Success,
    Info,
}

impl NotificationKind {
    fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification-success",
            NotificationKind::Info => "notification-info",
        }
    }

    fn icon_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "fas fa-check-circle",
            NotificationKind::Info => "fas fa-info-circle",
        }
    }
}

pub fn show_notification(message: &str, kind: NotificationKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(toast) = document.create_element("div") else {
        return;
    };
    toast.set_class_name(&format!("notification {}", kind.class()));

    let Ok(content) = document.create_element("div") else {
        return;
    };
    content.set_class_name("notification-content");
    if let Ok(icon) = document.create_element("i") {
        icon.set_class_name(kind.icon_class());
        let _ = content.append_child(&icon);
    }
    if let Ok(text) = document.create_element("span") {
        text.set_text_content(Some(message));
        let _ = content.append_child(&text);
    }
    let _ = toast.append_child(&content);
    if body.append_child(&toast).is_err() {
        return;
    }

    // enter on the next beat, leave after the visible window
    {
        let toast = toast.clone();
        Timeout::new(SHOW_DELAY_MS, move || {
            let _ = toast.class_list().add_1("show");
        })
        .forget();
    }
    Timeout::new(VISIBLE_MS, move || {
        let _ = toast.class_list().remove_1("show");
        Timeout::new(EXIT_MS, move || toast.remove()).forget();
    })
    .forget();
}
