//! Contact and newsletter forms.
//!
//! Submission is a stub: no request leaves the page. A valid submit shows
//! a success toast and clears the fields; invalid fields get inline error
//! text on blur, cleared again as the user types.
use web_sys::{FocusEvent, HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use super::notification::{show_notification, NotificationKind};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Minimal structural email check: `local@domain.tld`, no whitespace,
/// every part non-empty.
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn required_error(value: &str) -> Option<&'static str> {
    value.trim().is_empty().then_some(REQUIRED_MESSAGE)
}

pub fn email_error(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(REQUIRED_MESSAGE)
    } else if !is_valid_email(trimmed) {
        Some(EMAIL_MESSAGE)
    } else {
        None
    }
}

fn error_html(error: Option<&'static str>) -> Html {
    match error {
        Some(message) => html! { <span class="error-message">{ message }</span> },
        None => html! {},
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let name_error = use_state(|| None::<&'static str>);
    let email_error_state = use_state(|| None::<&'static str>);
    let message_error = use_state(|| None::<&'static str>);

    let on_name_input = {
        let name = name.clone();
        let name_error = name_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
            name_error.set(None);
        })
    };
    let on_email_input = {
        let email = email.clone();
        let email_error_state = email_error_state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            email_error_state.set(None);
        })
    };
    let on_message_input = {
        let message = message.clone();
        let message_error = message_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
            message_error.set(None);
        })
    };

    let on_name_blur = {
        let name = name.clone();
        let name_error = name_error.clone();
        Callback::from(move |_: FocusEvent| name_error.set(required_error(&name)))
    };
    let on_email_blur = {
        let email = email.clone();
        let email_error_state = email_error_state.clone();
        Callback::from(move |_: FocusEvent| email_error_state.set(email_error(&email)))
    };
    let on_message_blur = {
        let message = message.clone();
        let message_error = message_error.clone();
        Callback::from(move |_: FocusEvent| message_error.set(required_error(&message)))
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let name_error = name_error.clone();
        let email_error_state = email_error_state.clone();
        let message_error = message_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name_check = required_error(&name);
            let email_check = email_error(&email);
            let message_check = required_error(&message);
            if name_check.is_none() && email_check.is_none() && message_check.is_none() {
                show_notification(
                    "Your message has been sent. We will contact you soon.",
                    NotificationKind::Success,
                );
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            } else {
                name_error.set(name_check);
                email_error_state.set(email_check);
                message_error.set(message_check);
            }
        })
    };

    html! {
        <form id="contactForm" class="contact-form" {onsubmit}>
            <div class="form-group">
                <input
                    type="text"
                    name="name"
                    placeholder="Your name"
                    value={(*name).clone()}
                    oninput={on_name_input}
                    onblur={on_name_blur}
                />
                { error_html(*name_error) }
            </div>
            <div class="form-group">
                <input
                    type="email"
                    name="email"
                    placeholder="Your email"
                    value={(*email).clone()}
                    oninput={on_email_input}
                    onblur={on_email_blur}
                />
                { error_html(*email_error_state) }
            </div>
            <div class="form-group">
                <textarea
                    name="message"
                    placeholder="How can we help you?"
                    value={(*message).clone()}
                    oninput={on_message_input}
                    onblur={on_message_blur}
                />
                { error_html(*message_error) }
            </div>
            <button type="submit" class="btn btn-primary">{"Send Message"}</button>
        </form>
    }
}

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let email = use_state(String::new);
    let error = use_state(|| None::<&'static str>);

    let oninput = {
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            error.set(None);
        })
    };
    let onblur = {
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |_: FocusEvent| error.set(email_error(&email)))
    };
    let onsubmit = {
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match email_error(&email) {
                None => {
                    show_notification(
                        "Subscription successful! Your discount coupon is on its way.",
                        NotificationKind::Success,
                    );
                    email.set(String::new());
                }
                check => error.set(check),
            }
        })
    };

    html! {
        <form id="newsletterForm" class="newsletter-form" {onsubmit}>
            <div class="form-group">
                <input
                    type="email"
                    name="email"
                    placeholder="Your email address"
                    value={(*email).clone()}
                    {oninput}
                    {onblur}
                />
                { error_html(*error) }
            </div>
            <button type="submit" class="btn btn-secondary">{"Subscribe"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@shop.example.com"));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("plain"));
    }

    #[test]
    fn rejects_whitespace_and_double_at() {
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b@c.co"));
    }

    #[test]
    fn required_check_trims() {
        assert_eq!(required_error("   "), Some(REQUIRED_MESSAGE));
        assert_eq!(required_error("hi"), None);
    }

    #[test]
    fn email_check_layers_required_first() {
        assert_eq!(email_error(""), Some(REQUIRED_MESSAGE));
        assert_eq!(email_error("nope"), Some(EMAIL_MESSAGE));
        assert_eq!(email_error("a@b.co"), None);
    }
}
