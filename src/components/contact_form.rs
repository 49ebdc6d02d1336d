//! Contact form that hands off to the visitor's mail client.

use dioxus::prelude::*;
use folio_core::{ContactMessage, OPENING_MAIL_CLIENT};
use folio_ui::{Button, ButtonVariant, Input, TextArea};

use crate::context::use_site;
use crate::platform::dom;

#[component]
pub fn ContactForm() -> Element {
    let site = use_site();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut status = use_signal(String::new);
    let mut fallback = use_signal(|| format!("mailto:{}", site.peek().contact.recipient));

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let draft = ContactMessage::new(&name(), &email(), &message());
        let recipient = site.read().contact.recipient.clone();
        match draft.mailto_href(&recipient) {
            Ok(href) => {
                tracing::info!("Opening mail client for contact form");
                fallback.set(href.clone());
                dom::navigate_to(&href);
                status.set(OPENING_MAIL_CLIENT.to_string());
            }
            Err(e) => {
                tracing::debug!(error = %e, "Contact form incomplete");
                status.set(e.to_string());
            }
        }
    };

    rsx! {
        form {
            id: "contact-form",
            class: "contact-form",
            novalidate: true,
            onsubmit,

            Input {
                name: "name".to_string(),
                label: "Name".to_string(),
                value: name(),
                oninput: move |v: String| name.set(v),
                required: true,
            }
            Input {
                name: "email".to_string(),
                label: "Email".to_string(),
                input_type: "email".to_string(),
                value: email(),
                oninput: move |v: String| email.set(v),
                required: true,
            }
            TextArea {
                name: "message".to_string(),
                label: "Message".to_string(),
                value: message(),
                oninput: move |v: String| message.set(v),
                required: true,
            }

            Button {
                variant: ButtonVariant::Primary,
                button_type: "submit".to_string(),
                "Send message"
            }

            p { class: "form-status", "aria-live": "polite", "{status}" }
            p { class: "form-fallback",
                "Mail app didn't open? "
                a { id: "mailto-fallback", href: "{fallback}", "Email me directly" }
            }
        }
    }
}
