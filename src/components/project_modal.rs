//! Project Details Modal
//!
//! Opened by setting the page's `open_project` signal. Closing happens via
//! the close button or a click on the backdrop outside the content.

use dioxus::prelude::*;
use folio_ui::CloseButton;

use crate::context::{use_open_project, use_site};
use crate::platform::dom;

#[component]
pub fn ProjectModal() -> Element {
    let site = use_site();
    let mut open_project = use_open_project();

    // Page behind the modal must not scroll while it is open
    use_effect(move || dom::lock_body_scroll(open_project().is_some()));

    let project = open_project()
        .and_then(|id| site.read().project(&id).ok().cloned());
    let is_open = project.is_some();

    let mut close = move || {
        if open_project.peek().is_some() {
            tracing::debug!("Project details closed");
            open_project.set(None);
        }
    };

    rsx! {
        div {
            id: "project-modal",
            class: if is_open { "modal active" } else { "modal" },
            role: "dialog",
            "aria-modal": "true",
            "aria-hidden": if is_open { "false" } else { "true" },
            "aria-labelledby": "modal-title",
            onclick: move |_| close(),

            div {
                class: "card modal-content",
                onclick: move |evt| evt.stop_propagation(),

                CloseButton { onclick: move |_| close() }

                if let Some(project) = project {
                    h3 { id: "modal-title", "{project.title}" }
                    div { id: "modal-tags", class: "tag-list",
                        for tag in project.tags.iter() {
                            span { class: "tag", "{tag}" }
                        }
                    }
                    div { id: "modal-description",
                        p { "{project.description}" }
                    }
                    div { id: "modal-features",
                        h4 { "Key Features:" }
                        ul {
                            for feature in project.features.iter() {
                                li { "{feature}" }
                            }
                        }
                    }
                    div { id: "modal-tech",
                        h4 { "Technologies Used:" }
                        div { class: "tech-grid",
                            for tech in project.tech.iter() {
                                div { class: "tech-item", span { "{tech}" } }
                            }
                        }
                    }
                    div { class: "modal-links",
                        if let Some(demo) = project.demo.as_deref() {
                            a { class: "btn btn-primary", href: "{demo}", "Live demo" }
                        }
                        if let Some(code) = project.code.as_deref() {
                            a { class: "btn btn-outline", href: "{code}", "Source code" }
                        }
                    }
                }
            }
        }
    }
}
