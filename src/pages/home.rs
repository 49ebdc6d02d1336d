//! The single portfolio page.
//!
//! Sections render in the order of `SECTION_IDS`; the scroll tracker
//! measures them by id.

use dioxus::prelude::*;
use folio_core::effects::hero_transform;

use crate::components::{
    follow_section_link, Background, ContactForm, NavHeader, ProjectGallery, SkillsList,
    StatsGrid, TypewriterText,
};
use crate::context::{reveal_class, use_is_revealed, use_scroll_y, use_site};

#[component]
pub fn Home() -> Element {
    let site = use_site();
    let scroll_y = use_scroll_y();
    let about_visible = use_is_revealed("about-card");
    let contact_visible = use_is_revealed("contact-card");

    let config = site.read();
    let owner = config.owner.clone();
    let tagline = config.tagline.clone();
    let about = config.about.clone();
    drop(config);

    rsx! {
        Background {}
        NavHeader {}

        main {
            section {
                id: "home",
                class: "section hero",
                style: "transform: {hero_transform(scroll_y())};",
                p { class: "hero-greeting", "Hi, I'm" }
                h1 { "{owner}" }
                TypewriterText {}
                p { class: "hero-tagline", "{tagline}" }
                div { class: "hero-actions",
                    a {
                        class: "btn btn-primary",
                        href: "#projects",
                        onclick: move |evt| follow_section_link("#projects", &evt),
                        "View projects"
                    }
                    a {
                        class: "btn btn-outline",
                        href: "#contact",
                        onclick: move |evt| follow_section_link("#contact", &evt),
                        "Get in touch"
                    }
                }
            }

            section { id: "about", class: "section",
                h2 { "About" }
                div {
                    id: "about-card",
                    class: reveal_class("card", about_visible),
                    "data-reveal": "true",
                    for (i, paragraph) in about.iter().enumerate() {
                        p { key: "{i}", "{paragraph}" }
                    }
                }
                StatsGrid {}
            }

            section { id: "skills", class: "section",
                h2 { "Skills" }
                SkillsList {}
            }

            section { id: "projects", class: "section",
                h2 { "Projects" }
                ProjectGallery {}
            }

            section { id: "contact", class: "section",
                h2 { "Contact" }
                div {
                    id: "contact-card",
                    class: reveal_class("card", contact_visible),
                    "data-reveal": "true",
                    ContactForm {}
                }
            }
        }

        footer { class: "site-footer",
            p { "\u{a9} {owner}" }
        }
    }
}
