//! Navigation Header Component
//!
//! Brand link, section links with the scroll highlight, theme toggle and
//! the mobile menu toggle.

use dioxus::prelude::*;
use folio_core::toggle_theme;
use folio_ui::IconButton;

use crate::context::{use_nav_links, use_site, use_theme};
use crate::platform::dom;
use crate::platform::LocalPreferences;

/// Handle a click on an in-page `#id` link.
///
/// When the target exists the page scrolls smoothly and the default jump is
/// suppressed; otherwise the browser follows the link as usual.
pub fn follow_section_link(href: &str, evt: &MouseEvent) {
    if let Some(id) = href.strip_prefix('#') {
        if dom::scroll_to_section(id) {
            evt.prevent_default();
        }
    }
}

/// Fixed page header
#[component]
pub fn NavHeader() -> Element {
    let site = use_site();
    let nav_links = use_nav_links();
    let mut theme = use_theme();
    let mut menu_open = use_signal(|| false);

    let on_theme = move |_| {
        let next = toggle_theme(theme(), &mut LocalPreferences);
        theme.set(next);
    };

    let owner = site.read().owner.clone();
    let icon = theme().icon();

    rsx! {
        header { class: "site-header",
            a {
                class: "brand",
                href: "#home",
                onclick: move |evt| follow_section_link("#home", &evt),
                "{owner}"
            }

            nav { "aria-label": "Primary",
                ul {
                    id: "nav-menu",
                    class: if menu_open() { "nav-menu open" } else { "nav-menu" },
                    for link in nav_links() {
                        li { key: "{link.href}",
                            a {
                                href: "{link.href}",
                                class: if link.active { "active" } else { "" },
                                "aria-current": if link.active { "true" } else { "false" },
                                onclick: {
                                    let href = link.href.clone();
                                    move |evt: MouseEvent| {
                                        menu_open.set(false);
                                        follow_section_link(&href, &evt);
                                    }
                                },
                                "{link.label}"
                            }
                        }
                    }
                }
            }

            div { class: "header-actions",
                IconButton {
                    id: "theme-toggle".to_string(),
                    aria_label: "Toggle color theme".to_string(),
                    onclick: on_theme,
                    "{icon}"
                }
                IconButton {
                    class: "nav-toggle".to_string(),
                    aria_label: "Toggle navigation".to_string(),
                    expanded: menu_open(),
                    onclick: move |_| {
                        let open = !menu_open();
                        tracing::debug!(open, "Mobile menu toggled");
                        menu_open.set(open);
                    },
                    "\u{2630}"
                }
            }
        }
    }
}
