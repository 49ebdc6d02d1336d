use std::collections::HashSet;

use dioxus::prelude::*;
use folio_core::{resolve_theme, SiteConfig};

use crate::context::PageState;
use crate::pages::Home;
use crate::platform::dom;
use crate::platform::LocalPreferences;
use crate::theme::GLOBAL_STYLES;
use crate::tracking::use_page_tracking;

/// Site content bundled with the page
const SITE_JSON: &str = include_str!("../assets/site.json");

fn load_site_config() -> SiteConfig {
    let config = SiteConfig::from_json_or_default(SITE_JSON);
    tracing::info!(
        owner = %config.owner,
        roles = config.roles.len(),
        projects = config.projects.len(),
        "Site config loaded"
    );
    config
}

/// Root application component.
///
/// Provides global styles, page context, theme, and scroll tracking.
#[component]
pub fn App() -> Element {
    let site = use_signal(load_site_config);
    let theme = use_signal(|| resolve_theme(&LocalPreferences, dom::prefers_light()));
    let nav_links = use_signal(|| site.peek().nav.clone());
    let scroll_y = use_signal(|| 0.0);
    let revealed = use_signal(HashSet::new);
    let open_project = use_signal(|| None::<String>);

    // Provide page state to all child components
    let state = use_context_provider(|| PageState {
        site,
        theme,
        nav_links,
        scroll_y,
        revealed,
        open_project,
    });

    // Keep the <html> class in sync with the theme
    use_effect(move || dom::apply_theme(theme()));

    use_page_tracking(state);

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
