//! Page-wide context for Folio.
//!
//! Provides the site configuration and shared page state to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| PageState { site, theme, nav_links, .. });
//!
//! // In child components
//! let site = use_site();
//! let theme = use_theme();
//! ```

use std::collections::HashSet;

use dioxus::prelude::*;
use folio_core::{NavLink, SiteConfig, Theme};

/// Section ids in document order, as rendered by the home page
pub const SECTION_IDS: [&str; 5] = ["home", "about", "skills", "projects", "contact"];

/// Blocks that fade in when first scrolled into view
pub const REVEAL_IDS: [&str; 5] = [
    "about-card",
    "stats",
    "skills-list",
    "projects-grid",
    "contact-card",
];

/// Shared state, every field a signal so it can be copied into handlers.
#[derive(Clone, Copy)]
pub struct PageState {
    /// Site content, loaded once at startup
    pub site: Signal<SiteConfig>,
    /// Active color theme
    pub theme: Signal<Theme>,
    /// Navigation links with their highlight state
    pub nav_links: Signal<Vec<NavLink>>,
    /// Latest vertical scroll offset, drives parallax
    pub scroll_y: Signal<f64>,
    /// Ids of blocks that have been revealed
    pub revealed: Signal<HashSet<String>>,
    /// Project whose details modal is open
    pub open_project: Signal<Option<String>>,
}

/// Hook to access the site configuration.
pub fn use_site() -> Signal<SiteConfig> {
    use_context::<PageState>().site
}

/// Hook to access the active theme.
pub fn use_theme() -> Signal<Theme> {
    use_context::<PageState>().theme
}

/// Hook to access the navigation links.
pub fn use_nav_links() -> Signal<Vec<NavLink>> {
    use_context::<PageState>().nav_links
}

/// Hook to access the current scroll offset.
pub fn use_scroll_y() -> Signal<f64> {
    use_context::<PageState>().scroll_y
}

/// Hook to access the set of revealed block ids.
///
/// Returns a reactive signal; components re-render when a block reveals.
pub fn use_revealed() -> Signal<HashSet<String>> {
    use_context::<PageState>().revealed
}

/// Hook to access the open project modal.
///
/// Set to `Some(project_id)` to open the details modal, `None` to close it.
pub fn use_open_project() -> Signal<Option<String>> {
    use_context::<PageState>().open_project
}

/// Whether the block with `id` has been revealed.
///
/// Subscribes the calling component to reveal updates.
pub fn use_is_revealed(id: &str) -> bool {
    use_revealed().read().contains(id)
}

/// Class list for a revealable block
pub fn reveal_class(base: &str, visible: bool) -> String {
    if visible {
        format!("{base} visible")
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_class_appends_visible() {
        assert_eq!(reveal_class("card", false), "card");
        assert_eq!(reveal_class("card", true), "card visible");
    }

    #[test]
    fn reveal_ids_are_distinct_from_sections() {
        for id in REVEAL_IDS {
            assert!(!SECTION_IDS.contains(&id));
        }
    }
}
