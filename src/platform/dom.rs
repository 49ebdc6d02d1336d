//! DOM queries and side effects.

use folio_core::{ElementRect, LayoutProbe, Theme, PREFERS_LIGHT_QUERY};
use gloo::utils::{body, document, document_element, window};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// [`LayoutProbe`] that measures live elements by id
#[derive(Debug, Clone, Copy, Default)]
pub struct DomLayout;

impl LayoutProbe for DomLayout {
    fn measure(&self, id: &str) -> Option<ElementRect> {
        let element = document()
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()?;

        Some(ElementRect {
            top: f64::from(element.offset_top()),
            height: f64::from(element.offset_height()),
        })
    }
}

/// Current vertical scroll offset
pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Whether the system color scheme asks for a light page
pub fn prefers_light() -> bool {
    window()
        .match_media(PREFERS_LIGHT_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Toggle the `light` class on `<html>`
pub fn apply_theme(theme: Theme) {
    if let Err(e) = document_element()
        .class_list()
        .toggle_with_force("light", theme.is_light())
    {
        tracing::debug!(error = ?e, "Could not toggle theme class");
    }
}

/// Stop the page behind a modal from scrolling
pub fn lock_body_scroll(locked: bool) {
    let value = if locked { "hidden" } else { "" };
    if let Err(e) = body().style().set_property("overflow", value) {
        tracing::debug!(error = ?e, "Could not set body overflow");
    }
}

/// Smoothly scroll to the element with `id` and record `#id` in history.
///
/// Returns false when no such element exists, in which case the caller
/// should let the browser handle the link.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(target) = document().get_element_by_id(id) else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);

    let pushed = window()
        .history()
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&format!("#{id}"))));
    if let Err(e) = pushed {
        tracing::debug!(error = ?e, "Could not push history entry");
    }
    true
}

/// Send the browser to `href` (used for `mailto:` links)
pub fn navigate_to(href: &str) {
    if let Err(e) = window().location().set_href(href) {
        tracing::warn!(error = ?e, "Could not open link");
    }
}
