//! Scroll-driven page tracking.
//!
//! One coroutine owns the [`ScrollTracker`] and [`RevealTracker`]; window
//! listeners only forward [`PageEvent`]s into it.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{RevealTracker, ScrollTracker};
use futures::StreamExt;

use crate::context::{PageState, REVEAL_IDS, SECTION_IDS};
use crate::platform::dom::{self, DomLayout};
use crate::platform::events::{listen_layout, PageEvent};

/// Install scroll/resize listeners and keep nav highlight, scroll offset
/// and reveal state up to date.
pub fn use_page_tracking(state: PageState) {
    let PageState {
        site,
        mut nav_links,
        mut scroll_y,
        mut revealed,
        ..
    } = state;

    let tracker = use_coroutine(move |mut rx: UnboundedReceiver<PageEvent>| async move {
        let layout = DomLayout;
        let margin = site.peek().header_margin_px;
        let mut sections = ScrollTracker::new(SECTION_IDS, margin);
        let mut reveals = RevealTracker::new(REVEAL_IDS);

        while let Some(event) = rx.next().await {
            match event {
                PageEvent::Ready | PageEvent::Resize => sections.recalculate(&layout),
                PageEvent::Scroll => {}
                PageEvent::PointerMove(..) => continue,
            }

            let y = dom::scroll_y();
            scroll_y.set(y);

            let mut links = nav_links.peek().clone();
            let outcome = sections.highlight(y, &mut links);
            if outcome.changed > 0 {
                tracing::debug!(active = ?outcome.active, "Active section changed");
                nav_links.set(links);
            }

            let newly = reveals.update(y, dom::viewport_height(), &layout);
            if !newly.is_empty() {
                tracing::debug!(ids = ?newly, "Revealed");
                revealed.write().extend(newly);
            }
        }
    });

    // Dropping the handles removes the listeners
    use_hook(move || Rc::new(listen_layout(move |event| tracker.send(event))));

    // First measurement once the sections are mounted
    use_effect(move || tracker.send(PageEvent::Ready));
}
