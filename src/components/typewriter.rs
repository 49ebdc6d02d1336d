//! Rotating role line in the hero.

use dioxus::prelude::*;
use folio_core::{run_typewriter, StopHandle, Typewriter, MARKER};

use crate::context::use_site;
use crate::platform::{BrowserTimer, SignalDisplay};

/// The `.typewriter` span.
///
/// The loop starts once the span is mounted and stops when the component
/// is dropped.
#[component]
pub fn TypewriterText() -> Element {
    let site = use_site();
    let text = use_signal(|| MARKER.to_string());
    let mut started = use_signal(|| false);
    let stop = use_hook(StopHandle::new);

    use_drop({
        let stop = stop.clone();
        move || stop.stop()
    });

    let on_mounted = move |_| {
        if started() {
            return;
        }
        started.set(true);

        let typewriter = {
            let config = site.peek();
            Typewriter::new(config.roles.iter().cloned(), config.typewriter_timing())
        };

        match typewriter {
            Ok(typewriter) => {
                tracing::info!(roles = typewriter.roles().len(), "Typewriter started");
                let stop = stop.clone();
                spawn(async move {
                    let mut display = SignalDisplay(text);
                    run_typewriter(typewriter, &mut display, &BrowserTimer, stop).await;
                    tracing::debug!("Typewriter stopped");
                });
            }
            Err(e) => tracing::warn!(error = %e, "Typewriter not started"),
        }
    };

    rsx! {
        span {
            class: "typewriter",
            "aria-live": "polite",
            onmounted: on_mounted,
            "{text}"
        }
    }
}
