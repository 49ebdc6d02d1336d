//! Window-level event listeners.
//!
//! Browser callbacks never touch component state directly; they forward a
//! [`PageEvent`] into a Dioxus coroutine, which does the work inside the
//! runtime.

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::utils::{document, window};
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

/// Something happened to the page that may change what is highlighted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    /// Sections have been mounted; measure everything once
    Ready,
    Scroll,
    Resize,
    /// Pointer moved to client coordinates `(x, y)`
    PointerMove(f64, f64),
}

/// Listener options that can never call `preventDefault`
pub fn passive() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: true,
    }
}

/// Forward window scroll (passively) and resize events to `send`.
///
/// The listeners are removed when the returned handles are dropped.
pub fn listen_layout<F>(send: F) -> Vec<EventListener>
where
    F: Fn(PageEvent) + Clone + 'static,
{
    let window = window();
    let on_scroll = send.clone();

    vec![
        EventListener::new_with_options(&window, "scroll", passive(), move |_| {
            on_scroll(PageEvent::Scroll)
        }),
        EventListener::new(&window, "resize", move |_| send(PageEvent::Resize)),
    ]
}

/// Forward document mouse moves to `send`
pub fn listen_pointer<F>(send: F) -> EventListener
where
    F: Fn(PageEvent) + 'static,
{
    EventListener::new_with_options(&document(), "mousemove", passive(), move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            send(PageEvent::PointerMove(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            ));
        }
    })
}
