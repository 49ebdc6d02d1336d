//! Timer and display adapters for the typewriter loop.

use std::future::Future;
use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{TextDisplay, Timer};
use gloo::timers::future::TimeoutFuture;

/// [`Timer`] backed by `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, delay: Duration) -> impl Future<Output = ()> {
        TimeoutFuture::new(millis(delay))
    }
}

/// Clamp a duration to the `u32` milliseconds `setTimeout` accepts
pub fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// [`TextDisplay`] that writes into a signal rendered by a component
pub struct SignalDisplay(pub Signal<String>);

impl TextDisplay for SignalDisplay {
    fn show(&mut self, text: &str) {
        self.0.set(text.to_string());
    }
}
