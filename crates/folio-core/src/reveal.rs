//! One-shot scroll reveal.
//!
//! Content blocks start hidden and are revealed the first time at least
//! [`REVEAL_THRESHOLD`] of their height is inside the viewport. Once revealed
//! a block is never reported again.

use std::collections::HashSet;

use crate::scroll::LayoutProbe;

/// Fraction of an element that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    pending: Vec<String>,
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pending: ids.into_iter().map(Into::into).collect(),
            revealed: HashSet::new(),
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    /// Reveal every pending element that now intersects the viewport.
    ///
    /// Returns the newly revealed ids in tracking order.
    pub fn update<P: LayoutProbe>(
        &mut self,
        scroll_y: f64,
        viewport_height: f64,
        probe: &P,
    ) -> Vec<String> {
        let view_top = scroll_y;
        let view_bottom = scroll_y + viewport_height;

        let (newly, still): (Vec<String>, Vec<String>) =
            self.pending.drain(..).partition(|id| {
                probe
                    .measure(id)
                    .map(|rect| {
                        let visible = (rect.top + rect.height).min(view_bottom)
                            - rect.top.max(view_top);
                        if rect.height <= 0.0 {
                            rect.top >= view_top && rect.top <= view_bottom
                        } else {
                            visible >= rect.height * REVEAL_THRESHOLD
                        }
                    })
                    .unwrap_or(false)
            });

        self.pending = still;
        self.revealed.extend(newly.iter().cloned());
        newly
    }
}
