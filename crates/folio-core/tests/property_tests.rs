//! Property-based tests for the typewriter and scroll tracker
//!
//! Uses proptest to verify the invariants both state machines promise.

use std::collections::HashMap;

use folio_core::{ElementRect, LayoutProbe, Phase, ScrollTracker, Typewriter, TypewriterTiming};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Short phrases, including the empty phrase and non-ASCII text
fn roles_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z &+éü]{0,12}", 1..6)
}

/// Section tops in arbitrary order (document order need not be sorted)
fn tops_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..5000.0, 1..8)
}

struct Layout(HashMap<String, f64>);

impl LayoutProbe for Layout {
    fn measure(&self, id: &str) -> Option<ElementRect> {
        self.0.get(id).map(|&top| ElementRect { top, height: 100.0 })
    }
}

fn tracker_for(tops: &[f64]) -> ScrollTracker {
    let ids: Vec<String> = (0..tops.len()).map(|i| format!("s{i}")).collect();
    let layout = Layout(ids.iter().cloned().zip(tops.iter().copied()).collect());
    let mut tracker = ScrollTracker::new(ids, 100.0);
    tracker.recalculate(&layout);
    tracker
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// One full cycle returns to zero characters and advances the index by one
    #[test]
    fn full_cycle_advances_role(roles in roles_strategy(), start in 0usize..10) {
        let mut tw = Typewriter::new(roles.clone(), TypewriterTiming::default()).unwrap();

        // Skip ahead a few whole cycles so we do not always start at index 0
        for _ in 0..start {
            let len = tw.current_role().chars().count().max(1);
            for _ in 0..2 * len {
                tw.step();
            }
        }

        let before = tw.role_index();
        let len = tw.current_role().chars().count().max(1);
        for _ in 0..2 * len {
            tw.step();
        }

        prop_assert_eq!(tw.char_count(), 0);
        prop_assert_eq!(tw.phase(), Phase::Typing);
        prop_assert_eq!(tw.role_index(), (before + 1) % roles.len());
    }

    /// Displayed length never decreases while typing, never increases while
    /// deleting, and stays within the current phrase
    #[test]
    fn display_length_is_monotonic_per_phase(roles in roles_strategy(), steps in 1usize..300) {
        let mut tw = Typewriter::new(roles, TypewriterTiming::default()).unwrap();
        let marker_len = folio_core::MARKER.chars().count();

        for _ in 0..steps {
            let phase = tw.phase();
            let role_before = tw.role_index();
            let before = tw.char_count();

            let frame = tw.step();
            let shown = frame.text.chars().count() - marker_len;

            match phase {
                Phase::Typing => prop_assert!(shown >= before),
                Phase::Deleting => prop_assert!(shown <= before),
            }
            let phrase_len = tw.roles()[role_before].chars().count();
            prop_assert!(shown <= phrase_len);
            prop_assert!(tw.char_count() <= tw.current_role().chars().count());
            prop_assert!(frame.text.starts_with(folio_core::MARKER));
        }
    }

    /// The selected section is the last one whose boundary has been passed
    #[test]
    fn highlight_selects_last_passed_boundary(tops in tops_strategy(), y in -200.0f64..6000.0) {
        let tracker = tracker_for(&tops);
        let selected = tracker.section_at(y).unwrap().to_string();

        let expected = tops
            .iter()
            .enumerate()
            .filter(|(_, top)| y >= **top - 100.0)
            .map(|(i, _)| format!("s{i}"))
            .last()
            .unwrap_or_else(|| "s0".to_string());

        prop_assert_eq!(selected, expected);
    }

    /// Recalculating without a layout change yields identical boundaries
    #[test]
    fn recalculate_is_idempotent(tops in tops_strategy()) {
        let ids: Vec<String> = (0..tops.len()).map(|i| format!("s{i}")).collect();
        let layout = Layout(ids.iter().cloned().zip(tops.iter().copied()).collect());
        let mut tracker = ScrollTracker::new(ids, 100.0);

        tracker.recalculate(&layout);
        let first = tracker.boundaries().to_vec();
        tracker.recalculate(&layout);

        prop_assert_eq!(first, tracker.boundaries().to_vec());
    }
}
