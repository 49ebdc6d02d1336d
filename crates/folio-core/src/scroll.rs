//! Scroll position tracking for the navigation bar.
//!
//! [`ScrollTracker`] caches a snapshot of where each page section starts and,
//! given the current scroll offset, decides which section is active. The
//! navigation entries referencing that section are marked active through the
//! [`NavEntry`] trait; every other entry is marked inactive.
//!
//! Layout is read through [`LayoutProbe`], so the tracker has no idea whether
//! it is measuring real DOM elements or a table in a test.

use serde::{Deserialize, Serialize};

/// Default upward margin that accounts for the fixed header
pub const HEADER_MARGIN_PX: f64 = 100.0;

/// Document-relative geometry of a page element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub top: f64,
    pub height: f64,
}

/// Reads live layout for elements addressed by id.
///
/// Returns `None` for ids that are not part of the current page.
pub trait LayoutProbe {
    fn measure(&self, id: &str) -> Option<ElementRect>;
}

/// A navigation entry that can be highlighted
pub trait NavEntry {
    /// Section id this entry links to, without the leading `#`
    fn target(&self) -> Option<&str>;
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
}

/// A menu link pointing at an in-page anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    #[serde(skip)]
    pub active: bool,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            active: false,
        }
    }
}

impl NavEntry for NavLink {
    fn target(&self) -> Option<&str> {
        self.href.strip_prefix('#')
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Scroll offset at which a section counts as entered.
///
/// `top` is `None` until measured, or when the section was missing from the
/// layout at the last recalculation.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBoundary {
    pub id: String,
    pub top: Option<f64>,
}

/// Result of a highlight pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightOutcome {
    /// Section selected as active, if any sections are tracked
    pub active: Option<String>,
    /// Number of navigation entries whose state changed
    pub changed: usize,
}

/// Tracks which section the viewport is in.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    boundaries: Vec<SectionBoundary>,
    margin: f64,
    active: Option<String>,
}

impl ScrollTracker {
    /// Track `section_ids` in document order.
    pub fn new<I, S>(section_ids: I, margin: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let boundaries = section_ids
            .into_iter()
            .map(|id| SectionBoundary {
                id: id.into(),
                top: None,
            })
            .collect();

        Self {
            boundaries,
            margin,
            active: None,
        }
    }

    pub fn boundaries(&self) -> &[SectionBoundary] {
        &self.boundaries
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Section chosen by the most recent [`highlight`](Self::highlight)
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Re-measure every tracked section.
    ///
    /// Call at startup and whenever the viewport is resized.
    pub fn recalculate<P: LayoutProbe>(&mut self, probe: &P) {
        for boundary in &mut self.boundaries {
            boundary.top = probe
                .measure(&boundary.id)
                .map(|rect| rect.top - self.margin);
        }

        tracing::debug!(
            sections = self.boundaries.len(),
            measured = self.boundaries.iter().filter(|b| b.top.is_some()).count(),
            "Recalculated section boundaries"
        );
    }

    /// Section that should be active at scroll offset `y`.
    ///
    /// The last measured section whose boundary has been passed wins, which
    /// also breaks ties in favour of the later section. Falls back to the
    /// first tracked section.
    pub fn section_at(&self, y: f64) -> Option<&str> {
        let mut current = self.boundaries.first().map(|b| b.id.as_str());
        for boundary in &self.boundaries {
            if let Some(top) = boundary.top {
                if y >= top {
                    current = Some(boundary.id.as_str());
                }
            }
        }
        current
    }

    /// Select the active section for offset `y` and update `entries` to match.
    ///
    /// Only entries whose state differs are touched.
    pub fn highlight<E: NavEntry>(&mut self, y: f64, entries: &mut [E]) -> HighlightOutcome {
        self.active = self.section_at(y).map(str::to_owned);

        let mut changed = 0;
        for entry in entries.iter_mut() {
            let on = matches!(
                (entry.target(), self.active.as_deref()),
                (Some(target), Some(active)) if target == active
            );
            if entry.is_active() != on {
                entry.set_active(on);
                changed += 1;
            }
        }

        HighlightOutcome {
            active: self.active.clone(),
            changed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Tops(HashMap<&'static str, f64>);

    impl LayoutProbe for Tops {
        fn measure(&self, id: &str) -> Option<ElementRect> {
            self.0.get(id).map(|&top| ElementRect { top, height: 200.0 })
        }
    }

    fn links() -> Vec<NavLink> {
        vec![
            NavLink::new("A", "#a"),
            NavLink::new("B", "#b"),
            NavLink::new("C", "#c"),
        ]
    }

    fn tracker() -> ScrollTracker {
        // Boundaries land at 0, 300 and 800 once the margin is removed
        let probe = Tops(HashMap::from([("a", 100.0), ("b", 400.0), ("c", 900.0)]));
        let mut tracker = ScrollTracker::new(["a", "b", "c"], HEADER_MARGIN_PX);
        tracker.recalculate(&probe);
        tracker
    }

    #[test]
    fn recalculate_subtracts_margin() {
        let tracker = tracker();
        assert_eq!(tracker.margin(), HEADER_MARGIN_PX);
        let tops: Vec<_> = tracker.boundaries().iter().map(|b| b.top).collect();
        assert_eq!(tops, vec![Some(0.0), Some(300.0), Some(800.0)]);
    }

    #[test]
    fn selects_deepest_passed_section() {
        let tracker = tracker();
        assert_eq!(tracker.section_at(0.0), Some("a"));
        assert_eq!(tracker.section_at(500.0), Some("b"));
        assert_eq!(tracker.section_at(900.0), Some("c"));
    }

    #[test]
    fn boundary_is_inclusive() {
        let tracker = tracker();
        assert_eq!(tracker.section_at(300.0), Some("b"));
        assert_eq!(tracker.section_at(299.9), Some("a"));
    }

    #[test]
    fn defaults_to_first_section_above_all_boundaries() {
        let probe = Tops(HashMap::from([("a", 500.0), ("b", 900.0)]));
        let mut tracker = ScrollTracker::new(["a", "b"], HEADER_MARGIN_PX);
        tracker.recalculate(&probe);
        assert_eq!(tracker.section_at(0.0), Some("a"));
    }

    #[test]
    fn highlight_marks_exactly_one_link() {
        let mut tracker = tracker();
        let mut links = links();

        let outcome = tracker.highlight(500.0, &mut links);
        assert_eq!(outcome.active.as_deref(), Some("b"));
        assert_eq!(outcome.changed, 1);
        assert_eq!(
            links.iter().map(|l| l.active).collect::<Vec<_>>(),
            vec![false, true, false]
        );

        let outcome = tracker.highlight(900.0, &mut links);
        assert_eq!(outcome.changed, 2);
        assert_eq!(tracker.active(), Some("c"));
        assert!(links[2].active);
        assert!(!links[1].active);
    }

    #[test]
    fn repeated_highlight_is_a_no_op() {
        let mut tracker = tracker();
        let mut links = links();
        tracker.highlight(500.0, &mut links);
        let again = tracker.highlight(500.0, &mut links);
        assert_eq!(again.changed, 0);
    }

    #[test]
    fn missing_section_is_skipped() {
        let probe = Tops(HashMap::from([("a", 100.0), ("c", 900.0)]));
        let mut tracker = ScrollTracker::new(["a", "b", "c"], HEADER_MARGIN_PX);
        tracker.recalculate(&probe);

        assert_eq!(tracker.boundaries()[1].top, None);
        assert_eq!(tracker.section_at(500.0), Some("a"));
        assert_eq!(tracker.section_at(850.0), Some("c"));
    }

    #[test]
    fn no_sections_leaves_links_inactive() {
        let mut tracker = ScrollTracker::new(Vec::<String>::new(), HEADER_MARGIN_PX);
        let mut links = links();
        let outcome = tracker.highlight(100.0, &mut links);
        assert_eq!(outcome.active, None);
        assert_eq!(outcome.changed, 0);
    }

    #[test]
    fn nav_link_target_strips_hash() {
        assert_eq!(NavLink::new("About", "#about").target(), Some("about"));
        assert_eq!(NavLink::new("Blog", "/blog").target(), None);
    }
}
