//! Typewriter text animator.
//!
//! Cycles through a fixed list of phrases, typing each one out a character
//! at a time, pausing, then deleting it again before moving to the next.
//!
//! ## Design
//!
//! The animation is an explicit state machine: [`Typewriter::step`] performs
//! one transition and returns the [`Frame`] to show plus the delay before the
//! next step. [`run_typewriter`] drives it against any [`TextDisplay`] and
//! [`Timer`], so the same loop runs on browser timeouts in the web shell and
//! on tokio's paused clock in tests.
//!
//! ```text
//!   typing ──(phrase complete, wait pause)──▶ deleting
//!     ▲                                          │
//!     └────(zero chars left, next phrase)────────┘
//! ```

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::error::{FolioError, FolioResult};

/// Decorative prefix shown before every rendered phrase
pub const MARKER: &str = "— ";

/// Default delay between typed characters
pub const TYPE_INTERVAL_MS: u64 = 90;

/// Default pause once a phrase is fully shown
pub const PAUSE_MS: u64 = 1200;

/// Step timings for the typewriter.
///
/// Deletion always runs at half the typing interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_interval: Duration,
    pub pause: Duration,
}

impl TypewriterTiming {
    pub fn from_millis(type_interval_ms: u64, pause_ms: u64) -> Self {
        Self {
            type_interval: Duration::from_millis(type_interval_ms),
            pause: Duration::from_millis(pause_ms),
        }
    }

    /// Interval between deleted characters
    pub fn delete_interval(&self) -> Duration {
        self.type_interval / 2
    }
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self::from_millis(TYPE_INTERVAL_MS, PAUSE_MS)
    }
}

/// Which half of the cycle the typewriter is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Deleting,
}

/// Output of a single step: what to display and how long to wait
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay: Duration,
}

/// Typewriter state for one page view.
#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<String>,
    role_index: usize,
    char_count: usize,
    deleting: bool,
    timing: TypewriterTiming,
}

impl Typewriter {
    /// Create a typewriter positioned at the first phrase with nothing typed.
    ///
    /// Returns [`FolioError::EmptyRoleList`] when `roles` is empty.
    pub fn new<I, S>(roles: I, timing: TypewriterTiming) -> FolioResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<String> = roles.into_iter().map(Into::into).collect();
        if roles.is_empty() {
            return Err(FolioError::EmptyRoleList);
        }

        Ok(Self {
            roles,
            role_index: 0,
            char_count: 0,
            deleting: false,
            timing,
        })
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Index of the phrase currently being typed, always `< roles().len()`
    pub fn role_index(&self) -> usize {
        self.role_index
    }

    /// Number of characters of the current phrase on display
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn phase(&self) -> Phase {
        if self.deleting {
            Phase::Deleting
        } else {
            Phase::Typing
        }
    }

    pub fn timing(&self) -> TypewriterTiming {
        self.timing
    }

    pub fn current_role(&self) -> &str {
        &self.roles[self.role_index]
    }

    /// Text currently on display, marker included
    pub fn text(&self) -> String {
        let shown: String = self.current_role().chars().take(self.char_count).collect();
        format!("{MARKER}{shown}")
    }

    /// Advance by one character and return the frame to render.
    pub fn step(&mut self) -> Frame {
        if self.deleting {
            self.char_count = self.char_count.saturating_sub(1);
            let text = self.text();
            if self.char_count == 0 {
                self.deleting = false;
                self.role_index = (self.role_index + 1) % self.roles.len();
                return Frame {
                    text,
                    delay: self.timing.type_interval,
                };
            }
            return Frame {
                text,
                delay: self.timing.delete_interval(),
            };
        }

        let len = self.current_role().chars().count();
        if self.char_count < len {
            self.char_count += 1;
        }
        let text = self.text();
        if self.char_count == len {
            self.deleting = true;
            return Frame {
                text,
                delay: self.timing.pause,
            };
        }
        Frame {
            text,
            delay: self.timing.type_interval,
        }
    }
}

/// Something that can show the typewriter's text
pub trait TextDisplay {
    fn show(&mut self, text: &str);
}

impl TextDisplay for String {
    fn show(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Source of delays between steps
pub trait Timer {
    fn sleep(&self, delay: Duration) -> impl Future<Output = ()>;
}

/// Stops a running [`run_typewriter`] loop before its next step.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Drive `typewriter` until `stop` is signalled.
///
/// Each step is shown and then the loop sleeps for the frame's delay, so
/// steps never overlap. Returns the typewriter in its final state.
pub async fn run_typewriter<D, T>(
    mut typewriter: Typewriter,
    display: &mut D,
    timer: &T,
    stop: StopHandle,
) -> Typewriter
where
    D: TextDisplay,
    T: Timer,
{
    tracing::debug!(roles = typewriter.roles().len(), "Typewriter started");

    while !stop.is_stopped() {
        let frame = typewriter.step();
        display.show(&frame.text);
        timer.sleep(frame.delay).await;
    }

    tracing::debug!(
        role_index = typewriter.role_index(),
        "Typewriter stopped"
    );
    typewriter
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typewriter(roles: &[&str]) -> Typewriter {
        Typewriter::new(roles.iter().copied(), TypewriterTiming::default()).unwrap()
    }

    #[test]
    fn empty_role_list_is_rejected() {
        let err = Typewriter::new(Vec::<String>::new(), TypewriterTiming::default()).unwrap_err();
        assert!(matches!(err, FolioError::EmptyRoleList));
    }

    #[test]
    fn types_one_character_per_step() {
        let mut tw = typewriter(&["Web"]);

        let f1 = tw.step();
        assert_eq!(f1.text, "— W");
        assert_eq!(f1.delay, Duration::from_millis(90));

        let f2 = tw.step();
        assert_eq!(f2.text, "— We");

        let f3 = tw.step();
        assert_eq!(f3.text, "— Web");
        assert_eq!(f3.delay, Duration::from_millis(1200));
        assert_eq!(tw.phase(), Phase::Deleting);
    }

    #[test]
    fn deletes_at_half_speed_then_advances() {
        let mut tw = typewriter(&["ab", "cd"]);
        tw.step();
        tw.step();

        let d1 = tw.step();
        assert_eq!(d1.text, "— a");
        assert_eq!(d1.delay, Duration::from_millis(45));

        let d2 = tw.step();
        assert_eq!(d2.text, "— ");
        assert_eq!(d2.delay, Duration::from_millis(90));
        assert_eq!(tw.role_index(), 1);
        assert_eq!(tw.char_count(), 0);
        assert_eq!(tw.phase(), Phase::Typing);

        assert_eq!(tw.step().text, "— c");
    }

    #[test]
    fn wraps_back_to_first_role() {
        let mut tw = typewriter(&["a", "b"]);
        // "a": type, delete; "b": type, delete
        for _ in 0..4 {
            tw.step();
        }
        assert_eq!(tw.role_index(), 0);
        assert_eq!(tw.current_role(), "a");
    }

    #[test]
    fn single_role_stays_at_index_zero() {
        let mut tw = typewriter(&["Solo"]);
        for _ in 0..100 {
            tw.step();
            assert_eq!(tw.role_index(), 0);
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut tw = typewriter(&["Café"]);
        for _ in 0..4 {
            tw.step();
        }
        assert_eq!(tw.text(), "— Café");
        assert_eq!(tw.phase(), Phase::Deleting);
    }

    #[test]
    fn empty_phrase_pauses_then_moves_on() {
        let mut tw = typewriter(&["", "x"]);

        let typed = tw.step();
        assert_eq!(typed.text, MARKER);
        assert_eq!(typed.delay, Duration::from_millis(1200));

        let deleted = tw.step();
        assert_eq!(deleted.text, MARKER);
        assert_eq!(tw.role_index(), 1);
    }

    #[test]
    fn custom_timing_halves_for_deletion() {
        let timing = TypewriterTiming::from_millis(100, 500);
        assert_eq!(timing.delete_interval(), Duration::from_millis(50));
        assert_eq!(timing.pause, Duration::from_millis(500));

        let mut tw = Typewriter::new(["x"], timing).unwrap();
        assert_eq!(tw.timing(), timing);
        assert_eq!(tw.step().delay, Duration::from_millis(500));
        assert_eq!(tw.step().delay, Duration::from_millis(100));
    }

    #[test]
    fn string_display_replaces_contents() {
        let mut shown = String::from("old");
        shown.show("— new");
        assert_eq!(shown, "— new");
    }

    #[test]
    fn stop_handle_is_shared_between_clones() {
        let stop = StopHandle::new();
        let other = stop.clone();
        assert!(!other.is_stopped());
        stop.stop();
        assert!(other.is_stopped());
    }
}
