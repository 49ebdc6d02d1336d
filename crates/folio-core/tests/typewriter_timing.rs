//! Timing tests for the typewriter loop
//!
//! Runs `run_typewriter` on tokio's paused clock so delays are exact and the
//! tests finish instantly.

use std::future::Future;
use std::time::Duration;

use folio_core::{run_typewriter, StopHandle, TextDisplay, Timer, Typewriter, TypewriterTiming};
use tokio::time::Instant;

struct TokioTimer;

impl Timer for TokioTimer {
    fn sleep(&self, delay: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(delay)
    }
}

/// Records every frame with the time it was shown, stopping after `limit`
struct Recorder {
    start: Instant,
    frames: Vec<(Duration, String)>,
    limit: usize,
    stop: StopHandle,
}

impl Recorder {
    fn new(limit: usize, stop: StopHandle) -> Self {
        Self {
            start: Instant::now(),
            frames: Vec::new(),
            limit,
            stop,
        }
    }
}

impl TextDisplay for Recorder {
    fn show(&mut self, text: &str) {
        self.frames.push((self.start.elapsed(), text.to_string()));
        if self.frames.len() >= self.limit {
            self.stop.stop();
        }
    }
}

fn assert_near(actual: Duration, expected_ms: u64) {
    let expected = Duration::from_millis(expected_ms);
    assert!(
        actual >= expected && actual <= expected + Duration::from_millis(2),
        "expected ~{expected:?}, got {actual:?}"
    );
}

#[tokio::test(start_paused = true)]
async fn frames_follow_type_pause_delete_delays() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let stop = StopHandle::new();
    let mut recorder = Recorder::new(5, stop.clone());
    let tw = Typewriter::new(["ab"], TypewriterTiming::default()).unwrap();

    let tw = run_typewriter(tw, &mut recorder, &TokioTimer, stop).await;

    let texts: Vec<&str> = recorder.frames.iter().map(|(_, t)| t.as_str()).collect();
    assert_eq!(texts, vec!["— a", "— ab", "— a", "— ", "— a"]);

    // type 90, pause 1200, delete 45, next phrase after 90
    assert_near(recorder.frames[0].0, 0);
    assert_near(recorder.frames[1].0, 90);
    assert_near(recorder.frames[2].0, 90 + 1200);
    assert_near(recorder.frames[3].0, 90 + 1200 + 45);
    assert_near(recorder.frames[4].0, 90 + 1200 + 45 + 90);

    assert_eq!(tw.role_index(), 0);
    assert_eq!(tw.char_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn custom_timing_is_respected() {
    let stop = StopHandle::new();
    let mut recorder = Recorder::new(3, stop.clone());
    let timing = TypewriterTiming::from_millis(200, 500);
    let tw = Typewriter::new(["x", "y"], timing).unwrap();

    let tw = run_typewriter(tw, &mut recorder, &TokioTimer, stop).await;

    assert_near(recorder.frames[1].0, 500);
    assert_near(recorder.frames[2].0, 500 + 200);
    assert_eq!(recorder.frames[2].1, "— y");
    assert_eq!(tw.role_index(), 1);
}

#[tokio::test(start_paused = true)]
async fn stopped_handle_shows_nothing() {
    let stop = StopHandle::new();
    stop.stop();
    let mut shown = String::from("untouched");
    let tw = Typewriter::new(["Web Developer"], TypewriterTiming::default()).unwrap();

    let tw = run_typewriter(tw, &mut shown, &TokioTimer, stop).await;

    assert_eq!(shown, "untouched");
    assert_eq!(tw.char_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn single_role_cycles_forever_at_index_zero() {
    let stop = StopHandle::new();
    let mut recorder = Recorder::new(60, stop.clone());
    let tw = Typewriter::new(["Hi"], TypewriterTiming::default()).unwrap();

    let tw = run_typewriter(tw, &mut recorder, &TokioTimer, stop).await;

    // "Hi" takes four frames per cycle: "H", "Hi", "H", ""
    let cycle = ["— H", "— Hi", "— H", "— "];
    for (i, (_, text)) in recorder.frames.iter().enumerate() {
        assert_eq!(text, cycle[i % 4]);
    }
    assert_eq!(tw.role_index(), 0);
}
