//! Count-up animation for the stats block.

/// Number of frames a counter takes to reach its target
pub const COUNTER_FRAMES: f64 = 100.0;

/// Counts from zero to `target` in equal increments, one per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            increment: target / COUNTER_FRAMES,
            current: 0.0,
            finished: false,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Text for the next frame, or `None` once the target has been shown.
    ///
    /// Intermediate frames use one decimal place; the last frame is the
    /// target itself.
    pub fn step(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        if self.current < self.target {
            self.current += self.increment;
            return Some(format!("{:.1}", self.current));
        }
        self.finished = true;
        Some(format!("{}", self.target))
    }
}
