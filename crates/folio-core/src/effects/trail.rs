//! Cursor trail: a short-lived dot at every mouse position.
//!
//! Each dot fades shortly after it appears and is removed once its fade
//! transition has finished. If the mouse moves fast enough to exceed
//! [`TRAIL_LENGTH`] live dots, the oldest live dot fades early.

use std::time::Duration;

/// Maximum number of dots that are not yet fading
pub const TRAIL_LENGTH: usize = 20;

/// How long a dot stays fully visible
pub const DOT_LIFETIME: Duration = Duration::from_millis(100);

/// Length of the fade-out transition before removal
pub const FADE_DURATION: Duration = Duration::from_millis(300);

pub type DotId = u64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailDot {
    pub id: DotId,
    pub x: f64,
    pub y: f64,
    pub fading: bool,
}

#[derive(Debug, Clone)]
pub struct CursorTrail {
    dots: Vec<TrailDot>,
    capacity: usize,
    next_id: DotId,
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self::new(TRAIL_LENGTH)
    }
}

impl CursorTrail {
    pub fn new(capacity: usize) -> Self {
        Self {
            dots: Vec::new(),
            capacity,
            next_id: 0,
        }
    }

    /// Every dot still on screen, fading or not, oldest first
    pub fn dots(&self) -> &[TrailDot] {
        &self.dots
    }

    pub fn live_count(&self) -> usize {
        self.dots.iter().filter(|d| !d.fading).count()
    }

    /// Add a dot at `(x, y)`.
    ///
    /// Returns the new dot's id and, when the trail overflowed, the id of the
    /// dot that was faded to make room. Both need a scheduled removal.
    pub fn push(&mut self, x: f64, y: f64) -> (DotId, Option<DotId>) {
        let id = self.next_id;
        self.next_id += 1;
        self.dots.push(TrailDot {
            id,
            x,
            y,
            fading: false,
        });

        let evicted = if self.live_count() > self.capacity {
            self.dots.iter_mut().find(|d| !d.fading).map(|dot| {
                dot.fading = true;
                dot.id
            })
        } else {
            None
        };

        (id, evicted)
    }

    /// Start fading a dot. Returns false if it is gone or already fading.
    pub fn fade(&mut self, id: DotId) -> bool {
        match self.dots.iter_mut().find(|d| d.id == id) {
            Some(dot) if !dot.fading => {
                dot.fading = true;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: DotId) {
        self.dots.retain(|d| d.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_fades_oldest_live_dot() {
        let mut trail = CursorTrail::new(2);
        trail.push(0.0, 0.0);
        trail.push(1.0, 1.0);
        let (_, evicted) = trail.push(2.0, 2.0);

        assert_eq!(evicted, Some(0));
        assert_eq!(trail.live_count(), 2);
        assert_eq!(trail.dots().len(), 3);
    }

    #[test]
    fn fade_then_remove() {
        let mut trail = CursorTrail::default();
        let (id, evicted) = trail.push(5.0, 5.0);
        assert_eq!(evicted, None);

        assert!(trail.fade(id));
        assert!(!trail.fade(id));
        assert_eq!(trail.live_count(), 0);

        trail.remove(id);
        assert!(trail.dots().is_empty());
        assert!(!trail.fade(id));
    }

    #[test]
    fn live_dots_never_exceed_capacity() {
        let mut trail = CursorTrail::default();
        for i in 0..100 {
            trail.push(i as f64, i as f64);
            assert!(trail.live_count() <= TRAIL_LENGTH);
        }
    }
}
