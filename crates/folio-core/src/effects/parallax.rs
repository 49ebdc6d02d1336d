//! Scroll parallax transforms for the hero and background shapes.

/// Transform for the hero block at scroll offset `scrolled`
pub fn hero_transform(scrolled: f64) -> String {
    format!("translateY({}px)", scrolled * 0.5)
}

/// Transform for the `index`-th floating shape; deeper shapes move faster
pub fn shape_transform(index: usize, scrolled: f64) -> String {
    let speed = 0.5 + index as f64 * 0.1;
    format!(
        "translateY({}px) rotate({}deg)",
        scrolled * speed,
        scrolled * 0.1
    )
}

/// Transform for the `index`-th gradient orb
pub fn orb_transform(index: usize, scrolled: f64) -> String {
    let speed = 0.3 + index as f64 * 0.1;
    format!("translateY({}px)", scrolled * speed)
}

/// Inline style for a background shape.
///
/// Hovering pauses the shape's float animation and enlarges it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapeHover(pub bool);

impl ShapeHover {
    pub fn style(&self, index: usize, scrolled: f64) -> String {
        if self.0 {
            "animation-play-state: paused; transform: scale(1.2); opacity: 0.2;".to_string()
        } else {
            format!(
                "animation-play-state: running; transform: {}; opacity: 0.1;",
                shape_transform(index, scrolled)
            )
        }
    }
}
