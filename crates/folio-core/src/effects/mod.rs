//! Decorative background effects.
//!
//! Everything here only computes *what* to render; easing and keyframes are
//! left to CSS.

pub mod counter;
pub mod parallax;
pub mod particles;
pub mod trail;

pub use counter::CounterAnimation;
pub use parallax::{hero_transform, orb_transform, shape_transform, ShapeHover};
pub use particles::{generate_particles, ParticleSpec, PARTICLE_COUNT};
pub use trail::{CursorTrail, DotId, TrailDot, TRAIL_LENGTH};
