//! Floating background particles.

use rand::Rng;

/// Number of particles created on page load
pub const PARTICLE_COUNT: usize = 50;

/// Randomized placement and timing for one particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSpec {
    /// Horizontal position, percent of container width
    pub left_pct: f64,
    /// Animation delay in seconds
    pub delay_s: f64,
    /// Animation duration in seconds
    pub duration_s: f64,
    /// Width and height in pixels
    pub size_px: f64,
}

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_pct: rng.random_range(0.0..100.0),
            delay_s: rng.random_range(0.0..20.0),
            duration_s: 15.0 + rng.random_range(0.0..10.0),
            size_px: 1.0 + rng.random_range(0.0..2.0),
        }
    }

    /// Inline style for the particle element
    pub fn style(&self) -> String {
        format!(
            "left: {}%; animation-delay: {}s; animation-duration: {}s; width: {}px; height: {}px;",
            self.left_pct, self.delay_s, self.duration_s, self.size_px, self.size_px
        )
    }
}

pub fn generate_particles<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<ParticleSpec> {
    (0..count).map(|_| ParticleSpec::random(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn particles_stay_within_ranges() {
        let mut rng = SmallRng::seed_from_u64(7);
        let particles = generate_particles(PARTICLE_COUNT, &mut rng);
        assert_eq!(particles.len(), PARTICLE_COUNT);

        for p in &particles {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..20.0).contains(&p.delay_s));
            assert!((15.0..25.0).contains(&p.duration_s));
            assert!((1.0..3.0).contains(&p.size_px));
        }
    }

    #[test]
    fn style_uses_square_size() {
        let spec = ParticleSpec {
            left_pct: 10.0,
            delay_s: 2.0,
            duration_s: 18.0,
            size_px: 1.5,
        };
        assert_eq!(
            spec.style(),
            "left: 10%; animation-delay: 2s; animation-duration: 18s; width: 1.5px; height: 1.5px;"
        );
    }
}
