//! Decorative background particles.

use rand::Rng;
use serde::Serialize;

use crate::config::ParticleConfig;

/// A floating dot positioned in viewport units. Purely decorative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    pub size_px: f32,
    /// Horizontal position, 0..100 percent of the viewport width.
    pub left_vw: f32,
    /// Vertical position, 0..100 percent of the viewport height.
    pub top_vh: f32,
    pub delay_secs: f32,
}

impl Particle {
    /// Inline style for a `div.particle` node.
    pub fn css_style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}vw; top: {top}vh; animation-delay: {delay}s;",
            size = self.size_px,
            left = self.left_vw,
            top = self.top_vh,
            delay = self.delay_secs,
        )
    }
}

pub fn generate_particles<R: Rng + ?Sized>(config: &ParticleConfig, rng: &mut R) -> Vec<Particle> {
    let span = (config.max_size_px - config.min_size_px).max(0.0);
    let particles: Vec<Particle> = (0..config.count)
        .map(|_| Particle {
            size_px: config.min_size_px + rng.gen::<f32>() * span,
            left_vw: rng.gen::<f32>() * 100.0,
            top_vh: rng.gen::<f32>() * 100.0,
            delay_secs: rng.gen::<f32>() * config.max_delay_secs.max(0.0),
        })
        .collect();
    tracing::debug!("Generated {} particles", particles.len());
    particles
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_count_and_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = generate_particles(&ParticleConfig::default(), &mut rng);
        assert_eq!(particles.len(), 100);
        for p in &particles {
            assert!((2.0..=7.0).contains(&p.size_px));
            assert!((0.0..100.0).contains(&p.left_vw));
            assert!((0.0..100.0).contains(&p.top_vh));
            assert!((0.0..5.0).contains(&p.delay_secs));
        }
    }

    #[test]
    fn test_degenerate_ranges() {
        let config = ParticleConfig {
            count: 3,
            min_size_px: 4.0,
            max_size_px: 4.0,
            max_delay_secs: 0.0,
        };
        let particles = generate_particles(&config, &mut StdRng::seed_from_u64(1));
        assert!(particles.iter().all(|p| p.size_px == 4.0 && p.delay_secs == 0.0));
    }

    #[test]
    fn test_thread_rng_works() {
        let particles = generate_particles(&ParticleConfig::default(), &mut rand::thread_rng());
        assert_eq!(particles.len(), 100);
    }

    #[test]
    fn test_css_style() {
        let p = Particle {
            size_px: 3.5,
            left_vw: 10.0,
            top_vh: 20.0,
            delay_secs: 1.5,
        };
        assert_eq!(
            p.css_style(),
            "width: 3.5px; height: 3.5px; left: 10vw; top: 20vh; animation-delay: 1.5s;"
        );
    }
}
