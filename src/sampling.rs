//! Randomized interpolation helpers for emission.
//!
//! Each helper draws one uniform `t` in `[0, 1)` and blends its two inputs as
//! `a * t + b * (1 - t)`. The free functions take any [`rand::Rng`]; [`Sampler`]
//! bundles a small fast RNG with the same helpers as methods. Scenes seed it
//! from entropy; tests can pin it with [`Sampler::seeded`].
//!
//! ```
//! use sparks::sampling::Sampler;
//! use std::f32::consts::TAU;
//!
//! let mut sampler = Sampler::seeded(7);
//! let dir = sampler.direction(0.0, TAU);
//! assert!((dir.length() - 1.0).abs() < 1e-5);
//! ```

use glam::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Unit vector at an angle (radians) drawn between `angle1` and `angle2`.
pub fn sample_direction<R: Rng + ?Sized>(rng: &mut R, angle1: f32, angle2: f32) -> Vec2 {
    let theta = sample_number(rng, angle1, angle2);
    Vec2::new(theta.cos(), theta.sin())
}

/// Color drawn on the line between `color1` and `color2`.
pub fn sample_color<R: Rng + ?Sized>(rng: &mut R, color1: Vec3, color2: Vec3) -> Vec3 {
    let t: f32 = rng.gen();
    color1 * t + color2 * (1.0 - t)
}

/// Scalar drawn between `value1` and `value2`.
pub fn sample_number<R: Rng + ?Sized>(rng: &mut R, value1: f32, value2: f32) -> f32 {
    let t: f32 = rng.gen();
    value1 * t + value2 * (1.0 - t)
}

/// Owns an RNG and exposes the sampling helpers as methods.
#[derive(Clone, Debug)]
pub struct Sampler {
    rng: SmallRng,
}

impl Sampler {
    /// Sampler seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Sampler with a fixed seed; the same seed yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// See [`sample_direction`].
    #[inline]
    pub fn direction(&mut self, angle1: f32, angle2: f32) -> Vec2 {
        sample_direction(&mut self.rng, angle1, angle2)
    }

    /// See [`sample_color`].
    #[inline]
    pub fn color(&mut self, color1: Vec3, color2: Vec3) -> Vec3 {
        sample_color(&mut self.rng, color1, color2)
    }

    /// See [`sample_number`].
    #[inline]
    pub fn number(&mut self, value1: f32, value2: f32) -> f32 {
        sample_number(&mut self.rng, value1, value2)
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use std::f32::consts::{FRAC_PI_2, TAU};

    #[test]
    fn test_number_stays_between_bounds() {
        let mut sampler = Sampler::seeded(1);
        for _ in 0..1000 {
            let v = sampler.number(1.0, 3.0);
            assert!(v >= 1.0 - 1e-5 && v <= 3.0 + 1e-5, "{} out of range", v);
        }
    }

    #[test]
    fn test_number_bounds_in_either_order() {
        let mut sampler = Sampler::seeded(2);
        for _ in 0..1000 {
            let v = sampler.number(4.0, 2.0);
            assert!(v >= 2.0 - 1e-5 && v <= 4.0 + 1e-5);
        }
    }

    #[test]
    fn test_degenerate_range_collapses() {
        let mut sampler = Sampler::seeded(3);
        assert!((sampler.number(5.0, 5.0) - 5.0).abs() < 1e-5);
        let c = sampler.color(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 3.0));
        assert!((c - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn test_direction_is_unit_length() {
        let mut sampler = Sampler::seeded(4);
        for _ in 0..100 {
            let dir = sampler.direction(0.0, TAU);
            assert!((dir.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_direction_fixed_angle() {
        let mut sampler = Sampler::seeded(5);
        let dir = sampler.direction(FRAC_PI_2, FRAC_PI_2);
        assert!(dir.x.abs() < 1e-5);
        assert!((dir.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_color_channels_interpolate_together() {
        let mut sampler = Sampler::seeded(6);
        let red = Vec3::new(255.0, 0.0, 0.0);
        let yellow = Vec3::new(255.0, 255.0, 0.0);
        for _ in 0..100 {
            let c = sampler.color(red, yellow);
            assert!((c.x - 255.0).abs() < 1e-3);
            assert!(c.y >= -1e-3 && c.y <= 255.0 + 1e-3);
            assert_eq!(c.z, 0.0);
        }
    }

    #[test]
    fn test_zero_draw_picks_second_value() {
        // t = 0 weights everything onto the second argument.
        let mut rng = StepRng::new(0, 0);
        assert_eq!(sample_number(&mut rng, 10.0, 20.0), 20.0);
    }

    #[test]
    fn test_seeded_samplers_repeat() {
        let mut a = Sampler::seeded(42);
        let mut b = Sampler::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.number(0.0, 1.0), b.number(0.0, 1.0));
            assert_eq!(a.direction(0.0, TAU), b.direction(0.0, TAU));
        }
    }

    #[test]
    fn test_independent_draw_per_call() {
        let mut sampler = Sampler::seeded(9);
        let draws: Vec<f32> = (0..8).map(|_| sampler.number(0.0, 1.0)).collect();
        assert!(draws.windows(2).any(|w| w[0] != w[1]));
    }
}
