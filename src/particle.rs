//! The simulated particle.
//!
//! A [`Particle`] is plain data: kinematic state (position, velocity,
//! acceleration), a lifetime budget and the visual attributes used when it is
//! drawn. It has no behavior of its own; [`ParticleSystem`](crate::ParticleSystem)
//! ages, moves and removes it.
//!
//! | Field | Type | Description |
//! |-------|------|-------------|
//! | `position` | `Vec2` | World position (pixels, y down) |
//! | `velocity` | `Vec2` | Units per second |
//! | `acceleration` | `Vec2` | Overwritten with gravity every step |
//! | `age` | `f32` | Seconds since emission |
//! | `life` | `f32` | Lifetime budget in seconds |
//! | `color` | `Vec3` | RGB channels, 0-255 |
//! | `size` | `f32` | Circle radius |

use glam::{Vec2, Vec3};

/// A single simulated point with a finite lifespan.
///
/// Inputs are taken as-is: negative lifetimes or sizes are the emitter's
/// problem, not the particle's.
///
/// # Example
///
/// ```
/// use sparks::{Particle, Vec2, Vec3};
///
/// let spark = Particle::new(
///     Vec2::new(240.0, 160.0),
///     Vec2::new(0.0, -50.0),
///     2.0,
///     Vec3::new(255.0, 128.0, 0.0),
///     3.0,
/// );
/// assert_eq!(spark.age, 0.0);
/// assert_eq!(spark.acceleration, Vec2::ZERO);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// World position.
    pub position: Vec2,
    /// Velocity in units per second.
    pub velocity: Vec2,
    /// Acceleration for the current step.
    pub acceleration: Vec2,
    /// Seconds elapsed since emission.
    pub age: f32,
    /// Lifetime budget in seconds.
    pub life: f32,
    /// RGB channel values (0-255).
    pub color: Vec3,
    /// Radius used for drawing and wall collisions.
    pub size: f32,
}

impl Particle {
    /// Create a freshly emitted particle with zero age and acceleration.
    pub fn new(position: Vec2, velocity: Vec2, life: f32, color: Vec3, size: f32) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vec2::ZERO,
            age: 0.0,
            life,
            color,
            size,
        }
    }

    /// Whether the particle has used up its lifetime.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age >= self.life
    }

    /// Fraction of the lifetime still remaining, clamped to `0.0..=1.0`.
    ///
    /// A particle with no lifetime (`life <= 0`) or a non-finite ratio has
    /// nothing remaining.
    pub fn remaining_fraction(&self) -> f32 {
        if self.life <= 0.0 {
            return 0.0;
        }
        let remaining = 1.0 - self.age / self.life;
        if remaining.is_finite() {
            remaining.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Fade-out alpha: `(1 - age / life) * max_alpha`.
    ///
    /// Linear in the remaining lifetime, so a particle a quarter of the way
    /// through its life draws at three quarters of `max_alpha`.
    #[inline]
    pub fn alpha(&self, max_alpha: f32) -> f32 {
        self.remaining_fraction() * max_alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spark(age: f32, life: f32) -> Particle {
        let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, life, Vec3::splat(255.0), 2.0);
        p.age = age;
        p
    }

    #[test]
    fn test_new_particle_starts_at_rest() {
        let p = Particle::new(
            Vec2::new(1.0, 2.0),
            Vec2::new(3.0, 4.0),
            1.5,
            Vec3::new(255.0, 0.0, 0.0),
            2.5,
        );
        assert_eq!(p.position, Vec2::new(1.0, 2.0));
        assert_eq!(p.velocity, Vec2::new(3.0, 4.0));
        assert_eq!(p.acceleration, Vec2::ZERO);
        assert_eq!(p.age, 0.0);
        assert_eq!(p.life, 1.5);
        assert_eq!(p.size, 2.5);
    }

    #[test]
    fn test_expiry_is_inclusive() {
        assert!(!spark(0.99, 1.0).is_expired());
        assert!(spark(1.0, 1.0).is_expired());
        assert!(spark(1.5, 1.0).is_expired());
    }

    #[test]
    fn test_alpha_quarter_life() {
        let p = spark(0.5, 2.0);
        assert!((p.alpha(255.0) - 0.75 * 255.0).abs() < 1e-4);
    }

    #[test]
    fn test_alpha_fresh_particle_is_opaque() {
        assert_eq!(spark(0.0, 3.0).alpha(200.0), 200.0);
    }

    #[test]
    fn test_alpha_zero_life_is_transparent() {
        let p = spark(0.0, 0.0);
        assert_eq!(p.alpha(255.0), 0.0);
        assert!(p.alpha(255.0).is_finite());
    }

    #[test]
    fn test_alpha_clamped_for_negative_age() {
        // A negative dt can push age below zero; alpha never exceeds the maximum.
        assert_eq!(spark(-1.0, 2.0).alpha(255.0), 255.0);
    }
}
