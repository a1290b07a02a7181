//! Pluggable per-step forces and constraints.
//!
//! An [`Effector`] is applied to every live particle once per simulation step,
//! after gravity has been assigned and before positions are integrated.
//! Effectors act on velocity only; position, age, life, color and acceleration
//! belong to the system.
//!
//! # Built-in effectors
//!
//! | Effector | Description |
//! |----------|-------------|
//! | [`BoundaryEffector`] | Reflects velocity at axis-aligned walls |
//! | [`SpeedLimit`] | Clamps speed into a range |
//! | any `Fn(&mut Particle)` | Ad-hoc velocity tweaks |
//!
//! # Example
//!
//! ```
//! use sparks::prelude::*;
//!
//! let mut system = ParticleSystem::new()
//!     .with_effector(BoundaryEffector::new(0.0, 0.0, 480.0, 320.0))
//!     .with_effector(SpeedLimit { min: 0.0, max: 400.0 });
//!
//! // A sideways gust, as a closure
//! system.add_effector(|p: &mut Particle| p.velocity.x += 0.5);
//! assert_eq!(system.effector_count(), 3);
//! ```

use crate::particle::Particle;

/// A force or constraint applied to each particle every step.
///
/// Implementations may read any field but must only write `velocity`, and
/// must not keep the particle reference past the call. They are applied in
/// registration order, each one to every particle before the next runs.
pub trait Effector {
    /// Apply this effector to one particle.
    fn apply(&self, particle: &mut Particle);
}

impl<F> Effector for F
where
    F: Fn(&mut Particle),
{
    #[inline]
    fn apply(&self, particle: &mut Particle) {
        self(particle)
    }
}

/// Reflect particles off the walls of an axis-aligned rectangle.
///
/// For each axis independently, when the particle's extent (`position ± size`)
/// pokes past either wall, that velocity component is negated. Both axes are
/// checked every call, so a corner hit flips both components.
///
/// Only the velocity is touched. A fast particle can end up past a wall for a
/// frame; the flipped velocity carries it back on the next step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryEffector {
    /// Left wall.
    pub x1: f32,
    /// Top wall.
    pub y1: f32,
    /// Right wall.
    pub x2: f32,
    /// Bottom wall.
    pub y2: f32,
}

impl BoundaryEffector {
    /// Walls from `(x1, y1)` to `(x2, y2)`.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl Effector for BoundaryEffector {
    fn apply(&self, particle: &mut Particle) {
        let Particle {
            position, size, ..
        } = *particle;

        if position.x - size < self.x1 || position.x + size > self.x2 {
            particle.velocity.x = -particle.velocity.x;
        }
        if position.y - size < self.y1 || position.y + size > self.y2 {
            particle.velocity.y = -particle.velocity.y;
        }
    }
}

/// Keep particle speed within `min..=max`.
///
/// Direction is preserved. Particles at rest are left alone since they have
/// no direction to scale along.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedLimit {
    /// Minimum speed.
    pub min: f32,
    /// Maximum speed.
    pub max: f32,
}

impl Effector for SpeedLimit {
    fn apply(&self, particle: &mut Particle) {
        let speed = particle.velocity.length();
        if speed <= 0.0 || !speed.is_finite() {
            return;
        }
        let target = if speed > self.max {
            self.max
        } else if speed < self.min {
            self.min
        } else {
            return;
        };
        particle.velocity *= target / speed;
    }
}
