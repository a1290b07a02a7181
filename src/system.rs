//! The particle system: ownership, the per-step pipeline, and rendering.
//!
//! # Pipeline
//!
//! Every call to [`ParticleSystem::simulate`] runs four phases in a fixed
//! order:
//!
//! ```text
//! 1. Aging        age += dt, then drop every particle with age >= life
//! 2. Gravity      acceleration = gravity (overwritten, never accumulated)
//! 3. Effectors    for each effector, for each particle: apply
//! 4. Integration  position += velocity * dt, then velocity += acceleration * dt
//! ```
//!
//! Expired particles are gone before gravity and effectors run. Position is
//! integrated with the velocity from the previous step, before that velocity
//! is updated.

use std::fmt;

use glam::Vec2;

use crate::effector::Effector;
use crate::particle::Particle;
use crate::surface::Surface;

/// Gravity used by [`ParticleSystem::new`]: 100 px/s² pointing down the screen.
pub const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, 100.0);

/// Alpha given to a particle at the moment it is emitted.
pub const DEFAULT_MAX_ALPHA: f32 = 255.0;

/// Owns a set of particles and the effectors acting on them.
///
/// # Example
///
/// ```
/// use sparks::prelude::*;
///
/// let mut system = ParticleSystem::new()
///     .with_gravity(Vec2::new(0.0, 100.0))
///     .with_effector(BoundaryEffector::new(0.0, 0.0, 480.0, 320.0));
///
/// system.emit(Particle::new(
///     Vec2::new(240.0, 160.0),
///     Vec2::new(20.0, 0.0),
///     2.0,
///     Vec3::new(255.0, 0.0, 0.0),
///     3.0,
/// ));
///
/// system.simulate(0.01);
///
/// let mut frame = DrawList::new();
/// system.render(&mut frame);
/// assert_eq!(frame.len(), 1);
/// ```
pub struct ParticleSystem {
    particles: Vec<Particle>,
    effectors: Vec<Box<dyn Effector>>,
    gravity: Vec2,
    max_alpha: f32,
}

impl ParticleSystem {
    /// Create an empty system with default gravity and no effectors.
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            effectors: Vec::new(),
            gravity: DEFAULT_GRAVITY,
            max_alpha: DEFAULT_MAX_ALPHA,
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the alpha a brand new particle is drawn with.
    pub fn with_max_alpha(mut self, max_alpha: f32) -> Self {
        self.max_alpha = max_alpha;
        self
    }

    /// Add an effector. Effectors run in the order they were added.
    pub fn with_effector<E: Effector + 'static>(mut self, effector: E) -> Self {
        self.add_effector(effector);
        self
    }

    /// Append an effector after the ones already registered.
    pub fn add_effector<E: Effector + 'static>(&mut self, effector: E) {
        self.effectors.push(Box::new(effector));
    }

    /// Remove every registered effector.
    pub fn clear_effectors(&mut self) {
        self.effectors.clear();
    }

    pub fn effector_count(&self) -> usize {
        self.effectors.len()
    }

    #[inline]
    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Change gravity. Takes effect on the next [`simulate`](Self::simulate).
    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    #[inline]
    pub fn max_alpha(&self) -> f32 {
        self.max_alpha
    }

    pub fn set_max_alpha(&mut self, max_alpha: f32) {
        self.max_alpha = max_alpha;
    }

    /// Live particles, in emission order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Drop every particle. Effectors and gravity are kept.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Add a particle to the system. No validation is done.
    pub fn emit(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Advance every particle by `dt` seconds.
    ///
    /// `dt` is used as given: zero freezes motion and aging, a negative value
    /// runs both backwards.
    pub fn simulate(&mut self, dt: f32) {
        self.age(dt);
        self.apply_gravity();
        self.apply_effectors();
        self.integrate(dt);
    }

    /// Draw every particle as a filled circle, fading out over its lifetime.
    ///
    /// Does not change any simulation state.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        for p in &self.particles {
            surface.draw_filled_circle(p.position, p.size, p.color, p.alpha(self.max_alpha));
        }
    }

    fn age(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.age += dt;
        }

        let before = self.particles.len();
        self.particles.retain(|p| !p.is_expired());

        let expired = before - self.particles.len();
        if expired > 0 {
            log::trace!("{} particles expired, {} alive", expired, self.particles.len());
        }
    }

    fn apply_gravity(&mut self) {
        let gravity = self.gravity;
        for p in &mut self.particles {
            p.acceleration = gravity;
        }
    }

    fn apply_effectors(&mut self) {
        for effector in &self.effectors {
            for p in &mut self.particles {
                effector.apply(p);
            }
        }
    }

    fn integrate(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.position += p.velocity * dt;
            p.velocity += p.acceleration * dt;
        }
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ParticleSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParticleSystem")
            .field("particles", &self.particles.len())
            .field("effectors", &self.effectors.len())
            .field("gravity", &self.gravity)
            .field("max_alpha", &self.max_alpha)
            .finish()
    }
}
