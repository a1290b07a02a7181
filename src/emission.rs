//! Turning input into new particles.
//!
//! The core system never decides *when* or *where* particles appear. Each
//! tick the driver packs what it knows into a [`TickContext`] and asks an
//! emitter for a particle. [`TrailEmitter`] is the mouse-trail policy: sparks
//! are thrown from the cursor, inheriting its motion plus a random kick.

use std::f32::consts::TAU;
use std::ops::Range;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::particle::Particle;
use crate::sampling::Sampler;

/// Everything an emitter can know about the current tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickContext {
    /// Cursor position this tick, in canvas pixels.
    pub mouse_position: Vec2,
    /// Cursor position on the previous tick.
    pub previous_mouse_position: Vec2,
    /// Simulation step for this tick, in seconds.
    pub dt: f32,
}

impl TickContext {
    /// Cursor movement since the previous tick.
    #[inline]
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_position - self.previous_mouse_position
    }
}

/// Emits one spark per tick at the cursor.
///
/// Velocity is the cursor movement scaled by `velocity_scale`, plus a random
/// direction (drawn from `angle_range`) times `jitter_speed`. Color, life and
/// size are each drawn from their ranges.
///
/// Serialized as part of a scene file; missing fields take the defaults.
///
/// # Example
///
/// ```
/// use sparks::emission::{TickContext, TrailEmitter};
/// use sparks::sampling::Sampler;
/// use sparks::Vec2;
///
/// let emitter = TrailEmitter::default();
/// let tick = TickContext {
///     mouse_position: Vec2::new(100.0, 80.0),
///     previous_mouse_position: Vec2::new(98.0, 80.0),
///     dt: 0.01,
/// };
/// let spark = emitter.particle(&tick, &mut Sampler::seeded(1));
/// assert_eq!(spark.position, Vec2::new(100.0, 80.0));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrailEmitter {
    /// Multiplier applied to cursor movement per tick.
    pub velocity_scale: f32,
    /// Speed of the random kick.
    pub jitter_speed: f32,
    /// Angle bounds (radians) for the random kick.
    pub angle_range: [f32; 2],
    /// First color bound (RGB, 0-255).
    pub color_start: Vec3,
    /// Second color bound (RGB, 0-255).
    pub color_end: Vec3,
    /// Lifetime bounds in seconds.
    pub life_range: [f32; 2],
    /// Radius bounds.
    pub size_range: [f32; 2],
}

impl Default for TrailEmitter {
    fn default() -> Self {
        Self {
            velocity_scale: 10.0,
            jitter_speed: 20.0,
            angle_range: [0.0, TAU],
            color_start: Vec3::new(255.0, 0.0, 0.0),
            color_end: Vec3::new(255.0, 255.0, 0.0),
            life_range: [1.0, 3.0],
            size_range: [2.0, 4.0],
        }
    }
}

impl TrailEmitter {
    /// Set the lifetime bounds.
    pub fn with_life(mut self, range: Range<f32>) -> Self {
        self.life_range = [range.start, range.end];
        self
    }

    /// Set the radius bounds.
    pub fn with_size(mut self, range: Range<f32>) -> Self {
        self.size_range = [range.start, range.end];
        self
    }

    /// Set the two colors new sparks are blended between.
    pub fn with_colors(mut self, start: Vec3, end: Vec3) -> Self {
        self.color_start = start;
        self.color_end = end;
        self
    }

    /// Set the random kick speed.
    pub fn with_jitter(mut self, speed: f32) -> Self {
        self.jitter_speed = speed;
        self
    }

    /// Build the particle for this tick.
    pub fn particle(&self, tick: &TickContext, sampler: &mut Sampler) -> Particle {
        let [a1, a2] = self.angle_range;
        let velocity =
            tick.mouse_delta() * self.velocity_scale + sampler.direction(a1, a2) * self.jitter_speed;
        let color = sampler.color(self.color_start, self.color_end);
        let life = sampler.number(self.life_range[0], self.life_range[1]);
        let size = sampler.number(self.size_range[0], self.size_range[1]);

        Particle::new(tick.mouse_position, velocity, life, color, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn within(value: f32, [lo, hi]: [f32; 2]) -> bool {
        value >= lo.min(hi) - 1e-4 && value <= lo.max(hi) + 1e-4
    }

    #[test]
    fn test_defaults() {
        let emitter = TrailEmitter::default();
        assert_eq!(emitter.velocity_scale, 10.0);
        assert_eq!(emitter.jitter_speed, 20.0);
        assert_eq!(emitter.life_range, [1.0, 3.0]);
        assert_eq!(emitter.size_range, [2.0, 4.0]);
    }

    #[test]
    fn test_velocity_follows_mouse_without_jitter() {
        let emitter = TrailEmitter::default().with_jitter(0.0);
        let tick = TickContext {
            mouse_position: Vec2::new(50.0, 40.0),
            previous_mouse_position: Vec2::new(47.0, 42.0),
            dt: 0.01,
        };

        let p = emitter.particle(&tick, &mut Sampler::seeded(3));

        assert_eq!(p.position, Vec2::new(50.0, 40.0));
        assert_eq!(p.velocity, Vec2::new(30.0, -20.0));
        assert_eq!(p.age, 0.0);
        assert_eq!(p.acceleration, Vec2::ZERO);
    }

    #[test]
    fn test_still_mouse_gives_jitter_speed() {
        let emitter = TrailEmitter::default();
        let tick = TickContext {
            mouse_position: Vec2::new(10.0, 10.0),
            previous_mouse_position: Vec2::new(10.0, 10.0),
            dt: 0.01,
        };

        let mut sampler = Sampler::seeded(11);
        for _ in 0..50 {
            let p = emitter.particle(&tick, &mut sampler);
            assert!((p.velocity.length() - 20.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_sampled_attributes_in_range() {
        let emitter = TrailEmitter::default();
        let tick = TickContext::default();
        let mut sampler = Sampler::seeded(12);

        for _ in 0..200 {
            let p = emitter.particle(&tick, &mut sampler);
            assert!(within(p.life, emitter.life_range));
            assert!(within(p.size, emitter.size_range));
            assert!((p.color.x - 255.0).abs() < 1e-3);
            assert!(within(p.color.y, [0.0, 255.0]));
            assert_eq!(p.color.z, 0.0);
        }
    }

    #[test]
    fn test_builder_ranges() {
        let emitter = TrailEmitter::default()
            .with_life(0.5..0.75)
            .with_size(1.0..1.5)
            .with_colors(Vec3::ZERO, Vec3::splat(10.0));

        assert_eq!(emitter.life_range, [0.5, 0.75]);
        assert_eq!(emitter.size_range, [1.0, 1.5]);
        assert_eq!(emitter.color_end, Vec3::splat(10.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let emitter: TrailEmitter = serde_json::from_str(r#"{ "jitter_speed": 5.0 }"#).unwrap();
        assert_eq!(emitter.jitter_speed, 5.0);
        assert_eq!(emitter.velocity_scale, 10.0);
        assert_eq!(emitter.color_start, Vec3::new(255.0, 0.0, 0.0));
    }
}
