//! Scene configuration.
//!
//! A [`SceneConfig`] describes everything the interactive scene needs: the
//! canvas, the simulation step, the global gravity, the fade settings and the
//! trail emitter. Every field has a default, so a scene file only has to list
//! what it changes:
//!
//! ```json
//! {
//!     "title": "Slow sparks",
//!     "time_scale": 0.25,
//!     "emitter": { "jitter_speed": 60.0 }
//! }
//! ```

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::canvas::MAX_DIMENSION;
use crate::effector::BoundaryEffector;
use crate::emission::TrailEmitter;
use crate::error::ConfigError;
use crate::system::{ParticleSystem, DEFAULT_GRAVITY, DEFAULT_MAX_ALPHA};

/// Settings for an interactive scene.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Window title.
    pub title: String,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Fixed simulation step in seconds.
    pub dt: f32,
    /// Multiplier on wall-clock time.
    pub time_scale: f32,
    /// Acceleration assigned to every particle each step.
    pub gravity: Vec2,
    /// Alpha of a freshly emitted particle (0-255).
    pub max_alpha: f32,
    /// Alpha of the black rectangle painted over the canvas each frame.
    /// Lower values leave longer trails.
    pub trail_alpha: f32,
    /// Bounce particles off the canvas edges.
    pub walls: bool,
    /// Trail emitter settings.
    pub emitter: TrailEmitter,
    /// Most simulation steps run for a single rendered frame.
    pub max_steps_per_frame: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            title: "Sparks".to_string(),
            width: 480,
            height: 320,
            dt: 0.01,
            time_scale: 1.0,
            gravity: DEFAULT_GRAVITY,
            max_alpha: DEFAULT_MAX_ALPHA,
            trail_alpha: 25.0,
            walls: true,
            emitter: TrailEmitter::default(),
            max_steps_per_frame: 8,
        }
    }
}

impl SceneConfig {
    /// Parse and validate a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON scene file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Pretty-printed JSON for this config.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the values can drive a scene.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(ConfigError::Invalid(format!(
                "canvas must be at most {MAX_DIMENSION}x{MAX_DIMENSION}, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "dt must be a positive number, got {}",
                self.dt
            )));
        }
        if !self.time_scale.is_finite() || self.time_scale < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "time_scale must be zero or positive, got {}",
                self.time_scale
            )));
        }
        check_alpha("max_alpha", self.max_alpha)?;
        check_alpha("trail_alpha", self.trail_alpha)?;
        if self.max_steps_per_frame == 0 {
            return Err(ConfigError::Invalid(
                "max_steps_per_frame must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// A particle system with this config's gravity, fade and walls.
    pub fn build_system(&self) -> ParticleSystem {
        let mut system = ParticleSystem::new()
            .with_gravity(self.gravity)
            .with_max_alpha(self.max_alpha);
        if self.walls {
            system.add_effector(BoundaryEffector::new(
                0.0,
                0.0,
                self.width as f32,
                self.height as f32,
            ));
        }
        system
    }

    /// Canvas size in pixels.
    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

fn check_alpha(name: &str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=255.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{name} must be within 0..=255, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;
    use glam::Vec3;

    #[test]
    fn test_defaults_are_valid() {
        let config = SceneConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width, 480);
        assert_eq!(config.height, 320);
        assert_eq!(config.dt, 0.01);
        assert_eq!(config.gravity, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = SceneConfig::from_json("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = SceneConfig::from_json(
            r#"{ "width": 800, "gravity": [0.0, 0.0], "emitter": { "velocity_scale": 2.0 } }"#,
        )
        .unwrap();

        assert_eq!(config.width, 800);
        assert_eq!(config.height, 320);
        assert_eq!(config.gravity, Vec2::ZERO);
        assert_eq!(config.emitter.velocity_scale, 2.0);
        assert_eq!(config.emitter.jitter_speed, 20.0);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = SceneConfig::from_json("{ width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_values() {
        let cases: [fn(&mut SceneConfig); 10] = [
            |c| c.width = 0,
            |c| c.height = 0,
            |c| c.width = MAX_DIMENSION + 1,
            |c| c.height = u32::MAX,
            |c| c.dt = 0.0,
            |c| c.dt = f32::NAN,
            |c| c.time_scale = -1.0,
            |c| c.max_alpha = 300.0,
            |c| c.trail_alpha = -5.0,
            |c| c.max_steps_per_frame = 0,
        ];

        for tweak in cases {
            let mut config = SceneConfig::default();
            tweak(&mut config);
            assert!(
                matches!(config.validate(), Err(ConfigError::Invalid(_))),
                "accepted {:?}",
                config
            );
        }
    }

    #[test]
    fn test_from_json_validates() {
        let err = SceneConfig::from_json(r#"{ "dt": -0.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_huge_canvas_is_rejected() {
        let err = SceneConfig::from_json(r#"{ "width": 4294967295, "height": 4294967295 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let largest = SceneConfig::from_json(r#"{ "width": 8192, "height": 8192 }"#).unwrap();
        assert_eq!(largest.width, MAX_DIMENSION);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SceneConfig::load("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = SceneConfig::default();
        config.title = "trip".into();
        config.emitter = TrailEmitter::default().with_jitter(5.0);
        config.walls = false;

        let text = config.to_json().unwrap();
        assert_eq!(SceneConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn test_build_system_with_walls() {
        let config = SceneConfig::default();
        let mut system = config.build_system();
        assert_eq!(system.effector_count(), 1);
        assert_eq!(system.gravity(), config.gravity);

        // Right edge of the 480-wide canvas bounces.
        system.emit(Particle::new(
            Vec2::new(479.0, 100.0),
            Vec2::new(5.0, 0.0),
            10.0,
            Vec3::ONE,
            2.0,
        ));
        system.simulate(0.01);
        assert_eq!(system.particles()[0].velocity.x, -5.0);
    }

    #[test]
    fn test_build_system_without_walls() {
        let config = SceneConfig {
            walls: false,
            max_alpha: 128.0,
            ..Default::default()
        };
        let system = config.build_system();
        assert_eq!(system.effector_count(), 0);
        assert_eq!(system.max_alpha(), 128.0);
    }
}
