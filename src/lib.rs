//! # Sparks
//!
//! A small 2D particle engine with pluggable effectors.
//!
//! Particles are born with a lifetime, fall under a global gravity, get pushed
//! around by effectors, fade out as they age, and are removed when their life
//! runs out. Rendering goes through a tiny [`Surface`] trait, so the same
//! system can draw into a recording [`DrawList`] or a software [`Canvas`].
//!
//! ## Quick Start
//!
//! ```
//! use sparks::prelude::*;
//!
//! let mut system = ParticleSystem::new()
//!     .with_effector(BoundaryEffector::new(0.0, 0.0, 480.0, 320.0));
//!
//! system.emit(Particle::new(
//!     Vec2::new(240.0, 160.0),
//!     Vec2::new(30.0, -50.0),
//!     2.0,
//!     Vec3::new(255.0, 128.0, 0.0),
//!     3.0,
//! ));
//!
//! system.simulate(0.01);
//!
//! let mut frame = DrawList::new();
//! system.render(&mut frame);
//! assert_eq!(frame.len(), 1);
//! ```
//!
//! ## The step
//!
//! Every [`ParticleSystem::simulate`] call runs the same phases in order:
//!
//! 1. **Age** every particle by `dt` and drop the ones whose age reached their
//!    life.
//! 2. **Gravity** is assigned as each survivor's acceleration.
//! 3. **Effectors** run in registration order; each one visits every particle
//!    before the next effector starts.
//! 4. **Integrate**: position moves by the old velocity, then velocity picks up
//!    the acceleration.
//!
//! ## Interactive scene
//!
//! [`Scene`] opens a window where sparks trail the mouse cursor. Frames are
//! rasterized on the CPU into a persistent [`Canvas`] and handed to wgpu
//! only for presentation. The scene is configured through [`SceneConfig`], which can be loaded from JSON:
//!
//! ```no_run
//! use sparks::prelude::*;
//!
//! let scene = Scene::from_file("scenes/default.json")?;
//! scene.run()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod canvas;
pub mod config;
pub mod effector;
pub mod emission;
pub mod error;
pub mod gpu;
pub mod input;
pub mod particle;
pub mod sampling;
pub mod scene;
pub mod surface;
pub mod system;
pub mod time;

pub use canvas::Canvas;
pub use config::SceneConfig;
pub use effector::{BoundaryEffector, Effector, SpeedLimit};
pub use emission::{TickContext, TrailEmitter};
pub use error::{ConfigError, GpuError, SceneError};
pub use glam::{Vec2, Vec3};
pub use particle::Particle;
pub use sampling::Sampler;
pub use scene::{Scene, SceneState};
pub use surface::{DrawCommand, DrawList, Surface};
pub use system::ParticleSystem;

/// Convenient re-exports for common usage.
///
/// ```
/// use sparks::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::config::SceneConfig;
    pub use crate::effector::{BoundaryEffector, Effector, SpeedLimit};
    pub use crate::emission::{TickContext, TrailEmitter};
    pub use crate::particle::Particle;
    pub use crate::sampling::Sampler;
    pub use crate::scene::Scene;
    pub use crate::surface::{DrawList, Surface};
    pub use crate::system::ParticleSystem;
    pub use crate::{Vec2, Vec3};
}
