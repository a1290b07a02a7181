//! Interactive scene: a window, a trail emitter following the cursor, and a
//! particle system stepped at a fixed rate.
//!
//! [`Scene`] is the builder. [`SceneState`] holds everything that does not
//! need a window (simulation, emitter, step accumulator, canvas), so the
//! frame logic can be driven headless.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | Escape | Quit |
//! | Space | Pause / resume |
//! | C | Clear all particles |
//!
//! # Example
//!
//! ```no_run
//! use sparks::prelude::*;
//!
//! Scene::new(SceneConfig::default())
//!     .with_effector(SpeedLimit { min: 0.0, max: 300.0 })
//!     .run()
//!     .unwrap();
//! ```

use std::path::Path;
use std::sync::Arc;

use glam::{Vec2, Vec3};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::canvas::Canvas;
use crate::config::SceneConfig;
use crate::effector::Effector;
use crate::emission::{TickContext, TrailEmitter};
use crate::error::{ConfigError, SceneError};
use crate::gpu::GpuState;
use crate::input::{Input, KeyCode};
use crate::sampling::Sampler;
use crate::surface::Surface;
use crate::system::ParticleSystem;
use crate::time::Time;

/// A runnable particle scene.
pub struct Scene {
    config: SceneConfig,
    system: ParticleSystem,
}

impl Scene {
    /// Scene from a config. Walls, gravity and fade come from the config.
    pub fn new(config: SceneConfig) -> Self {
        let system = config.build_system();
        Self { config, system }
    }

    /// Scene from a JSON scene file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self::new(SceneConfig::load(path)?))
    }

    /// Register an extra effector, applied after the built-in walls.
    pub fn with_effector<E: Effector + 'static>(mut self, effector: E) -> Self {
        self.system.add_effector(effector);
        self
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Open the window and run until it is closed.
    ///
    /// Window or GPU setup failures stop the event loop and are returned here.
    pub fn run(self) -> Result<(), SceneError> {
        self.config.validate()?;
        log::info!(
            "Starting scene '{}' ({}x{}, dt {})",
            self.config.title,
            self.config.width,
            self.config.height,
            self.config.dt
        );

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(SceneState::new(self.config, self.system));
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Window-independent scene state.
pub struct SceneState {
    config: SceneConfig,
    system: ParticleSystem,
    emitter: TrailEmitter,
    sampler: Sampler,
    previous_mouse: Vec2,
    accumulator: f32,
    canvas: Canvas,
}

impl SceneState {
    pub fn new(config: SceneConfig, system: ParticleSystem) -> Self {
        let emitter = config.emitter.clone();
        let canvas = Canvas::new(config.width, config.height);
        Self {
            config,
            system,
            emitter,
            sampler: Sampler::new(),
            previous_mouse: Vec2::ZERO,
            accumulator: 0.0,
            canvas,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }

    pub fn system_mut(&mut self) -> &mut ParticleSystem {
        &mut self.system
    }

    /// The canvas as of the last [`paint`](Self::paint).
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Remove every live particle. Trails already on the canvas keep fading.
    pub fn clear(&mut self) {
        self.system.clear();
    }

    /// One fixed step: emit a spark at `mouse`, then simulate.
    pub fn tick(&mut self, mouse: Vec2) {
        let dt = self.config.dt;
        let tick = TickContext {
            mouse_position: mouse,
            previous_mouse_position: self.previous_mouse,
            dt,
        };
        let particle = self.emitter.particle(&tick, &mut self.sampler);
        self.system.emit(particle);
        self.previous_mouse = mouse;
        self.system.simulate(dt);
    }

    /// Feed `delta` seconds of scaled time and run the fixed steps it covers.
    ///
    /// At most `max_steps_per_frame` steps run; any backlog beyond that is
    /// dropped. Returns the number of steps run.
    pub fn advance(&mut self, delta: f32, mouse: Vec2) -> u32 {
        let dt = self.config.dt;
        self.accumulator += delta.max(0.0);

        let mut steps = 0;
        while self.accumulator >= dt && steps < self.config.max_steps_per_frame {
            self.tick(mouse);
            self.accumulator -= dt;
            steps += 1;
        }

        if self.accumulator >= dt {
            log::debug!(
                "Dropping {:.3}s of simulation backlog after {} steps",
                self.accumulator,
                steps
            );
            self.accumulator = 0.0;
        }
        steps
    }

    /// Paint this frame onto the persistent canvas: darken it with the
    /// translucent overlay, then draw the live particles on top.
    pub fn paint(&mut self) -> &Canvas {
        self.canvas.fill_rect(
            Vec2::ZERO,
            self.config.canvas_size(),
            Vec3::ZERO,
            self.config.trail_alpha,
        );
        self.system.render(&mut self.canvas);
        &self.canvas
    }
}

struct App {
    state: SceneState,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    time: Time,
    input: Input,
    error: Option<SceneError>,
}

impl App {
    fn new(state: SceneState) -> Self {
        let mut time = Time::new();
        time.set_time_scale(state.config().time_scale);
        Self {
            state,
            window: None,
            gpu_state: None,
            time,
            input: Input::new(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: SceneError) {
        self.error = Some(err);
        event_loop.exit();
    }

    fn sync_window_size(&mut self, width: u32, height: u32) {
        self.input.set_window_size(
            Vec2::new(width as f32, height as f32),
            self.state.config().canvas_size(),
        );
    }

    fn handle_keys(&mut self, event_loop: &ActiveEventLoop) {
        if self.input.key_pressed(KeyCode::Escape) {
            event_loop.exit();
        }
        if self.input.key_pressed(KeyCode::Space) {
            self.time.toggle_pause();
            log::info!(
                "Simulation {}",
                if self.time.is_paused() { "paused" } else { "resumed" }
            );
        }
        if self.input.key_pressed(KeyCode::C) {
            log::info!("Clearing {} particles", self.state.system().len());
            self.state.clear();
        }
        self.input.begin_frame();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.handle_keys(event_loop);

        let delta = self.time.update();
        self.state.advance(delta, self.input.mouse_position());
        if let Some(fps) = self.time.take_fps() {
            log::debug!("{:.1} fps, {} particles", fps, self.state.system().len());
        }

        let Some(gpu_state) = &mut self.gpu_state else {
            return;
        };
        match gpu_state.render(self.state.paint()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                gpu_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::error!("Render error: {:?}", e),
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let config = self.state.config();
        let (width, height) = (config.width, config.height);
        let window_attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };
        self.window = Some(window.clone());

        let size = window.inner_size();
        self.sync_window_size(size.width, size.height);

        match pollster::block_on(GpuState::new(window.clone(), width, height)) {
            Ok(gpu_state) => self.gpu_state = Some(gpu_state),
            Err(e) => return self.fail(event_loop, e.into()),
        }

        // Setup time is not simulation time.
        self.time.update();
        window.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size.width, physical_size.height);
                }
                self.sync_window_size(physical_size.width, physical_size.height);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}
