//! Error types for sparks.
//!
//! The particle system itself cannot fail. Everything here comes from the
//! outer layers: loading a scene file, bringing up the GPU, and running the
//! window event loop.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or checking a [`SceneConfig`](crate::config::SceneConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The scene file could not be read.
    #[error("failed to read scene file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The scene file is not valid JSON for a scene.
    #[error("failed to parse scene config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The scene parsed but holds values the engine cannot run with.
    #[error("invalid scene config: {0}")]
    Invalid(String),
}

/// Errors that can occur during GPU initialization.
#[derive(Debug, Error)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    #[error("failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    #[error("no compatible GPU adapter found; a WebGPU/Vulkan/Metal/DX12 capable device is required")]
    NoAdapter,
    /// The canvas does not fit in a texture on this device.
    #[error("canvas {width}x{height} exceeds the device texture limit of {max}")]
    CanvasTooLarge { width: u32, height: u32, max: u32 },
    /// Failed to create GPU device.
    #[error("failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),
}

/// Errors that can occur when running a [`Scene`](crate::scene::Scene).
#[derive(Debug, Error)]
pub enum SceneError {
    /// Failed to create or run the event loop.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// Failed to create the window.
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    /// GPU initialization failed.
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
    /// The scene config could not be used.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
