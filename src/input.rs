//! Keyboard and cursor state for the interactive scene.
//!
//! [`Input`] tracks instantaneous events (key just pressed) and continuous
//! state (key held down), and keeps the cursor position in canvas pixels.
//! The window can be resized freely; the canvas keeps its configured size, so
//! cursor positions reported in physical window pixels are scaled into
//! canvas space before the emitter sees them.

use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

/// Keys the scene reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Space,
    C,
    Other(u32),
}

impl From<WinitKeyCode> for KeyCode {
    fn from(key: WinitKeyCode) -> Self {
        match key {
            WinitKeyCode::Escape => KeyCode::Escape,
            WinitKeyCode::Space => KeyCode::Space,
            WinitKeyCode::KeyC => KeyCode::C,
            _ => KeyCode::Other(key as u32),
        }
    }
}

/// Per-frame input state.
#[derive(Debug)]
pub struct Input {
    keys_held: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,

    /// Cursor in canvas pixels.
    mouse_position: Vec2,
    /// Canvas pixels per physical window pixel, per axis.
    scale: Vec2,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            keys_held: HashSet::new(),
            keys_pressed: HashSet::new(),
            keys_released: HashSet::new(),
            mouse_position: Vec2::ZERO,
            scale: Vec2::ONE,
        }
    }
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` went down since the last [`begin_frame`](Self::begin_frame).
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    pub fn key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    /// Cursor position in canvas pixels.
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Clear the per-frame event sets. Held keys and the cursor persist.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    /// Update the window-to-canvas mapping after a resize.
    ///
    /// Degenerate window sizes (minimized windows report zero) keep the
    /// previous mapping.
    pub fn set_window_size(&mut self, window: Vec2, canvas: Vec2) {
        if window.x > 0.0 && window.y > 0.0 {
            self.scale = canvas / window;
        }
    }

    pub fn press(&mut self, key: KeyCode) {
        // Key repeat does not count as a new press
        if self.keys_held.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
        self.keys_released.insert(key);
    }

    /// Record a cursor position given in physical window pixels.
    pub fn cursor_moved(&mut self, physical: Vec2) {
        self.mouse_position = physical * self.scale;
    }

    /// Feed a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    let key = KeyCode::from(code);
                    match event.state {
                        ElementState::Pressed => self.press(key),
                        ElementState::Released => self.release(key),
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            _ => {}
        }
    }
}
