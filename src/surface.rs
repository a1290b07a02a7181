//! Drawing targets for [`ParticleSystem::render`](crate::ParticleSystem::render).
//!
//! The simulation never talks to a graphics API directly. It draws through the
//! [`Surface`] trait, which only needs filled circles and filled rectangles.
//! [`DrawList`] records commands in call order, which is what tests inspect;
//! [`Canvas`](crate::canvas::Canvas) rasterizes them into pixels.

use glam::{Vec2, Vec3};

/// Something particles can be drawn onto.
///
/// Coordinates are in canvas pixels with the origin in the top-left corner.
/// Colors are RGB channel values and alpha is on the same 0-255 scale.
pub trait Surface {
    /// Draw a filled circle.
    fn draw_filled_circle(&mut self, center: Vec2, radius: f32, color: Vec3, alpha: f32);

    /// Fill an axis-aligned rectangle starting at `origin`.
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Vec3, alpha: f32);
}

/// A single recorded draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// A filled circle.
    Circle {
        center: Vec2,
        radius: f32,
        color: Vec3,
        alpha: f32,
    },
    /// A filled rectangle.
    Rect {
        origin: Vec2,
        size: Vec2,
        color: Vec3,
        alpha: f32,
    },
}

/// A [`Surface`] that records draw calls instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all recorded commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded commands, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for DrawList {
    fn draw_filled_circle(&mut self, center: Vec2, radius: f32, color: Vec3, alpha: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Vec3, alpha: f32) {
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            color,
            alpha,
        });
    }
}
