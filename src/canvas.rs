//! Software-rasterized RGBA canvas.
//!
//! [`Canvas`] is the persistent frame the interactive scene draws into. It is
//! a [`Surface`]: filled circles and rectangles are alpha-blended straight
//! into an RGBA8 pixel buffer (`dst = src * a + dst * (1 - a)`), and nothing
//! is ever cleared implicitly, so a translucent black rectangle painted each
//! frame leaves fading trails behind moving particles.
//!
//! Coverage is decided per pixel center: a pixel belongs to a circle when its
//! center lies within `radius` of the circle's center.
//!
//! ```
//! use sparks::canvas::Canvas;
//! use sparks::{Surface, Vec2, Vec3};
//!
//! let mut canvas = Canvas::new(8, 8);
//! canvas.draw_filled_circle(Vec2::new(4.0, 4.0), 2.0, Vec3::new(255.0, 0.0, 0.0), 255.0);
//! assert_eq!(canvas.pixel(4, 4), Some([255, 0, 0, 255]));
//! assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 255]));
//! ```

use glam::{Vec2, Vec3};

use crate::surface::Surface;

/// Largest width or height a canvas can have, in pixels.
pub const MAX_DIMENSION: u32 = 8192;

/// An opaque RGBA8 pixel buffer, row-major, origin top-left.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// An opaque black canvas. Each side is clamped to [`MAX_DIMENSION`].
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.min(MAX_DIMENSION);
        let height = height.min(MAX_DIMENSION);
        let len = byte_len(width, height).unwrap_or(0);
        let mut canvas = Self {
            width,
            height,
            pixels: vec![0; len],
        };
        canvas.clear(Vec3::ZERO);
        canvas
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, `width * 4` per row.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes per row of [`pixels`](Self::pixels).
    pub fn stride(&self) -> u32 {
        self.width * 4
    }

    /// The pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        let mut out = [0; 4];
        out.copy_from_slice(&self.pixels[i..i + 4]);
        Some(out)
    }

    /// Overwrite every pixel with an opaque color (0-255 channels).
    pub fn clear(&mut self, color: Vec3) {
        let [r, g, b] = to_bytes(color);
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[r, g, b, 255]);
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Pixel rows/columns whose centers fall in `[min, max)`, clipped.
    fn span(&self, min: f32, max: f32, limit: u32) -> (u32, u32) {
        let start = (min - 0.5).ceil().max(0.0);
        let end = (max - 0.5).ceil().min(limit as f32);
        if start >= end {
            return (0, 0);
        }
        (start as u32, end as u32)
    }

    fn blend(&mut self, x: u32, y: u32, color: [f32; 3], alpha: f32) {
        let i = self.index(x, y);
        for (c, src) in color.iter().enumerate() {
            let dst = self.pixels[i + c] as f32;
            self.pixels[i + c] = (src * alpha + dst * (1.0 - alpha)).round() as u8;
        }
    }
}

fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(4)
}

fn to_bytes(color: Vec3) -> [u8; 3] {
    let c = color.clamp(Vec3::ZERO, Vec3::splat(255.0)).round();
    [c.x as u8, c.y as u8, c.z as u8]
}

/// Normalized blend factor, or `None` when nothing would change.
fn blend_alpha(alpha: f32) -> Option<f32> {
    let a = (alpha / 255.0).clamp(0.0, 1.0);
    (a > 0.0).then_some(a)
}

impl Surface for Canvas {
    fn draw_filled_circle(&mut self, center: Vec2, radius: f32, color: Vec3, alpha: f32) {
        let Some(a) = blend_alpha(alpha) else {
            return;
        };
        if !(radius > 0.0) || !center.is_finite() {
            return;
        }
        let rgb = color.clamp(Vec3::ZERO, Vec3::splat(255.0)).to_array();
        let r2 = radius * radius;

        let (x0, x1) = self.span(center.x - radius, center.x + radius + f32::EPSILON, self.width);
        let (y0, y1) = self.span(center.y - radius, center.y + radius + f32::EPSILON, self.height);
        for y in y0..y1 {
            let dy = y as f32 + 0.5 - center.y;
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - center.x;
                if dx * dx + dy * dy <= r2 {
                    self.blend(x, y, rgb, a);
                }
            }
        }
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Vec3, alpha: f32) {
        let Some(a) = blend_alpha(alpha) else {
            return;
        };
        let min = origin.min(origin + size);
        let max = origin.max(origin + size);
        if !min.is_finite() || !max.is_finite() {
            return;
        }
        let rgb = color.clamp(Vec3::ZERO, Vec3::splat(255.0)).to_array();

        let (x0, x1) = self.span(min.x, max.x, self.width);
        let (y0, y1) = self.span(min.y, max.y, self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, rgb, a);
            }
        }
    }
}
