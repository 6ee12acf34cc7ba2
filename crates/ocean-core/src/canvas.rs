//! Off-screen RGBA8 surface the compositor draws into. Front ends upload
//! `as_bytes()` as-is (Canvas2D `ImageData` on the web, a texture natively).

use crate::error::{OceanError, Result};
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

#[inline]
fn to_rgba(color: Vec3) -> [u8; 4] {
    let c = color.floor().clamp(Vec3::ZERO, Vec3::splat(255.0));
    [c.x as u8, c.y as u8, c.z as u8, 255]
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(OceanError::SurfaceUnavailable { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 255]; width as usize * height as usize],
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(OceanError::SurfaceUnavailable { width, height });
        }
        if (width, height) != (self.width, self.height) {
            self.width = width;
            self.height = height;
            self.pixels = vec![[0, 0, 0, 255]; width as usize * height as usize];
        }
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fill(&mut self, color: Vec3) {
        let px = to_rgba(color);
        self.pixels.fill(px);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Pixel-clipped span `[start, end)` along one axis, rounding to nearest.
    fn span(start: f32, len: f32, limit: u32) -> Option<(usize, usize)> {
        if !(start.is_finite() && len.is_finite()) || len <= 0.0 {
            return None;
        }
        let a = start.round().max(0.0);
        let b = (start + len).round().min(limit as f32);
        if b <= a {
            return None;
        }
        Some((a as usize, b as usize))
    }

    /// Source-over blend of a solid rectangle. Alpha outside (0, 1] is clamped;
    /// zero alpha is a no-op.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Vec3, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let (Some((x0, x1)), Some((y0, y1))) = (
            Self::span(x, w, self.width),
            Self::span(y, h, self.height),
        ) else {
            return;
        };
        let src = to_rgba(color);
        let stride = self.width as usize;
        if alpha >= 1.0 {
            for row in y0..y1 {
                self.pixels[row * stride + x0..row * stride + x1].fill(src);
            }
            return;
        }
        let a = (alpha * 256.0) as u32;
        let inv = 256 - a;
        for row in y0..y1 {
            for px in &mut self.pixels[row * stride + x0..row * stride + x1] {
                for c in 0..3 {
                    px[c] = ((src[c] as u32 * a + px[c] as u32 * inv) >> 8) as u8;
                }
            }
        }
    }

    /// Vertical linear gradient across all columns of rows `[y0, y1)`.
    pub fn fill_vertical_gradient(&mut self, y0: f32, y1: f32, top: Vec3, bottom: Vec3) {
        let Some((r0, r1)) = Self::span(y0, y1 - y0, self.height) else {
            return;
        };
        let span = (y1 - y0).max(1.0);
        let stride = self.width as usize;
        for row in r0..r1 {
            let t = ((row as f32 + 0.5 - y0) / span).clamp(0.0, 1.0);
            let px = to_rgba(top.lerp(bottom, t));
            self.pixels[row * stride..(row + 1) * stride].fill(px);
        }
    }
}
